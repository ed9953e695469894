pub mod coloring_service;
pub mod error;
pub mod speech_service;
