pub mod axum_handler;
pub mod config;
pub mod data_uri;
pub mod error;
pub mod external_image_fetcher;
pub mod file_storage;
pub mod gemini_speech_client;
pub mod image_processor;
pub mod observability;
