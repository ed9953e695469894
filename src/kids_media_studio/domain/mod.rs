pub mod audio;
pub mod color;
pub mod error;
pub mod fill_request;
pub mod flood_fill;
pub mod image;
pub mod image_processor_trait;
pub mod palette;
pub mod position;
pub mod speech_synthesizer_trait;
pub mod wav_encoder;
