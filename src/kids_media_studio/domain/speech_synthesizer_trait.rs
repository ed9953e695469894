use async_trait::async_trait;

use crate::infrastructure::error::InfrastructureError;

/// Audio as handed back by a speech model: a data URI holding base64 PCM and
/// the MIME type describing it, e.g. `audio/L16;codec=pcm;rate=24000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechMedia {
    pub url: String,
    pub content_type: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer {
    /// `Ok(None)` means the model answered without any audio part.
    async fn synthesize(
        &self,
        prompt: &str,
        voice: &str,
    ) -> Result<Option<SpeechMedia>, InfrastructureError>;
}
