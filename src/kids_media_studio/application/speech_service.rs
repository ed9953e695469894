use std::sync::Arc;
use super::error::ApplicationError;

use crate::domain::audio::PcmAudio;
use crate::domain::error::DomainError;
use crate::domain::speech_synthesizer_trait::SpeechSynthesizer;
use crate::domain::wav_encoder;
use crate::infrastructure::data_uri::decode_data_uri;

/// Used when the model's MIME type carries no usable `rate=` parameter.
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;

const NO_MEDIA_MESSAGE: &str = "No media was returned from the AI model.";

/// Extracts the sample rate from a MIME type such as `audio/L16;codec=pcm;rate=24000`.
/// Only a parameter named exactly `rate` counts. Missing, malformed or zero rates
/// fall back to [`DEFAULT_SAMPLE_RATE`].
pub fn parse_sample_rate(content_type: &str) -> u32 {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|rate| *rate > 0)
        .unwrap_or(DEFAULT_SAMPLE_RATE)
}

pub fn speech_prompt(text: &str) -> String {
    format!("Say clearly and naturally in Egyptian Arabic: \"{}\"", text)
}

pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer + Send + Sync>,
    default_voice: String,
}

impl SpeechService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer + Send + Sync>, default_voice: String) -> Self {
        Self { synthesizer, default_voice }
    }

    /// Speaks `text` and returns a `data:audio/wav;base64,...` URI.
    pub async fn text_to_speech(&self, text: &str, voice: Option<&str>) -> Result<String, ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::invalid("text to speak must not be empty").into());
        }
        let voice = voice
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_voice.as_str());

        let media = self
            .synthesizer
            .synthesize(&speech_prompt(text), voice)
            .await?
            .filter(|m| !m.url.is_empty() && !m.content_type.is_empty())
            .ok_or_else(|| ApplicationError::UpstreamUnavailable(NO_MEDIA_MESSAGE.to_string()))?;

        let sample_rate = parse_sample_rate(&media.content_type);
        let pcm = decode_data_uri(&media.url).map_err(|e| {
            tracing::warn!(error = %e, "speech model returned an undecodable payload");
            ApplicationError::UpstreamUnavailable(NO_MEDIA_MESSAGE.to_string())
        })?;
        if pcm.is_empty() {
            return Err(ApplicationError::UpstreamUnavailable(NO_MEDIA_MESSAGE.to_string()));
        }

        let audio = PcmAudio::mono16(pcm, sample_rate)?;
        let wav = wav_encoder::encode(&audio);
        tracing::info!(
            voice = %voice,
            sample_rate,
            pcm_bytes = audio.samples().len(),
            duration_secs = audio.duration_seconds(),
            "synthesized speech"
        );
        Ok(wav.to_data_uri())
    }
}
