use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::error::InfrastructureError;
use crate::domain::speech_synthesizer_trait::{SpeechMedia, SpeechSynthesizer};

/// Text-to-speech through the Gemini `generateContent` endpoint.
pub struct GeminiSpeechClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize, Debug)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Part {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize, Debug)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

impl GeminiSpeechClient {
    pub fn new(client: Client, api_base: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn request_body(prompt: &str, voice: &str) -> serde_json::Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": voice }
                    }
                }
            }
        })
    }

    /// First inline audio part of the response, as a data URI.
    fn extract_media(response: GenerateContentResponse) -> Option<SpeechMedia> {
        response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.inline_data)
            .map(|inline| SpeechMedia {
                url: format!("data:{};base64,{}", inline.mime_type, inline.data),
                content_type: inline.mime_type,
            })
    }
}

#[async_trait]
impl SpeechSynthesizer for GeminiSpeechClient {
    async fn synthesize(
        &self,
        prompt: &str,
        voice: &str,
    ) -> Result<Option<SpeechMedia>, InfrastructureError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            InfrastructureError::MissingCredentials("GEMINI_API_KEY is not set".to_string())
        })?;

        tracing::debug!(model = %self.model, voice = %voice, "requesting speech synthesis");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(prompt, voice))
            .send()
            .await
            .map_err(InfrastructureError::ReqwestError)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::ExternalApiError(format!(
                "speech model returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(InfrastructureError::ReqwestError)?;
        Ok(Self::extract_media(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_without_key() -> GeminiSpeechClient {
        GeminiSpeechClient::new(
            Client::new(),
            "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            "gemini-2.5-flash-preview-tts".to_string(),
            None,
        )
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            client_without_key().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GeminiSpeechClient::request_body("Say: \"marhaba\"", "Kore");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Say: \"marhaba\"");
        assert_eq!(body["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"],
            "Kore"
        );
    }

    #[test]
    fn test_extract_media_picks_first_inline_part() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "ignored" },
                        { "inlineData": { "mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAEC" } }
                    ]
                }
            }]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let media = GeminiSpeechClient::extract_media(parsed).unwrap();
        assert_eq!(media.content_type, "audio/L16;codec=pcm;rate=24000");
        assert_eq!(media.url, "data:audio/L16;codec=pcm;rate=24000;base64,AAEC");
    }

    #[test]
    fn test_extract_media_without_audio() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [{ "content": { "parts": [{ "text": "no" }] } }] }"#).unwrap();
        assert!(GeminiSpeechClient::extract_media(parsed).is_none());

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(GeminiSpeechClient::extract_media(empty).is_none());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let result = client_without_key().synthesize("prompt", "Kore").await;
        assert!(matches!(result, Err(InfrastructureError::MissingCredentials(_))));
    }
}
