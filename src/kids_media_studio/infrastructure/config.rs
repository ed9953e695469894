use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::application::error::ApplicationError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3300";
pub const DEFAULT_STATIC_DIR: &str = "frontend/build";
pub const DEFAULT_ARTWORK_PATH: &str = "output.png";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_VOICE: &str = "Kore";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub speech: SpeechSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub artwork_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub api_base: String,
    pub model: String,
    pub default_voice: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApplicationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let bind_raw = or("STUDIO_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| {
            ApplicationError::ConfigurationError(format!("STUDIO_BIND_ADDR={:?} is not a socket address: {}", bind_raw, e))
        })?;

        Ok(Settings {
            server: ServerSettings {
                bind_addr,
                static_dir: PathBuf::from(or("STUDIO_STATIC_DIR", DEFAULT_STATIC_DIR)),
                artwork_path: PathBuf::from(or("STUDIO_ARTWORK_PATH", DEFAULT_ARTWORK_PATH)),
            },
            speech: SpeechSettings {
                api_base: or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                model: or("GEMINI_TTS_MODEL", DEFAULT_TTS_MODEL),
                default_voice: or("TTS_DEFAULT_VOICE", DEFAULT_VOICE),
                api_key: get("GEMINI_API_KEY"),
            },
            logging: LoggingSettings {
                json_format: get("LOG_FORMAT").map(|v| v.eq_ignore_ascii_case("json")).unwrap_or(false),
            },
        })
    }
}
