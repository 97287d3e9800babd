//! Configuration type definitions.

use crate::constants::freesound::{
    API_KEY_MASK, BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_DELAY_MS,
};
use crate::constants::slicer::DEFAULT_PREVIEW_PATH;
use crate::constants::{DEFAULT_BITRATE, DEFAULT_ENCODER, DEFAULT_OUTPUT_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Freesound API settings.
    pub freesound: FreesoundConfig,

    /// Output settings.
    pub output: OutputConfig,

    /// External encoder settings.
    pub encoder: EncoderConfig,
}

impl Config {
    /// Copy suitable for display, with the API key masked.
    pub fn redacted(&self) -> Self {
        let mut shown = self.clone();
        if let Some(key) = shown.freesound.api_key.as_mut() {
            *key = API_KEY_MASK.to_string();
        }
        shown
    }
}

/// Freesound API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreesoundConfig {
    /// API key; unset keeps `fetch` from running.
    pub api_key: Option<String>,

    /// API base URL.
    pub base_url: String,

    /// Results requested per search.
    pub page_size: u32,

    /// Pause between effects in milliseconds.
    pub request_delay_ms: u64,
}

impl Default for FreesoundConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory every command writes into.
    pub dir: PathBuf,

    /// MP3 bitrate (encoder syntax, e.g. `128k`).
    pub bitrate: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            bitrate: DEFAULT_BITRATE.to_string(),
        }
    }
}

/// External encoder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Encoder binary name or path.
    pub binary: PathBuf,

    /// Where `pick` renders previews.
    pub preview_path: PathBuf,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_ENCODER),
            preview_path: PathBuf::from(DEFAULT_PREVIEW_PATH),
        }
    }
}
