//! Freesound API response shapes.
//!
//! Only the fields sfxkit reads are modelled; everything else is ignored.

use serde::Deserialize;

/// Response of `GET /search/text/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches reported by the server.
    #[serde(default)]
    pub count: u64,
    /// Current page of results, best rated first.
    #[serde(default)]
    pub results: Vec<SoundSummary>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoundSummary {
    /// Sound id.
    pub id: u64,
    /// Uploader-given name.
    pub name: String,
}

/// Response of `GET /sounds/{id}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundDetail {
    /// Authenticated download URL of the original file.
    pub download: String,
}
