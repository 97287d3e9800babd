//! Application-wide constants.
//!
//! Literal defaults live here; the config file and CLI flags override the
//! ones that are user-facing.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "sfxkit";

/// Default directory all outputs are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/audio";

/// Default source recording for the slicers.
pub const DEFAULT_SOURCE: &str = "assets/audio/762132__ienba__ui-buttons.wav";

/// Default MP3 bitrate passed to the encoder.
pub const DEFAULT_BITRATE: &str = "128k";

/// Default encoder binary.
pub const DEFAULT_ENCODER: &str = "ffmpeg";

/// Codec name passed to the encoder for MP3 output.
pub const MP3_CODEC: &str = "mp3";

/// Output file extension for committed clips.
pub const OUTPUT_EXTENSION: &str = "mp3";

/// Freesound API constants.
pub mod freesound {
    /// API v2 base URL.
    pub const BASE_URL: &str = "https://freesound.org/apiv2";

    /// Placeholder value shipped in templates; treated as "no key".
    pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

    /// Environment variable holding the API key.
    pub const API_KEY_ENV: &str = "SFXKIT_FREESOUND_API_KEY";

    /// Shown in place of a configured API key.
    pub const API_KEY_MASK: &str = "********";

    /// Number of search results requested per query.
    pub const DEFAULT_PAGE_SIZE: u32 = 5;

    /// Fields requested from the search endpoint.
    pub const SEARCH_FIELDS: &str = "id,name,download,previews";

    /// Sort order for search results.
    pub const SEARCH_SORT: &str = "rating_desc";

    /// Delay between effects to stay within the API rate limit.
    pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

    /// Prefix of temporary download files.
    pub const TEMP_PREFIX: &str = "temp_";

    /// Connect timeout for HTTP requests in seconds.
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;

    /// Overall timeout for HTTP requests in seconds.
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;
}

/// Slicer constants.
pub mod slicer {
    /// Sources shorter than this are divided evenly instead of using default ranges.
    pub const SHORT_SOURCE_SECS: f64 = 6.0;

    /// Step of the segment overview in seconds.
    pub const OVERVIEW_STEP_SECS: f64 = 0.5;

    /// Maximum preview length in seconds.
    pub const MAX_PREVIEW_SECS: f64 = 2.0;

    /// Default path of the interactive preview clip.
    pub const DEFAULT_PREVIEW_PATH: &str = "temp_preview.wav";
}
