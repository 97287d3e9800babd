//! Error types for sfxkit.

use std::path::PathBuf;

/// Result type alias for sfxkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sfxkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// No usable Freesound API key was configured.
    #[error("Freesound API key is not configured")]
    MissingApiKey,

    /// Source audio file does not exist.
    #[error("source audio file not found: {path}")]
    SourceNotFound {
        /// Path to the missing source file.
        path: PathBuf,
    },

    /// Failed to read the WAV header of a source file.
    #[error("failed to read WAV file '{path}'")]
    WavRead {
        /// Path to the WAV file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Source file reports a zero sample rate.
    #[error("WAV file '{path}' has a zero sample rate")]
    ZeroSampleRate {
        /// Path to the WAV file.
        path: PathBuf,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The encoder binary could not be started.
    #[error("failed to run encoder '{binary}'")]
    EncoderSpawn {
        /// Encoder binary that was invoked.
        binary: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The encoder exited with a failure status.
    #[error("encoder failed for '{output}' (exit code {code:?}): {stderr}")]
    EncoderFailed {
        /// Output file the encoder was writing.
        output: PathBuf,
        /// Process exit code, if any.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// HTTP request to the sound library failed.
    #[error("request to '{url}' failed")]
    Request {
        /// URL that failed.
        url: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Sound library response could not be decoded.
    #[error("unexpected response from '{url}'")]
    ResponseParse {
        /// URL that returned the response.
        url: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Download failed.
    #[error("failed to download from '{url}'")]
    DownloadFailed {
        /// URL that failed.
        url: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
