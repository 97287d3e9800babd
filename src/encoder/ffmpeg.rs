//! `ffmpeg` subprocess backend.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::{EncodeJob, Encoder};
use crate::error::{Error, Result};

/// Runs an `ffmpeg`-compatible binary, blocking until it exits.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    binary: PathBuf,
}

impl FfmpegEncoder {
    /// Create an encoder that invokes `binary` (a path or a name on `PATH`).
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, job: &EncodeJob) -> Result<()> {
        let args = job.args();
        debug!("Running {} {:?}", self.binary.display(), args);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| Error::EncoderSpawn {
                binary: self.binary.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::EncoderFailed {
                output: job.output.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let encoder = FfmpegEncoder::new("/nonexistent/bin/ffmpeg-sfxkit");
        let job = EncodeJob::transcode(Path::new("in.wav"), Path::new("out.mp3"), "128k");

        let result = encoder.encode(&job);
        assert!(matches!(result, Err(Error::EncoderSpawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_encoder_failure() {
        // `false` ignores its arguments and exits 1
        let encoder = FfmpegEncoder::new("false");
        let job = EncodeJob::transcode(Path::new("in.wav"), Path::new("out.mp3"), "128k");

        match encoder.encode(&job) {
            Err(Error::EncoderFailed { output, code, .. }) => {
                assert_eq!(output, PathBuf::from("out.mp3"));
                assert_eq!(code, Some(1));
            }
            other => panic!("expected EncoderFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let encoder = FfmpegEncoder::new("true");
        let job = EncodeJob::transcode(Path::new("in.wav"), Path::new("out.mp3"), "128k");
        assert!(encoder.encode(&job).is_ok());
    }
}
