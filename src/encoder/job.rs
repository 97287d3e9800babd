//! Encoder job description and argument rendering.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::MP3_CODEC;
use crate::slicer::ClipRange;

/// Codec settings for the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputCodec {
    /// Let the encoder pick the codec from the output extension.
    Container,
    /// MP3 at the given bitrate (e.g. `128k`).
    Mp3 {
        /// Encoder bitrate string.
        bitrate: String,
    },
}

/// One invocation of the external encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeJob {
    /// Input media file.
    pub input: PathBuf,
    /// Output file, overwritten if present.
    pub output: PathBuf,
    /// Start offset in seconds.
    pub start: Option<f64>,
    /// Length in seconds.
    pub length: Option<f64>,
    /// Output codec.
    pub codec: OutputCodec,
}

impl EncodeJob {
    /// Transcode a whole file to MP3.
    pub fn transcode(input: &Path, output: &Path, bitrate: &str) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            start: None,
            length: None,
            codec: OutputCodec::Mp3 {
                bitrate: bitrate.to_string(),
            },
        }
    }

    /// Extract `range` from `input`.
    pub fn extract(input: &Path, output: &Path, range: ClipRange, codec: OutputCodec) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            start: Some(range.start),
            length: Some(range.length()),
            codec,
        }
    }

    /// Render the command-line arguments, excluding the binary.
    ///
    /// Seeking options follow `-i` so the cut is sample accurate.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-i".into(), self.input.clone().into()];

        if let Some(start) = self.start {
            args.push("-ss".into());
            args.push(start.to_string().into());
        }
        if let Some(length) = self.length {
            args.push("-t".into());
            args.push(length.to_string().into());
        }
        if let OutputCodec::Mp3 { bitrate } = &self.codec {
            args.push("-acodec".into());
            args.push(MP3_CODEC.into());
            args.push("-ab".into());
            args.push(bitrate.into());
        }

        args.push("-y".into());
        args.push(self.output.clone().into());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(job: &EncodeJob) -> Vec<String> {
        job.args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_transcode_args() {
        let job = EncodeJob::transcode(Path::new("temp_win.mp3"), Path::new("out/win.mp3"), "128k");
        assert_eq!(
            strings(&job),
            [
                "-i",
                "temp_win.mp3",
                "-acodec",
                "mp3",
                "-ab",
                "128k",
                "-y",
                "out/win.mp3"
            ]
        );
    }

    #[test]
    fn test_extract_mp3_args() {
        let job = EncodeJob::extract(
            Path::new("src.wav"),
            Path::new("bid.mp3"),
            ClipRange::new(1.5, 2.0),
            OutputCodec::Mp3 {
                bitrate: "128k".to_string(),
            },
        );
        assert_eq!(
            strings(&job),
            [
                "-i", "src.wav", "-ss", "1.5", "-t", "0.5", "-acodec", "mp3", "-ab", "128k", "-y",
                "bid.mp3"
            ]
        );
    }

    #[test]
    fn test_extract_preview_keeps_container_codec() {
        let job = EncodeJob::extract(
            Path::new("src.wav"),
            Path::new("temp_preview.wav"),
            ClipRange::new(0.0, 2.0),
            OutputCodec::Container,
        );
        assert_eq!(
            strings(&job),
            ["-i", "src.wav", "-ss", "0", "-t", "2", "-y", "temp_preview.wav"]
        );
    }
}
