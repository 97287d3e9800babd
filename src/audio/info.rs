//! WAV header inspection.

use std::path::Path;

use hound::WavReader;

use crate::error::{Error, Result};

/// Properties of a source recording, read once from its header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioInfo {
    /// Duration in seconds (`frames / sample_rate`).
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Frames per channel.
    pub frames: u32,
}

impl AudioInfo {
    /// Build from header values.
    ///
    /// Callers must reject a zero sample rate first.
    pub fn from_header(frames: u32, sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            duration: f64::from(frames) / f64::from(sample_rate),
            sample_rate,
            channels,
            bits_per_sample,
            frames,
        }
    }
}

/// Read the header of a WAV file.
///
/// Only the header is parsed; sample data is never decoded.
pub fn read_audio_info(path: &Path) -> Result<AudioInfo> {
    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = WavReader::open(path).map_err(|e| Error::WavRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let spec = reader.spec();

    if spec.sample_rate == 0 {
        return Err(Error::ZeroSampleRate {
            path: path.to_path_buf(),
        });
    }

    Ok(AudioInfo::from_header(
        reader.duration(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
    ))
}
