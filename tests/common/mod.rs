//! Shared test helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use sfxkit::encoder::{EncodeJob, Encoder};
use sfxkit::{Error, Result};

/// Encoder that records every job and touches its output file.
#[derive(Default)]
pub struct RecordingEncoder {
    pub jobs: RefCell<Vec<EncodeJob>>,
    failing: Vec<String>,
}

impl RecordingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every job whose output file name is in `names`.
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            jobs: RefCell::default(),
            failing: names.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn jobs(&self) -> Vec<EncodeJob> {
        self.jobs.borrow().clone()
    }

    pub fn output_names(&self) -> Vec<String> {
        self.jobs
            .borrow()
            .iter()
            .map(|job| {
                job.output
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }
}

impl Encoder for RecordingEncoder {
    fn encode(&self, job: &EncodeJob) -> Result<()> {
        self.jobs.borrow_mut().push(job.clone());

        let name = job
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            return Err(Error::EncoderFailed {
                output: job.output.clone(),
                code: Some(1),
                stderr: "simulated failure".to_string(),
            });
        }

        std::fs::write(&job.output, b"encoded")?;
        Ok(())
    }
}

/// Write a silent 16-bit mono WAV of `duration` seconds at 1 kHz.
pub fn write_silent_wav(path: &Path, duration: f64) {
    let sample_rate = 1000u32;
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let frames = (duration * f64::from(sample_rate)).round() as u32;

    let mut writer = WavWriter::create(path, spec).unwrap();
    for _ in 0..frames {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
}
