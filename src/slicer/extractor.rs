//! Runs an extraction plan through the encoder.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::encoder::{EncodeJob, Encoder, OutputCodec};

use super::ClipPlan;

/// Outcome of a slicing run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SliceSummary {
    /// Files written, in plan order.
    pub extracted: Vec<PathBuf>,
    /// Keys skipped because their range starts past the source end.
    pub skipped: Vec<String>,
    /// Keys whose encoder run failed.
    pub failed: Vec<String>,
}

/// Cuts planned clips out of one source file as MP3.
pub struct ClipExtractor<E> {
    encoder: E,
    output_dir: PathBuf,
    bitrate: String,
}

impl<E: Encoder> ClipExtractor<E> {
    /// Create an extractor writing into `output_dir`.
    pub fn new(encoder: E, output_dir: PathBuf, bitrate: impl Into<String>) -> Self {
        Self {
            encoder,
            output_dir,
            bitrate: bitrate.into(),
        }
    }

    /// Extract every planned clip from `source`.
    ///
    /// Encoder failures are logged and recorded; they never stop the run.
    pub fn extract_all(
        &self,
        source: &Path,
        plans: &[ClipPlan<'_>],
        progress: bool,
    ) -> SliceSummary {
        let pb = if progress {
            let pb = ProgressBar::new(plans.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} clips ({msg})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut summary = SliceSummary::default();

        for plan in plans {
            let effect = plan.effect();
            pb.set_message(effect.key);

            match plan {
                ClipPlan::Skip { start, .. } => {
                    warn!(
                        "Skipping {}: start {start:.2}s is past the end of the source",
                        effect.file_name()
                    );
                    summary.skipped.push(effect.key.to_string());
                }
                ClipPlan::Extract { range, clamped, .. } => {
                    if *clamped {
                        info!("{}: end clamped to source length", effect.key);
                    }
                    info!("Extracting {} ({range})", effect.description);

                    let output = self.output_dir.join(effect.file_name());
                    let job = EncodeJob::extract(
                        source,
                        &output,
                        *range,
                        OutputCodec::Mp3 {
                            bitrate: self.bitrate.clone(),
                        },
                    );

                    match self.encoder.encode(&job) {
                        Ok(()) => {
                            pb.println(format!("  ✓ {}", effect.file_name()));
                            summary.extracted.push(output);
                        }
                        Err(e) => {
                            warn!("✗ {} failed: {e}", effect.file_name());
                            summary.failed.push(effect.key.to_string());
                        }
                    }
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("done");
        summary
    }
}
