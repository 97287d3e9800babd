//! Interactive pick session.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::slicer::MAX_PREVIEW_SECS;
use crate::effects::ClipEffect;
use crate::encoder::{EncodeJob, Encoder, OutputCodec};
use crate::error::Result;
use crate::slicer::ClipRange;
use crate::utils::TempFile;

use super::{Confirmation, RangeCommand, parse_confirmation, parse_range_command};

/// Where one effect ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Clip written to the output directory.
    Committed,
    /// User skipped the effect.
    Skipped,
    /// Commit was attempted and the encoder failed.
    Failed,
}

/// Outcome of a pick session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PickSummary {
    /// Keys with a committed clip.
    pub committed: Vec<String>,
    /// Keys the user skipped.
    pub skipped: Vec<String>,
    /// Keys whose commit failed.
    pub failed: Vec<String>,
    /// Whether the user quit before the last effect.
    pub quit: bool,
}

/// Per-effect prompt state.
#[derive(Debug, Clone, Copy)]
enum PickState {
    AwaitingRange,
    PreviewGenerated(ClipRange),
}

enum Step {
    Done(EffectOutcome),
    Quit,
}

/// Prompts for one range per effect, previews it and commits on confirmation.
///
/// Generic over the terminal so tests can script the answers.
pub struct PickSession<R, W, E> {
    input: R,
    out: W,
    encoder: E,
    source: PathBuf,
    duration: f64,
    output_dir: PathBuf,
    bitrate: String,
    preview: TempFile,
}

impl<R: BufRead, W: Write, E: Encoder> PickSession<R, W, E> {
    /// Create a session over `source`, whose length is `duration` seconds.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: R,
        out: W,
        encoder: E,
        source: &Path,
        duration: f64,
        output_dir: &Path,
        bitrate: &str,
        preview_path: &Path,
    ) -> Self {
        Self {
            input,
            out,
            encoder,
            source: source.to_path_buf(),
            duration,
            output_dir: output_dir.to_path_buf(),
            bitrate: bitrate.to_string(),
            preview: TempFile::new(preview_path),
        }
    }

    /// Walk `effects` in order until done or the user quits.
    ///
    /// Only terminal I/O errors abort; encoder failures are reported and the
    /// session moves on.
    pub fn run(&mut self, effects: &[ClipEffect]) -> Result<PickSummary> {
        let mut summary = PickSummary::default();

        for effect in effects {
            writeln!(self.out, "\n--- {} ({}) ---", effect.description, effect.key)?;

            match self.pick_effect(effect)? {
                Step::Quit => {
                    writeln!(self.out, "Quitting.")?;
                    summary.quit = true;
                    break;
                }
                Step::Done(EffectOutcome::Committed) => {
                    summary.committed.push(effect.key.to_string());
                }
                Step::Done(EffectOutcome::Skipped) => {
                    summary.skipped.push(effect.key.to_string());
                }
                Step::Done(EffectOutcome::Failed) => {
                    summary.failed.push(effect.key.to_string());
                }
            }
        }

        Ok(summary)
    }

    fn pick_effect(&mut self, effect: &ClipEffect) -> Result<Step> {
        let mut state = PickState::AwaitingRange;

        loop {
            state = match state {
                PickState::AwaitingRange => {
                    let prompt = format!("Enter range (0-{:.1}s): ", self.duration);
                    let Some(answer) = self.ask(&prompt)? else {
                        return Ok(Step::Quit);
                    };

                    match parse_range_command(&answer, self.duration) {
                        Ok(RangeCommand::Quit) => return Ok(Step::Quit),
                        Ok(RangeCommand::Skip) => {
                            writeln!(self.out, "Skipping {}", effect.description)?;
                            return Ok(Step::Done(EffectOutcome::Skipped));
                        }
                        Ok(RangeCommand::Range(range)) => self.render_preview(range)?,
                        Err(e) => {
                            writeln!(self.out, "{e}")?;
                            PickState::AwaitingRange
                        }
                    }
                }
                PickState::PreviewGenerated(range) => {
                    let Some(answer) = self.ask("Use this clip? (y/n/preview): ")? else {
                        return Ok(Step::Quit);
                    };

                    match parse_confirmation(&answer) {
                        Confirmation::Accept => {
                            return Ok(Step::Done(self.commit(effect, range)?));
                        }
                        Confirmation::Replay => self.render_preview(range)?,
                        Confirmation::Reject => {
                            writeln!(self.out, "Enter a new range.")?;
                            PickState::AwaitingRange
                        }
                    }
                }
            };
        }
    }

    /// Print `prompt` and read one line; `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render_preview(&mut self, range: ClipRange) -> Result<PickState> {
        let preview_range = range.truncate(MAX_PREVIEW_SECS);
        let job = EncodeJob::extract(
            &self.source,
            self.preview.path(),
            preview_range,
            OutputCodec::Container,
        );

        match self.encoder.encode(&job) {
            Ok(()) => {
                writeln!(
                    self.out,
                    "Preview ready: {} ({preview_range}). Play it to check the clip.",
                    self.preview.path().display()
                )?;
                Ok(PickState::PreviewGenerated(range))
            }
            Err(e) => {
                warn!("Preview failed: {e}");
                writeln!(self.out, "Preview failed, enter the range again.")?;
                Ok(PickState::AwaitingRange)
            }
        }
    }

    fn commit(&mut self, effect: &ClipEffect, range: ClipRange) -> Result<EffectOutcome> {
        let output = self.output_dir.join(effect.file_name());
        let job = EncodeJob::extract(
            &self.source,
            &output,
            range,
            OutputCodec::Mp3 {
                bitrate: self.bitrate.clone(),
            },
        );

        match self.encoder.encode(&job) {
            Ok(()) => {
                info!("Committed {} ({range})", output.display());
                writeln!(self.out, "✓ {} saved", effect.file_name())?;
                Ok(EffectOutcome::Committed)
            }
            Err(e) => {
                warn!("✗ {} failed: {e}", effect.file_name());
                writeln!(self.out, "✗ {} could not be written", effect.file_name())?;
                Ok(EffectOutcome::Failed)
            }
        }
    }
}
