//! `slice` command execution.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::audio::{AudioInfo, read_audio_info};
use crate::constants::slicer::OVERVIEW_STEP_SECS;
use crate::effects::ClipEffect;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::utils::ensure_output_dir;

use super::{ClipExtractor, RangeSource, SliceSummary, plan_clips, segment_overview};

/// Settings shared by the slicing commands.
#[derive(Debug, Clone)]
pub struct SliceSettings {
    /// Directory clips are written to.
    pub output_dir: PathBuf,
    /// MP3 bitrate.
    pub bitrate: String,
    /// Show a progress bar.
    pub progress: bool,
}

/// Log the header of a source recording.
pub fn log_audio_info(path: &Path, info: &AudioInfo) {
    info!("Source: {}", path.display());
    info!("  Duration: {:.2}s", info.duration);
    info!("  Sample rate: {} Hz", info.sample_rate);
    info!("  Channels: {}", info.channels);
    info!("  Bit depth: {} bit", info.bits_per_sample);
    info!("  Frames: {}", info.frames);
}

/// Execute the `slice` command.
///
/// Fails only if the source cannot be read or the output directory cannot
/// be created; per-clip failures end up in the summary.
pub fn execute<E: Encoder>(
    source: &Path,
    effects: &[ClipEffect],
    settings: &SliceSettings,
    encoder: E,
) -> Result<SliceSummary> {
    let info = read_audio_info(source)?;
    log_audio_info(source, &info);

    for window in segment_overview(info.duration, OVERVIEW_STEP_SECS) {
        debug!("  window {window}");
    }

    ensure_output_dir(&settings.output_dir)?;

    let (range_source, plans) = plan_clips(effects, info.duration);
    if range_source == RangeSource::EvenSplit {
        info!(
            "Source is short ({:.2}s); splitting it into {} equal clips",
            info.duration,
            effects.len()
        );
    }

    let extractor = ClipExtractor::new(
        encoder,
        settings.output_dir.clone(),
        settings.bitrate.clone(),
    );
    let summary = extractor.extract_all(source, &plans, settings.progress);

    info!(
        "Complete: {} extracted, {} skipped, {} failed -> {}",
        summary.extracted.len(),
        summary.skipped.len(),
        summary.failed.len(),
        settings.output_dir.display()
    );
    if !summary.failed.is_empty() {
        warn!("Failed clips: {}", summary.failed.join(", "));
    }

    Ok(summary)
}
