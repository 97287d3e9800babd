//! `pick` command execution.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::audio::read_audio_info;
use crate::effects::ClipEffect;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::slicer::log_audio_info;
use crate::utils::ensure_output_dir;

use super::{PickSession, PickSummary};

/// Settings for the `pick` command.
#[derive(Debug, Clone)]
pub struct PickSettings {
    /// Directory committed clips are written to.
    pub output_dir: PathBuf,
    /// MP3 bitrate for committed clips.
    pub bitrate: String,
    /// Where previews are rendered.
    pub preview_path: PathBuf,
}

/// Execute the `pick` command against the given terminal.
pub fn execute<R: BufRead, W: Write, E: Encoder>(
    source: &Path,
    effects: &[ClipEffect],
    settings: &PickSettings,
    encoder: E,
    input: R,
    mut out: W,
) -> Result<PickSummary> {
    let info = read_audio_info(source)?;
    log_audio_info(source, &info);
    ensure_output_dir(&settings.output_dir)?;

    writeln!(out, "Source duration: {:.2}s", info.duration)?;
    writeln!(out, "Choose a time range for each effect.")?;
    writeln!(out, "  start,end   e.g. 0.5,1.2")?;
    writeln!(out, "  skip        leave this effect out")?;
    writeln!(out, "  quit        stop; saved clips are kept")?;

    let summary = {
        let mut session = PickSession::new(
            input,
            &mut out,
            encoder,
            source,
            info.duration,
            &settings.output_dir,
            &settings.bitrate,
            &settings.preview_path,
        );
        session.run(effects)?
    };

    writeln!(out)?;
    writeln!(
        out,
        "Saved {} clip(s) to {}",
        summary.committed.len(),
        settings.output_dir.display()
    )?;
    if !summary.skipped.is_empty() {
        writeln!(out, "Skipped: {}", summary.skipped.join(", "))?;
    }
    if !summary.failed.is_empty() {
        writeln!(out, "Failed: {}", summary.failed.join(", "))?;
    }

    info!(
        "Pick finished: {} committed, {} skipped, {} failed{}",
        summary.committed.len(),
        summary.skipped.len(),
        summary.failed.len(),
        if summary.quit { " (quit early)" } else { "" }
    );

    Ok(summary)
}
