//! Range derivation for the automatic slicer.

use crate::constants::slicer::SHORT_SOURCE_SECS;
use crate::effects::ClipEffect;

use super::ClipRange;

/// Where the ranges of a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource {
    /// Configured default ranges, used verbatim.
    Defaults,
    /// Source too short; the whole duration split into equal segments.
    EvenSplit,
}

/// What to do with one effect.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipPlan<'a> {
    /// Extract `range` for `effect`.
    Extract {
        /// Effect being cut.
        effect: &'a ClipEffect,
        /// Range after clamping to the source duration.
        range: ClipRange,
        /// Whether the end was clamped.
        clamped: bool,
    },
    /// Nothing to extract for `effect`.
    Skip {
        /// Effect being skipped.
        effect: &'a ClipEffect,
        /// Start of the unclamped range, at or past the source end.
        start: f64,
    },
}

impl ClipPlan<'_> {
    /// Effect this plan entry is for.
    pub fn effect(&self) -> &ClipEffect {
        match self {
            Self::Extract { effect, .. } | Self::Skip { effect, .. } => effect,
        }
    }
}

/// Pick the ranges for `effects` given the source duration.
///
/// Sources of at least [`SHORT_SOURCE_SECS`] keep the defaults. Shorter ones
/// are cut into `effects.len()` contiguous equal segments covering `[0, duration)`.
pub fn source_ranges(effects: &[ClipEffect], duration: f64) -> (RangeSource, Vec<ClipRange>) {
    if duration >= SHORT_SOURCE_SECS {
        let ranges = effects.iter().map(|e| e.default_range).collect();
        return (RangeSource::Defaults, ranges);
    }

    #[allow(clippy::cast_precision_loss)]
    let segment = duration / effects.len().max(1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let ranges = (0..effects.len())
        .map(|i| ClipRange::new(i as f64 * segment, (i + 1) as f64 * segment))
        .collect();
    (RangeSource::EvenSplit, ranges)
}

/// Build the extraction plan for `effects`.
///
/// Ranges starting at or after the end of the source are skipped; ranges
/// running past it are clamped.
pub fn plan_clips(effects: &[ClipEffect], duration: f64) -> (RangeSource, Vec<ClipPlan<'_>>) {
    let (source, ranges) = source_ranges(effects, duration);

    let plans = effects
        .iter()
        .zip(ranges)
        .map(|(effect, range)| {
            if range.start >= duration {
                ClipPlan::Skip {
                    effect,
                    start: range.start,
                }
            } else {
                ClipPlan::Extract {
                    effect,
                    range: range.clamp_end(duration),
                    clamped: range.end > duration,
                }
            }
        })
        .collect();

    (source, plans)
}

/// Fixed-step windows over the source, for eyeballing where sounds sit.
///
/// Produces `floor(duration / step)` windows; a trailing partial window is
/// dropped. Returns nothing for a non-positive step.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn segment_overview(duration: f64, step: f64) -> Vec<ClipRange> {
    if step <= 0.0 || !step.is_finite() || duration <= 0.0 {
        return Vec::new();
    }

    let count = (duration / step).floor() as usize;

    (0..count)
        .map(|i| {
            let start = i as f64 * step;
            ClipRange::new(start, ((i + 1) as f64 * step).min(duration))
        })
        .collect()
}
