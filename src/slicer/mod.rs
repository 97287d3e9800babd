//! Cutting named effect clips out of one long recording.
//!
//! The automatic path derives eight ranges from the source duration and
//! exports each one; the interactive path in [`crate::picker`] reuses the
//! range type and the encoder jobs.

pub mod command;
mod extractor;
mod plan;
mod range;

pub use command::{SliceSettings, log_audio_info};
pub use extractor::{ClipExtractor, SliceSummary};
pub use plan::{ClipPlan, RangeSource, plan_clips, segment_overview, source_ranges};
pub use range::ClipRange;
