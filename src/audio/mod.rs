//! Source recording inspection.

mod info;

pub use info::{AudioInfo, read_audio_info};
