//! Interactive clip selection.
//!
//! For each effect the user types a `start,end` range, listens to a short
//! preview and confirms before the clip is written.

pub mod command;
mod input;
mod session;

pub use command::PickSettings;
pub use input::{
    Confirmation, RangeCommand, RangeInputError, parse_confirmation, parse_range_command,
};
pub use session::{EffectOutcome, PickSession, PickSummary};
