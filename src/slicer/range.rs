//! Clip time ranges.

use std::fmt;

/// A `[start, end)` window in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds (exclusive).
    pub end: f64,
}

impl ClipRange {
    /// Create a range without validating it.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length in seconds.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `0 <= start < end <= duration` holds.
    pub fn fits_within(&self, duration: f64) -> bool {
        self.start >= 0.0 && self.start < self.end && self.end <= duration
    }

    /// Copy of this range with `end` limited to `duration`.
    pub fn clamp_end(self, duration: f64) -> Self {
        Self {
            start: self.start,
            end: self.end.min(duration),
        }
    }

    /// Range starting at the same point, at most `max_len` seconds long.
    pub fn truncate(self, max_len: f64) -> Self {
        Self {
            start: self.start,
            end: self.start + self.length().min(max_len),
        }
    }
}

impl fmt::Display for ClipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s - {:.2}s", self.start, self.end)
    }
}
