//! Parsing of interactive answers.

use crate::slicer::ClipRange;

/// Answer to the range prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeCommand {
    /// Stop the whole session.
    Quit,
    /// Leave this effect without output.
    Skip,
    /// A validated range.
    Range(ClipRange),
}

/// Why a range answer was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeInputError {
    /// No comma between start and end.
    #[error("expected start,end (for example 0.5,1.2)")]
    MissingSeparator,

    /// One side is not a finite number.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Numbers parsed but the range is unusable.
    #[error("invalid range: need 0 <= start < end <= {duration:.1}")]
    OutOfBounds {
        /// Source duration in seconds.
        duration: f64,
    },
}

/// Answer to the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Commit the clip.
    Accept,
    /// Render the same preview again.
    Replay,
    /// Ask for a new range.
    Reject,
}

/// Parse a range prompt answer against the source duration.
///
/// Keywords are matched case-insensitively after trimming.
pub fn parse_range_command(input: &str, duration: f64) -> Result<RangeCommand, RangeInputError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("quit") {
        return Ok(RangeCommand::Quit);
    }
    if input.eq_ignore_ascii_case("skip") {
        return Ok(RangeCommand::Skip);
    }

    let (start, end) = input
        .split_once(',')
        .ok_or(RangeInputError::MissingSeparator)?;
    let range = ClipRange::new(parse_seconds(start)?, parse_seconds(end)?);

    if !range.fits_within(duration) {
        return Err(RangeInputError::OutOfBounds { duration });
    }

    Ok(RangeCommand::Range(range))
}

fn parse_seconds(s: &str) -> Result<f64, RangeInputError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RangeInputError::NotANumber(s.to_string())),
    }
}

/// Parse a confirmation prompt answer.
pub fn parse_confirmation(input: &str) -> Confirmation {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") {
        Confirmation::Accept
    } else if input.eq_ignore_ascii_case("preview") {
        Confirmation::Replay
    } else {
        Confirmation::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_range_command("quit", 5.0), Ok(RangeCommand::Quit));
        assert_eq!(parse_range_command("  SKIP \n", 5.0), Ok(RangeCommand::Skip));
    }

    #[test]
    fn test_valid_pair() {
        assert_eq!(
            parse_range_command("0.5, 1.2", 5.0),
            Ok(RangeCommand::Range(ClipRange::new(0.5, 1.2)))
        );
        assert_eq!(
            parse_range_command("0,5", 5.0),
            Ok(RangeCommand::Range(ClipRange::new(0.0, 5.0)))
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_range_command("0.5 1.2", 5.0),
            Err(RangeInputError::MissingSeparator)
        );
        assert_eq!(parse_range_command("", 5.0), Err(RangeInputError::MissingSeparator));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            parse_range_command("a,1", 5.0),
            Err(RangeInputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_range_command("0,1,2", 5.0),
            Err(RangeInputError::NotANumber("1,2".to_string()))
        );
        assert_eq!(
            parse_range_command("nan,1", 5.0),
            Err(RangeInputError::NotANumber("nan".to_string()))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        for input in ["-0.1,1", "1,1", "2,1", "4,5.01"] {
            assert_eq!(
                parse_range_command(input, 5.0),
                Err(RangeInputError::OutOfBounds { duration: 5.0 }),
                "{input}"
            );
        }
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(parse_confirmation("y"), Confirmation::Accept);
        assert_eq!(parse_confirmation("Y\n"), Confirmation::Accept);
        assert_eq!(parse_confirmation("preview"), Confirmation::Replay);
        assert_eq!(parse_confirmation("n"), Confirmation::Reject);
        assert_eq!(parse_confirmation("yes"), Confirmation::Reject);
    }
}
