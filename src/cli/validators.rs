//! CLI argument validators.

/// Parse a positive, finite number of seconds.
pub fn parse_step(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("step must be a positive number of seconds, got {value}"));
    }

    Ok(value)
}
