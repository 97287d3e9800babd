//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_freesound(config)?;
    validate_output(config)?;
    validate_encoder(config)?;
    Ok(())
}

fn validate_freesound(config: &Config) -> Result<()> {
    let freesound = &config.freesound;

    if !(freesound.base_url.starts_with("https://") || freesound.base_url.starts_with("http://")) {
        return Err(Error::ConfigValidation {
            message: format!(
                "freesound.base_url must be an http(s) URL, got '{}'",
                freesound.base_url
            ),
        });
    }

    if freesound.page_size == 0 {
        return Err(Error::ConfigValidation {
            message: "freesound.page_size must be at least 1".to_string(),
        });
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if config.output.bitrate.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output.bitrate must not be empty".to_string(),
        });
    }

    if config.output.dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output.dir must not be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_encoder(config: &Config) -> Result<()> {
    if config.encoder.binary.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "encoder.binary must not be empty".to_string(),
        });
    }

    if config.encoder.preview_path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "encoder.preview_path must not be empty".to_string(),
        });
    }

    Ok(())
}
