//! Output directory helpers.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Create `dir` and its parents if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::OutputDirCreateFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("assets").join("audio");

        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Idempotent
        ensure_output_dir(&dir).unwrap();
    }

    #[test]
    fn test_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("occupied");
        fs::write(&file, b"x").unwrap();

        let result = ensure_output_dir(&file);
        assert!(matches!(result, Err(Error::OutputDirCreateFailed { .. })));
    }
}
