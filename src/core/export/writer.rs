//! Output file writer

use crate::domain::{NotesTodayError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Replaces the contents of `path` with `contents`
///
/// The file is created if needed and truncated otherwise; the whole text is
/// written in one call. Parent directories are not created.
///
/// # Errors
///
/// Any failure to open, truncate or write is a [`NotesTodayError::Write`].
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| NotesTodayError::write(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| NotesTodayError::write(path, e))?;
    file.flush().map_err(|e| NotesTodayError::write(path, e))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todays_notes.txt");

        write_output(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todays_notes.txt");
        fs::write(&path, "a much longer previous export").unwrap();

        write_output(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");

        write_output(&path, "").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("todays_notes.txt");

        let err = write_output(&path, "x").unwrap_err();
        assert!(matches!(err, NotesTodayError::Write { .. }));
    }
}
