//! File system helpers used by the applier and the generator.
//!
//! Every write goes through [`safe_write`], so an output file either holds the
//! previous content or the new content, never a partial write.

pub mod atomic;
pub mod dirs;

pub use atomic::safe_write;

use anyhow::{Context, Result};
use std::path::Path;

/// Read a UTF-8 text file, naming the path on failure.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read a text file if it exists.
///
/// Returns `Ok(None)` for a missing file, any other failure is an error.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_text_names_missing_path() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("python.jjt");

        let err = read_text(&missing).unwrap_err();
        assert!(err.to_string().contains("python.jjt"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_read_text_if_exists() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");
        assert_eq!(read_text_if_exists(&path).unwrap(), None);

        std::fs::write(&path, "content").unwrap();
        assert_eq!(read_text_if_exists(&path).unwrap().as_deref(), Some("content"));
    }
}
