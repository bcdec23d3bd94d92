// ============================================================
// Layer 6 — Text Store
// ============================================================
// Whole-file UTF-8 reads and writes for the files the pipelines
// hand to each other. A missing input file is fatal for the
// pipeline that needs it.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Read an entire UTF-8 file into memory.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    tracing::debug!("Read {} bytes from '{}'", text.len(), path.display());
    Ok(text)
}

/// Replace the contents of `path` with `text`.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text)
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    tracing::debug!("Wrote {} bytes to '{}'", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_text(&path, "Scrum — ünïcode ✓").unwrap();
        assert_eq!(read_text(&path).unwrap(), "Scrum — ünïcode ✓");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
