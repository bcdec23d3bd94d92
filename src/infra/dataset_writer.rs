// ============================================================
// Layer 6 — Dataset Writer
// ============================================================
// Writes generated Q&A pairs to the dataset file, one record
// per pair, in generation order:
//
//   Q: What does Scrum time-box?
//   A: Sprints are time-boxed iterations ...
//   <blank line>
//
// The file is written once, after every chunk has been
// processed, and replaces any previous dataset.

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::qa_pair::QaPair;
use crate::infra::text_store::write_text;

pub struct DatasetWriter {
    /// Full path to the dataset file
    path: PathBuf,
}

impl DatasetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Concatenate the records of all pairs.
    pub fn render(pairs: &[QaPair]) -> String {
        pairs.iter().map(QaPair::to_record).collect()
    }

    pub fn write(&self, pairs: &[QaPair]) -> Result<()> {
        write_text(&self.path, &Self::render(pairs))?;
        tracing::info!("Wrote {} Q&A pairs to '{}'", pairs.len(), self.path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_records_in_order() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("qa.txt");
        let writer = DatasetWriter::new(&path);
        let pairs  = vec![
            QaPair::new("What is Scrum?", "Scrum is a framework."),
            QaPair::new("What is XP?", "XP stands for extreme programming."),
        ];

        writer.write(&pairs).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Q: What is Scrum?\nA: Scrum is a framework.\n\n\
             Q: What is XP?\nA: XP stands for extreme programming.\n\n"
        );
    }

    #[test]
    fn test_no_pairs_gives_empty_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.txt");
        DatasetWriter::new(&path).write(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
