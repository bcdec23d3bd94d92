// ============================================================
// Layer 5 — Question Generator
// ============================================================
// Turns chunks into Q&A pairs:
//
//   for each of the first `max_chunks` chunks, in order:
//     prompt   = "Generate a question based on this text: " + chunk
//     question = model.generate(prompt)
//     pair     = (question, chunk)
//
// There is no retry: the first model error aborts the loop and
// no pairs are returned.

use anyhow::{Context, Result};

use crate::domain::qa_pair::QaPair;
use crate::domain::traits::QuestionModel;

/// Instruction placed in front of every chunk
pub const PROMPT_PREFIX: &str = "Generate a question based on this text: ";

pub fn build_prompt(chunk: &str) -> String {
    format!("{PROMPT_PREFIX}{chunk}")
}

/// Generate one question per chunk, for at most `max_chunks` chunks.
pub fn generate_pairs<M: QuestionModel + ?Sized>(
    model:      &mut M,
    chunks:     &[String],
    max_chunks: usize,
) -> Result<Vec<QaPair>> {
    let selected = &chunks[..chunks.len().min(max_chunks)];
    if selected.len() < chunks.len() {
        tracing::info!(
            "Processing the first {} of {} chunks",
            selected.len(),
            chunks.len()
        );
    }

    let mut pairs = Vec::with_capacity(selected.len());
    for (i, chunk) in selected.iter().enumerate() {
        let question = model
            .generate(&build_prompt(chunk))
            .with_context(|| format!("Question generation failed on chunk {}", i + 1))?;

        tracing::info!("Chunk {}/{}: {}", i + 1, selected.len(), question);
        pairs.push(QaPair::new(question, chunk.as_str()));
    }

    Ok(pairs)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    /// Answers "Question N?" and remembers every prompt it saw.
    #[derive(Default)]
    struct ScriptedModel {
        prompts: Vec<String>,
        fail_on: Option<usize>,
    }

    impl QuestionModel for ScriptedModel {
        fn generate(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            if self.fail_on == Some(self.prompts.len()) {
                bail!("out of memory");
            }
            Ok(format!("Question {}?", self.prompts.len()))
        }
    }

    fn chunks(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("chunk {i}")).collect()
    }

    #[test]
    fn test_pairs_follow_chunk_order() {
        let mut model = ScriptedModel::default();
        let pairs = generate_pairs(&mut model, &chunks(3), 20).unwrap();

        assert_eq!(
            pairs,
            vec![
                QaPair::new("Question 1?", "chunk 1"),
                QaPair::new("Question 2?", "chunk 2"),
                QaPair::new("Question 3?", "chunk 3"),
            ]
        );
        assert_eq!(model.prompts[0], "Generate a question based on this text: chunk 1");
    }

    #[test]
    fn test_only_first_chunks_are_used() {
        let mut model = ScriptedModel::default();
        let pairs = generate_pairs(&mut model, &chunks(25), 20).unwrap();
        assert_eq!(pairs.len(), 20);
        assert_eq!(model.prompts.len(), 20);
        assert_eq!(pairs[19].chunk, "chunk 20");
    }

    #[test]
    fn test_model_failure_aborts_remaining_chunks() {
        let mut model = ScriptedModel { fail_on: Some(2), ..Default::default() };
        let err = generate_pairs(&mut model, &chunks(5), 20).unwrap_err();
        assert_eq!(model.prompts.len(), 2);
        assert!(format!("{err:#}").contains("chunk 2"));
    }

    #[test]
    fn test_no_chunks_no_pairs() {
        let mut model = ScriptedModel::default();
        assert!(generate_pairs(&mut model, &[], 20).unwrap().is_empty());
    }
}
