// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Each pipeline talks to its collaborators through one of
// these traits, so the network, the normalisation variant and
// the model can be swapped (or faked in tests) without touching
// the orchestration code:
//
//   PageFetcher    — HttpFetcher (reqwest)
//   TextNormalizer — SentenceNormalizer, CitationNormalizer
//   QuestionModel  — T5QuestionModel (candle)

use anyhow::Result;

// ─── PageFetcher ──────────────────────────────────────────────────────────────
/// Anything that can turn a URL into an HTML body.
pub trait PageFetcher {
    /// Fetch the body of `url`. Non-success statuses are errors.
    fn fetch(&self, url: &str) -> Result<String>;
}

// ─── TextNormalizer ───────────────────────────────────────────────────────────
/// A whole-buffer text cleaner: buffer in, buffer out.
pub trait TextNormalizer {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Clean the full buffer and return the result.
    fn normalize(&self, text: &str) -> String;
}

// ─── QuestionModel ────────────────────────────────────────────────────────────
/// Any component that can turn an instruction prompt into a question.
///
/// Takes `&mut self` because generation may mutate internal state
/// such as a decoder key/value cache.
pub trait QuestionModel {
    fn generate(&mut self, prompt: &str) -> Result<String>;
}
