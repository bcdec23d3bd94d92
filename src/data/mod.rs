// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that turns web pages into model-ready chunks.
//
// The three pipelines use these modules like this:
//
//   scrape:    URLs ──► PageFetcher ──► structured buffer
//
//   clean:     buffer ──► SentenceNormalizer  (variant A)
//                     or CitationNormalizer  (variant B) ──► cleaned buffer
//
//   generate:  cleaned buffer ──► Chunker ──► chunks for the model
//
// Each module does one step and can be tested on its own.

/// Fetches pages over HTTP and extracts heading/paragraph blocks
pub mod fetcher;

/// Sentence and token boundaries for the sentence normalizer
pub mod segmenter;

/// Variant A: regex rules + sentence re-tokenisation
pub mod sentence_normalizer;

/// Variant B: citation stripping + whitespace rules
pub mod citation_normalizer;

/// Greedy word-wrap chunking
pub mod chunker;
