// ============================================================
// Layer 4 — Sentence Normalizer
// ============================================================
// Cleans a structured document buffer and re-emits it one
// sentence per line, tokens separated by single spaces.
//
// Cleaning steps (applied in order to the whole buffer):
//   1. Delete URLs                      "see https://x.io/a" → "see "
//   2. Glue hyphens to their neighbours "agile - based" → "agile-based"
//   3. Glue slashes to their neighbours "customer / end" → "customer/end"
//   4. Drop whitespace before , and .   "world ."       → "world."
//
// Then:
//   5. Segment into sentences and tokens (SentenceSegmenter)
//   6. Join each sentence's tokens with one space
//   7. Join sentences with newlines
//
// No lemmatisation and no case changes happen; punctuation is
// kept as its own token.

use anyhow::{Context, Result};
use regex::Regex;

use crate::data::segmenter::SentenceSegmenter;
use crate::domain::traits::TextNormalizer;

pub struct SentenceNormalizer {
    url:          Regex,
    hyphen:       Regex,
    slash:        Regex,
    before_punct: Regex,
    segmenter:    SentenceSegmenter,
}

impl SentenceNormalizer {
    /// Compile the cleaning rules and take ownership of a segmenter.
    pub fn new(segmenter: SentenceSegmenter) -> Result<Self> {
        Ok(Self {
            url:          Regex::new(r"https?://\S+").context("url pattern")?,
            hyphen:       Regex::new(r"\s*-\s*").context("hyphen pattern")?,
            slash:        Regex::new(r"\s*/\s*").context("slash pattern")?,
            before_punct: Regex::new(r"\s+([,.])").context("punctuation pattern")?,
            segmenter,
        })
    }

    /// Steps 1–4: the regex rules, before any segmentation.
    pub fn pre_clean(&self, text: &str) -> String {
        let text = self.url.replace_all(text, "");
        let text = self.hyphen.replace_all(&text, "-");
        let text = self.slash.replace_all(&text, "/");
        self.before_punct.replace_all(&text, "$1").into_owned()
    }
}

impl TextNormalizer for SentenceNormalizer {
    fn name(&self) -> &'static str {
        "sentences"
    }

    fn normalize(&self, text: &str) -> String {
        let cleaned = self.pre_clean(text);

        let sentences: Vec<String> = self
            .segmenter
            .sentences(&cleaned)
            .into_iter()
            .map(|tokens| tokens.join(" "))
            .collect();

        tracing::debug!("Segmented buffer into {} sentences", sentences.len());
        sentences.join("\n")
    }
}
