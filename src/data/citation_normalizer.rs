// ============================================================
// Layer 4 — Citation Normalizer
// ============================================================
// Cleans a raw buffer with plain regex rules, no tokenizer.
//
// Steps (applied in order):
//   1. strip_citations      "[12]" markers are deleted
//   2. limit_blank_lines    3+ newlines become exactly 2
//   3. collapse_whitespace  every whitespace run becomes one
//                           space, then the buffer is trimmed
//   4. isolate_headings     "**Title**" → "\n\n**Title**\n\n"
//
// Step 3 folds the paragraph breaks that step 2 just limited,
// so by default paragraphs end up on one line and only the
// headings are split out again by step 4.
//
// With `preserve_paragraphs`, step 3 only folds spaces and tabs
// inside each line and blank lines are limited again after the
// headings are isolated, keeping paragraph breaks intact.

use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::traits::TextNormalizer;

pub struct CitationNormalizer {
    citation:            Regex,
    blank_lines:         Regex,
    whitespace:          Regex,
    inline_whitespace:   Regex,
    heading:             Regex,
    preserve_paragraphs: bool,
}

impl CitationNormalizer {
    pub fn new(preserve_paragraphs: bool) -> Result<Self> {
        Ok(Self {
            citation:          Regex::new(r"\[\d+\]").context("citation pattern")?,
            blank_lines:       Regex::new(r"\n{3,}").context("blank line pattern")?,
            whitespace:        Regex::new(r"\s+").context("whitespace pattern")?,
            inline_whitespace: Regex::new(r"[^\S\n]+").context("inline whitespace pattern")?,
            heading:           Regex::new(r"\*\*(.*?)\*\*").context("heading pattern")?,
            preserve_paragraphs,
        })
    }

    /// Step 1: delete bracketed citation numerals.
    pub fn strip_citations(&self, text: &str) -> String {
        self.citation.replace_all(text, "").into_owned()
    }

    /// Step 2: no more than one blank line in a row.
    pub fn limit_blank_lines(&self, text: &str) -> String {
        self.blank_lines.replace_all(text, "\n\n").into_owned()
    }

    /// Step 3: fold whitespace and trim the buffer.
    pub fn collapse_whitespace(&self, text: &str) -> String {
        if !self.preserve_paragraphs {
            return self.whitespace.replace_all(text, " ").trim().to_string();
        }

        let folded = self.inline_whitespace.replace_all(text, " ");
        let lines: Vec<&str> = folded.lines().map(str::trim).collect();
        self.limit_blank_lines(&lines.join("\n")).trim().to_string()
    }

    /// Step 4: put every `**heading**` between blank lines.
    pub fn isolate_headings(&self, text: &str) -> String {
        let isolated = self.heading.replace_all(text, "\n\n**$1**\n\n");
        if !self.preserve_paragraphs {
            return isolated.into_owned();
        }

        // Headings next to existing breaks would leave 3+ newlines
        let lines: Vec<&str> = isolated.lines().map(str::trim).collect();
        self.limit_blank_lines(&lines.join("\n")).trim().to_string()
    }
}

impl TextNormalizer for CitationNormalizer {
    fn name(&self) -> &'static str {
        "citations"
    }

    fn normalize(&self, text: &str) -> String {
        let text = self.strip_citations(text);
        let text = self.limit_blank_lines(&text);
        let text = self.collapse_whitespace(&text);
        self.isolate_headings(&text)
    }
}
