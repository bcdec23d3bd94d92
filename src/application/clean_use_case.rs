// ============================================================
// Layer 2 — CleanUseCase
// ============================================================
//   Step 1: Build the selected normalizer (Layer 4 - data)
//   Step 2: Read the scraped buffer       (Layer 6 - infra)
//   Step 3: Normalise the whole buffer    (Layer 4 - data)
//   Step 4: Write the cleaned buffer      (Layer 6 - infra)
//
// The normalizer is built before the input is read, so a
// rule that fails to compile aborts the run before any I/O.

use anyhow::Result;

use crate::data::{
    citation_normalizer::CitationNormalizer,
    segmenter::SentenceSegmenter,
    sentence_normalizer::SentenceNormalizer,
};
use crate::domain::traits::TextNormalizer;
use crate::infra::text_store::{read_text, write_text};

/// Which cleaning rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizerVariant {
    /// Regex rules + sentence re-tokenisation, one sentence per line
    Sentences,
    /// Citation stripping + whitespace rules, no tokenizer
    Citations,
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input:               String,
    pub output:              String,
    pub variant:             NormalizerVariant,
    pub preserve_paragraphs: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input:               "agile_scraped_data.txt".to_string(),
            output:              "cleaned_agile_text.txt".to_string(),
            variant:             NormalizerVariant::Sentences,
            preserve_paragraphs: false,
        }
    }
}

/// Build the normalizer a config asks for.
pub fn build_normalizer(cfg: &CleanConfig) -> Result<Box<dyn TextNormalizer>> {
    let normalizer: Box<dyn TextNormalizer> = match cfg.variant {
        NormalizerVariant::Sentences => {
            if cfg.preserve_paragraphs {
                tracing::warn!("--preserve-paragraphs only affects the citations variant");
            }
            Box::new(SentenceNormalizer::new(SentenceSegmenter::new())?)
        }
        NormalizerVariant::Citations => Box::new(CitationNormalizer::new(cfg.preserve_paragraphs)?),
    };
    Ok(normalizer)
}

pub struct CleanUseCase {
    config: CleanConfig,
}

impl CleanUseCase {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Returns the length in bytes of the cleaned buffer.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        let normalizer = build_normalizer(cfg)?;
        tracing::info!("Cleaning '{}' with the {} normalizer", cfg.input, normalizer.name());

        let raw     = read_text(&cfg.input)?;
        let cleaned = normalizer.normalize(&raw);

        write_text(&cfg.output, &cleaned)?;
        tracing::info!("Cleaned {} bytes down to {} bytes", raw.len(), cleaned.len());
        Ok(cleaned.len())
    }
}
