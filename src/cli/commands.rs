// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags. Every default is the
// fixed file name or constant the pipelines have always used,
// so running a subcommand with no flags reproduces the plain
// one-shot behaviour.

use clap::{Args, Subcommand, ValueEnum};
use std::num::NonZeroUsize;

use crate::application::{
    clean_use_case::{CleanConfig, NormalizerVariant},
    generate_use_case::GenerateConfig,
    scrape_use_case::{ScrapeConfig, DEFAULT_SOURCES},
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the source pages and write the structured buffer
    Scrape(ScrapeArgs),

    /// Normalise the scraped buffer
    Clean(CleanArgs),

    /// Generate a Q&A dataset from the cleaned buffer
    Generate(GenerateArgs),

    /// Run scrape, clean and generate in sequence with default settings
    Run,
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Where to write the structured buffer
    #[arg(long, default_value = "agile_scraped_data.txt")]
    pub output: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// URL to scrape (repeatable); defaults to the built-in Agile sources
    #[arg(long = "url")]
    pub urls: Vec<String>,
}

impl From<ScrapeArgs> for ScrapeConfig {
    fn from(a: ScrapeArgs) -> Self {
        let urls = if a.urls.is_empty() {
            DEFAULT_SOURCES.iter().map(|u| u.to_string()).collect()
        } else {
            a.urls
        };
        ScrapeConfig {
            output:       a.output,
            timeout_secs: a.timeout_secs,
            urls,
        }
    }
}

/// Normalizer choice as seen on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VariantArg {
    /// Regex rules, then one tokenised sentence per line
    Sentences,
    /// Strip [n] citations and collapse whitespace
    Citations,
}

impl From<VariantArg> for NormalizerVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Sentences => NormalizerVariant::Sentences,
            VariantArg::Citations => NormalizerVariant::Citations,
        }
    }
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Structured buffer produced by `scrape`
    #[arg(long, default_value = "agile_scraped_data.txt")]
    pub input: String,

    /// Where to write the cleaned buffer
    #[arg(long, default_value = "cleaned_agile_text.txt")]
    pub output: String,

    /// Which set of cleaning rules to apply
    #[arg(long, value_enum, default_value_t = VariantArg::Sentences)]
    pub variant: VariantArg,

    /// Citations variant only: fold whitespace within lines and keep paragraph breaks
    #[arg(long)]
    pub preserve_paragraphs: bool,
}

impl From<CleanArgs> for CleanConfig {
    fn from(a: CleanArgs) -> Self {
        CleanConfig {
            input:               a.input,
            output:              a.output,
            variant:             a.variant.into(),
            preserve_paragraphs: a.preserve_paragraphs,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Cleaned buffer produced by `clean`
    #[arg(long, default_value = "cleaned_agile_text.txt")]
    pub input: String,

    /// Where to write the Q&A dataset
    #[arg(long, default_value = "agile_qa_dataset.txt")]
    pub output: String,

    /// Hugging Face repo id (or local directory) with config and weights
    #[arg(long, default_value = "valhalla/t5-base-qg-hl")]
    pub model_repo: String,

    /// Hugging Face repo id (or local directory) with tokenizer.json
    #[arg(long, default_value = "google-t5/t5-base")]
    pub tokenizer_repo: String,

    /// Hub revision for both repos
    #[arg(long, default_value = "main")]
    pub revision: String,

    /// Maximum characters per chunk (at least 1)
    #[arg(long, default_value = "512")]
    pub chunk_width: NonZeroUsize,

    /// Only the first N chunks are sent to the model
    #[arg(long, default_value_t = 20)]
    pub max_chunks: usize,

    /// Prompt token budget; longer prompts are truncated
    #[arg(long, default_value_t = 512)]
    pub max_input_tokens: usize,

    /// Maximum question length in tokens
    #[arg(long, default_value_t = 50)]
    pub max_output_tokens: usize,

    /// Run on the CPU even when a GPU is available
    #[arg(long)]
    pub cpu: bool,

    /// Abort if one chunk takes longer than this many seconds
    #[arg(long)]
    pub chunk_timeout_secs: Option<u64>,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            input:              a.input,
            output:             a.output,
            model_repo:         a.model_repo,
            tokenizer_repo:     a.tokenizer_repo,
            revision:           a.revision,
            chunk_width:        a.chunk_width.get(),
            max_chunks:         a.max_chunks,
            max_input_tokens:   a.max_input_tokens,
            max_output_tokens:  a.max_output_tokens,
            force_cpu:          a.cpu,
            chunk_timeout_secs: a.chunk_timeout_secs,
        }
    }
}
