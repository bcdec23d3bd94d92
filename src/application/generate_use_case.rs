// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
//   Step 1: Resolve and load the T5 model   (Layer 6 / 5)
//   Step 2: Read the cleaned buffer         (Layer 6 - infra)
//   Step 3: Wrap it into chunks             (Layer 4 - data)
//   Step 4: Generate one question per chunk (Layer 5 - ml)
//   Step 5: Write the Q&A dataset           (Layer 6 - infra)
//
// The model is loaded once and borrowed mutably by the chunk
// loop; it is dropped when the use case returns.

use anyhow::{ensure, Result};
use std::time::Duration;

use crate::data::chunker::Chunker;
use crate::domain::traits::QuestionModel;
use crate::infra::{
    dataset_writer::DatasetWriter,
    model_store::ModelStore,
    text_store::read_text,
};
use crate::ml::{
    generator::generate_pairs,
    model::{GenerationParams, T5QuestionModel},
};

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input:              String,
    pub output:             String,
    pub model_repo:         String,
    pub tokenizer_repo:     String,
    pub revision:           String,
    pub chunk_width:        usize,
    pub max_chunks:         usize,
    pub max_input_tokens:   usize,
    pub max_output_tokens:  usize,
    pub force_cpu:          bool,
    pub chunk_timeout_secs: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input:              "cleaned_agile_text.txt".to_string(),
            output:             "agile_qa_dataset.txt".to_string(),
            model_repo:         "valhalla/t5-base-qg-hl".to_string(),
            tokenizer_repo:     "google-t5/t5-base".to_string(),
            revision:           "main".to_string(),
            chunk_width:        512,
            max_chunks:         20,
            max_input_tokens:   512,
            max_output_tokens:  50,
            force_cpu:          false,
            chunk_timeout_secs: None,
        }
    }
}

impl GenerateConfig {
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_input_tokens:  self.max_input_tokens,
            max_output_tokens: self.max_output_tokens,
            timeout:           self.chunk_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub struct GenerateUseCase {
    config: GenerateConfig,
}

impl GenerateUseCase {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Load the pretrained model and run the pipeline.
    /// Returns the number of pairs written.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        let files = ModelStore::new(&cfg.revision).resolve(&cfg.model_repo, &cfg.tokenizer_repo)?;
        let mut model = T5QuestionModel::load(&files, cfg.generation_params(), cfg.force_cpu)?;

        self.execute_with(&mut model)
    }

    /// Run the pipeline with an already loaded model.
    pub fn execute_with<M: QuestionModel + ?Sized>(&self, model: &mut M) -> Result<usize> {
        let chunks = self.load_chunks()?;
        let pairs  = generate_pairs(model, &chunks, self.config.max_chunks)?;
        DatasetWriter::new(&self.config.output).write(&pairs)?;
        Ok(pairs.len())
    }

    fn load_chunks(&self) -> Result<Vec<String>> {
        ensure!(self.config.chunk_width > 0, "chunk width must be at least 1");

        let text   = read_text(&self.config.input)?;
        let chunks = Chunker::new(self.config.chunk_width).chunk(&text);
        tracing::info!(
            "Split '{}' into {} chunks of at most {} chars",
            self.config.input,
            chunks.len(),
            self.config.chunk_width
        );
        Ok(chunks)
    }
}
