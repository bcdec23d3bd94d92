// ============================================================
// Layer 5 — T5 Question Model
// ============================================================
// Wraps candle's T5ForConditionalGeneration behind the
// QuestionModel trait.
//
// Generation for one prompt:
//   1. Tokenise the prompt; if it is longer than
//      max_input_tokens, cut it and keep the closing </s>
//   2. Run the encoder once
//   3. Greedy decode: start from the decoder start token and
//      repeatedly append the arg-max token, feeding only the
//      newest token when the KV cache is enabled
//   4. Stop at </s> or once the output (start token included)
//      reaches max_output_tokens
//   5. Decode ids to text with special tokens skipped
//
// An optional deadline is checked between decoding steps.

use anyhow::{anyhow, bail, Context, Result};
use candle_core::{DType, Device, Tensor, D};
use candle_nn::VarBuilder;
use candle_transformers::models::t5;
use std::{
    fs,
    time::{Duration, Instant},
};
use tokenizers::Tokenizer;

use crate::domain::traits::QuestionModel;
use crate::infra::model_store::{ModelFiles, WeightsFile};

/// Limits applied to every generate call.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Prompt token budget, including the closing </s>
    pub max_input_tokens:  usize,
    /// Output length cap, including the decoder start token
    pub max_output_tokens: usize,
    /// Wall-clock limit for one prompt, if any
    pub timeout:           Option<Duration>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_input_tokens:  512,
            max_output_tokens: 50,
            timeout:           None,
        }
    }
}

pub struct T5QuestionModel {
    model:     t5::T5ForConditionalGeneration,
    config:    t5::Config,
    tokenizer: Tokenizer,
    device:    Device,
    params:    GenerationParams,
}

impl T5QuestionModel {
    /// Load config, weights and tokenizer. Any failure is fatal.
    pub fn load(files: &ModelFiles, params: GenerationParams, force_cpu: bool) -> Result<Self> {
        let device = if force_cpu {
            Device::Cpu
        } else {
            Device::cuda_if_available(0)?
        };
        tracing::info!("Using device: {:?}", device);

        let config_json = fs::read_to_string(&files.config)
            .with_context(|| format!("Cannot read '{}'", files.config.display()))?;
        let config: t5::Config = serde_json::from_str(&config_json)
            .with_context(|| format!("Invalid T5 config '{}'", files.config.display()))?;

        let vb = match &files.weights {
            WeightsFile::SafeTensors(path) => {
                let bytes = fs::read(path)
                    .with_context(|| format!("Cannot read '{}'", path.display()))?;
                VarBuilder::from_buffered_safetensors(bytes, DType::F32, &device)?
            }
            WeightsFile::Pytorch(path) => VarBuilder::from_pth(path, DType::F32, &device)
                .with_context(|| format!("Cannot read '{}'", path.display()))?,
        };
        let model = t5::T5ForConditionalGeneration::load(vb, &config)
            .context("Cannot build T5 model from weights")?;

        let tokenizer = Tokenizer::from_file(&files.tokenizer).map_err(|e| {
            anyhow!("Cannot load tokenizer from '{}': {}", files.tokenizer.display(), e)
        })?;

        tracing::info!(
            "T5 model loaded: d_model={}, {} layers",
            config.d_model,
            config.num_layers
        );
        Ok(Self { model, config, tokenizer, device, params })
    }

    /// Prompt → token ids, truncated to the input budget.
    fn encode_prompt(&self, prompt: &str) -> Result<Vec<u32>> {
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| anyhow!("Prompt tokenise: {e}"))?;
        let mut ids = encoding.get_ids().to_vec();

        let max = self.params.max_input_tokens.max(1);
        if ids.len() > max {
            tracing::debug!("Truncating prompt from {} to {} tokens", ids.len(), max);
            ids.truncate(max - 1);
            ids.push(self.config.eos_token_id as u32);
        }
        Ok(ids)
    }

    fn check_deadline(&self, started: Instant) -> Result<()> {
        if let Some(limit) = self.params.timeout {
            if started.elapsed() > limit {
                bail!("Question generation exceeded the {}s deadline", limit.as_secs_f32());
            }
        }
        Ok(())
    }
}

impl QuestionModel for T5QuestionModel {
    fn generate(&mut self, prompt: &str) -> Result<String> {
        let started = Instant::now();

        let input_ids = self.encode_prompt(prompt)?;
        let input     = Tensor::new(input_ids.as_slice(), &self.device)?.unsqueeze(0)?;

        self.model.clear_kv_cache();
        let encoder_output = self.model.encode(&input)?;

        let start_token = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;
        let mut output_ids = vec![start_token];

        while output_ids.len() < self.params.max_output_tokens {
            self.check_deadline(started)?;

            // With the cache on, only the newest token has to be fed
            let decoder_input = if output_ids.len() == 1 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits  = self.model.decode(&decoder_input, &encoder_output)?.squeeze(0)?;
            let next_id = logits.argmax(D::Minus1)?.to_scalar::<u32>()?;
            output_ids.push(next_id);

            if next_id as usize == self.config.eos_token_id {
                break;
            }
        }
        self.model.clear_kv_cache();

        let question = self
            .tokenizer
            .decode(&output_ids, true)
            .map_err(|e| anyhow!("Decode: {e}"))?;

        tracing::debug!(
            "Generated {} tokens in {:.2?}: '{}'",
            output_ids.len(),
            started.elapsed(),
            question
        );
        Ok(question.trim().to_string())
    }
}
