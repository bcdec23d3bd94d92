// ============================================================
// Layer 6 — Model Store
// ============================================================
// Finds the three files a T5 question model needs:
//
//   config.json       — architecture (d_model, layers, token ids)
//   weights           — model.safetensors, or pytorch_model.bin
//                       when the repo only ships PyTorch weights
//   tokenizer.json    — Hugging Face tokenizer definition
//
// A repo argument that names an existing local directory is
// read straight from disk. Anything else is treated as a hub
// repo id and fetched with hf-hub's blocking API, which caches
// downloads under ~/.cache/huggingface.
//
// The tokenizer can come from a different repo than the
// weights: question-generation fine-tunes often ship only a
// SentencePiece model, so the base model's tokenizer.json is
// used instead.

use anyhow::{bail, Context, Result};
use hf_hub::{
    api::sync::{Api, ApiRepo},
    Repo, RepoType,
};
use std::path::{Path, PathBuf};

const CONFIG_FILE:      &str = "config.json";
const SAFETENSORS_FILE: &str = "model.safetensors";
const PYTORCH_FILE:     &str = "pytorch_model.bin";
const TOKENIZER_FILE:   &str = "tokenizer.json";

/// Which weight format was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightsFile {
    SafeTensors(PathBuf),
    Pytorch(PathBuf),
}

/// Local paths of everything needed to load the model.
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config:    PathBuf,
    pub weights:   WeightsFile,
    pub tokenizer: PathBuf,
}

pub struct ModelStore {
    revision: String,
    api:      Option<Api>,
}

impl ModelStore {
    pub fn new(revision: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
            api:      None,
        }
    }

    /// Resolve config and weights from `model_repo` and the
    /// tokenizer from `tokenizer_repo`.
    pub fn resolve(&mut self, model_repo: &str, tokenizer_repo: &str) -> Result<ModelFiles> {
        let (config, weights) = if is_local_dir(model_repo) {
            tracing::info!("Loading model files from local directory '{}'", model_repo);
            let dir = Path::new(model_repo);
            (local_file(dir, CONFIG_FILE)?, local_weights(dir)?)
        } else {
            tracing::info!("Fetching model '{}' (revision {})", model_repo, self.revision);
            let repo = self.hub_repo(model_repo)?;
            let config = repo
                .get(CONFIG_FILE)
                .with_context(|| format!("Cannot fetch {CONFIG_FILE} from '{model_repo}'"))?;
            (config, hub_weights(&repo, model_repo)?)
        };

        let tokenizer = if is_local_dir(tokenizer_repo) {
            local_file(Path::new(tokenizer_repo), TOKENIZER_FILE)?
        } else {
            tracing::info!("Fetching tokenizer from '{}'", tokenizer_repo);
            self.hub_repo(tokenizer_repo)?
                .get(TOKENIZER_FILE)
                .with_context(|| format!("Cannot fetch {TOKENIZER_FILE} from '{tokenizer_repo}'"))?
        };

        tracing::debug!("Resolved model files: {:?}", weights);
        Ok(ModelFiles { config, weights, tokenizer })
    }

    /// Lazily create the hub client so local-only runs never touch it.
    fn hub_repo(&mut self, repo_id: &str) -> Result<ApiRepo> {
        if self.api.is_none() {
            self.api = Some(Api::new().context("Cannot initialise Hugging Face hub client")?);
        }
        let api = self.api.as_ref().context("hub client missing")?;
        Ok(api.repo(Repo::with_revision(
            repo_id.to_string(),
            RepoType::Model,
            self.revision.clone(),
        )))
    }
}

fn is_local_dir(repo: &str) -> bool {
    Path::new(repo).is_dir()
}

fn local_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if !path.is_file() {
        bail!("'{}' does not exist", path.display());
    }
    Ok(path)
}

fn local_weights(dir: &Path) -> Result<WeightsFile> {
    let safetensors = dir.join(SAFETENSORS_FILE);
    if safetensors.is_file() {
        return Ok(WeightsFile::SafeTensors(safetensors));
    }
    let pytorch = dir.join(PYTORCH_FILE);
    if pytorch.is_file() {
        return Ok(WeightsFile::Pytorch(pytorch));
    }
    bail!(
        "No {SAFETENSORS_FILE} or {PYTORCH_FILE} in '{}'",
        dir.display()
    )
}

fn hub_weights(repo: &ApiRepo, repo_id: &str) -> Result<WeightsFile> {
    match repo.get(SAFETENSORS_FILE) {
        Ok(path) => Ok(WeightsFile::SafeTensors(path)),
        Err(e) => {
            tracing::debug!("{SAFETENSORS_FILE} unavailable ({e}), trying {PYTORCH_FILE}");
            let path = repo
                .get(PYTORCH_FILE)
                .with_context(|| format!("Cannot fetch weights from '{repo_id}'"))?;
            Ok(WeightsFile::Pytorch(path))
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_local_dir_prefers_safetensors() {
        let dir = tempfile::tempdir().unwrap();
        for name in [CONFIG_FILE, SAFETENSORS_FILE, PYTORCH_FILE, TOKENIZER_FILE] {
            fs::write(dir.path().join(name), b"{}").unwrap();
        }
        let repo = dir.path().to_str().unwrap();

        let files = ModelStore::new("main").resolve(repo, repo).unwrap();
        assert_eq!(files.config, dir.path().join(CONFIG_FILE));
        assert_eq!(files.tokenizer, dir.path().join(TOKENIZER_FILE));
        assert_eq!(files.weights, WeightsFile::SafeTensors(dir.path().join(SAFETENSORS_FILE)));
    }

    #[test]
    fn test_local_dir_falls_back_to_pytorch() {
        let dir = tempfile::tempdir().unwrap();
        for name in [CONFIG_FILE, PYTORCH_FILE, TOKENIZER_FILE] {
            fs::write(dir.path().join(name), b"{}").unwrap();
        }
        let repo = dir.path().to_str().unwrap();

        let files = ModelStore::new("main").resolve(repo, repo).unwrap();
        assert_eq!(files.weights, WeightsFile::Pytorch(dir.path().join(PYTORCH_FILE)));
    }

    #[test]
    fn test_missing_weights_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), b"{}").unwrap();
        let repo = dir.path().to_str().unwrap();

        assert!(ModelStore::new("main").resolve(repo, repo).is_err());
    }
}
