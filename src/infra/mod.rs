// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the plumbing the pipelines share:
//
//   model_store.rs    — Resolves T5 config, weights and
//                       tokenizer files, either from a local
//                       directory or from the Hugging Face hub
//                       (downloaded once, then cached by hf-hub).
//
//   text_store.rs     — Whole-file UTF-8 reads and writes for
//                       the pipeline hand-off files.
//
//   dataset_writer.rs — Serialises Q&A pairs into the dataset
//                       text format.
//
// Keeping these here means the data and ml layers never touch
// the filesystem or the network hub directly.

/// Model file resolution (local dir or Hugging Face hub)
pub mod model_store;

/// Pipeline hand-off file reads and writes
pub mod text_store;

/// Q&A dataset serialisation
pub mod dataset_writer;
