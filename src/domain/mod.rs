// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs and traits that describe what flows between
// the three pipelines:
//
//   ScrapedPage  — headings and paragraphs pulled from one URL
//   QaPair       — a generated question and its source chunk
//   traits       — the seams each pipeline is built around
//                  (fetching, normalising, generating)
//
// Rules for this layer:
//   - NO network, file, or model code
//   - Only plain Rust structs, enums, and traits

// One fetched page flattened into heading/paragraph blocks
pub mod document;

// A question paired with the chunk it was generated from
pub mod qa_pair;

// Core abstractions (traits) that other layers implement
pub mod traits;
