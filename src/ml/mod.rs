// ============================================================
// Layer 5 — ML / Model Layer (candle)
// ============================================================
// All candle and tokenizer specific code lives here. The rest
// of the crate only sees the QuestionModel trait.
//
//   model.rs     — T5QuestionModel: loads a pretrained T5
//                  question-generation checkpoint and runs
//                  greedy encoder/decoder generation
//
//   generator.rs — The chunk loop: builds the instruction
//                  prompt for each chunk, asks the model for a
//                  question, and pairs it with the chunk
//
// Generation is strictly sequential: one chunk at a time, each
// call using whatever compute the device offers.

/// Pretrained T5 question model (candle)
pub mod model;

/// Chunk → prompt → question loop
pub mod generator;
