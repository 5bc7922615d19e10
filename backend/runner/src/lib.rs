//! Batch OCR runner.
//!
//! Runs one model over the sampled images strictly in order and persists
//! each extraction as a plain-text file under the model's output directory.

pub mod batch;

pub use batch::{run_model, EXTRACTION_PROMPT};
