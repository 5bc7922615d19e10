//! Markdown comparison report.
//!
//! Reads the per-model OCR output files back off disk and assembles one
//! human-readable document. No scoring happens here; evaluation is manual.

pub mod comparison;

pub use comparison::generate_report;
