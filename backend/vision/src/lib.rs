//! Vision inference backends.
//!
//! Implements `ocrforge_core::VisionProvider` against local model servers.
//! Only Ollama is wired up today.

pub mod ollama;

pub use ollama::OllamaVision;
