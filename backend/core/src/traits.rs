use async_trait::async_trait;

use crate::error::OcrError;

/// Trait for vision inference backends able to read text out of an image.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Send one extraction request and return the trimmed response text.
    async fn extract_text(&self, request: &OcrRequest) -> Result<String, OcrError>;
}

/// A single text-extraction request against a vision model.
#[derive(Debug, Clone)]
pub struct OcrRequest {
    pub model: String,
    pub prompt: String,
    /// Raw image bytes; providers handle their own wire encoding.
    pub image: Vec<u8>,
}
