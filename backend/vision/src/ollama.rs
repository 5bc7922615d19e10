use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ocrforge_core::{OcrError, OcrRequest, VisionProvider};

/// Per-request timeout. Local vision models can take minutes on one page.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// Ollama local vision model provider.
pub struct OllamaVision {
    client: Client,
    base_url: String,
}

impl OllamaVision {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "http://localhost:11434".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for OllamaVision {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    images: Vec<String>,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaGenerateRequest {
    fn from_ocr(request: &OcrRequest) -> Self {
        Self {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            stream: false,
            images: vec![STANDARD.encode(&request.image)],
        }
    }
}

#[async_trait]
impl VisionProvider for OllamaVision {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn extract_text(&self, request: &OcrRequest) -> Result<String, OcrError> {
        let body = OllamaGenerateRequest::from_ocr(request);

        debug!(
            model = %request.model,
            image_bytes = request.image.len(),
            "Sending generate request to Ollama"
        );

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| OcrError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| OcrError::MalformedResponse(e.to_string()))?;

        Ok(payload.response.trim().to_string())
    }
}
