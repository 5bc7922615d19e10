use thiserror::Error;

/// Top-level error type for the ocrforge pipeline.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("vision request failed: {0}")]
    Transport(String),

    #[error("vision endpoint returned {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed vision response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
