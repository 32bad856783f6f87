//! Viewer error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Image failed to load: {0}")]
    ImageLoad(String),

    #[error("Browser API error: {0}")]
    Js(String),
}

impl From<serde_json::Error> for ViewerError {
    fn from(e: serde_json::Error) -> Self {
        ViewerError::Decode(e.to_string())
    }
}
