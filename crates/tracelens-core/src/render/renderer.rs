use serde::Deserialize;
use thiserror::Error;

use super::request::RenderRequest;
use super::types::RenderedImage;

/// The external service that turns a request into an encoded image.
///
/// Calls block and are run off the UI thread by the render worker.
pub trait Renderer: Send + Sync + 'static {
    fn render(&self, request: &RenderRequest) -> Result<RenderedImage, RendererError>;
}

impl<F> Renderer for F
where
    F: Fn(&RenderRequest) -> Result<RenderedImage, RendererError> + Send + Sync + 'static,
{
    fn render(&self, request: &RenderRequest) -> Result<RenderedImage, RendererError> {
        self(request)
    }
}

/// Human-readable failure reported by the renderer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RendererError {
    /// Error class when the renderer reported one (e.g. `IoError`).
    pub kind: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
struct WireError {
    name: String,
    message: String,
}

impl RendererError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }

    /// Parse a rejection payload. The backend sends `{"name", "message"}`
    /// JSON objects; anything else is kept verbatim as the message.
    pub fn from_wire(raw: &str) -> Self {
        match serde_json::from_str::<WireError>(raw) {
            Ok(wire) => Self {
                kind: Some(wire.name),
                message: wire.message,
            },
            Err(_) => Self::new(raw),
        }
    }
}
