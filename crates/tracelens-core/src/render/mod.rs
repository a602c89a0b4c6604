//! Boundary with the external renderer: what is asked for, what comes back,
//! and how the returned bytes become a displayable bitmap.

pub mod decode;
pub mod renderer;
pub mod request;
pub mod scaling;
pub mod types;

pub use decode::{decode_rendered, DecodedImage};
pub use renderer::{Renderer, RendererError};
pub use request::{RenderKey, RenderRequest};
pub use scaling::{AmplitudeScaling, ScalingKind};
pub use types::{ColormapType, ImageFormat, RenderMode, RenderedImage, WiggleConfig, WigglePatch};
