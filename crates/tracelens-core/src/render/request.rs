use serde::{Deserialize, Serialize};

use super::scaling::AmplitudeScaling;
use super::types::{ColormapType, RenderMode, WiggleConfig};
use crate::store::ViewportStore;
use crate::viewport::Viewport;

/// The render-relevant part of the store. Two equal keys produce the same image.
///
/// The wiggle style only takes part while the mode draws wiggles, so editing
/// it in variable density mode never triggers a render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderKey {
    pub file_path: String,
    pub viewport: Viewport,
    pub render_mode: RenderMode,
    pub colormap: ColormapType,
    pub scaling: AmplitudeScaling,
    pub wiggle: Option<WiggleConfig>,
}

impl RenderKey {
    /// Snapshot the store, or `None` while nothing is renderable yet
    /// (no dataset open, or the container has not been measured).
    pub fn capture(store: &ViewportStore) -> Option<Self> {
        let source = store.source()?;
        let viewport = store.viewport();
        if viewport.is_placeholder_size() {
            return None;
        }
        let render_mode = store.render_mode();
        Some(Self {
            file_path: source.file_path.clone(),
            viewport,
            render_mode,
            colormap: store.colormap(),
            scaling: store.amplitude_scaling().clone(),
            wiggle: render_mode
                .uses_wiggle()
                .then(|| store.wiggle_config().clone()),
        })
    }
}

/// One render call. `seq` is assigned at dispatch and never leaves the
/// process; the rest matches the renderer's argument object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(skip)]
    pub seq: u64,
    pub file_path: String,
    pub viewport: Viewport,
    pub colormap_type: ColormapType,
    pub scaling: AmplitudeScaling,
    pub render_mode: RenderMode,
    pub wiggle_config: Option<WiggleConfig>,
}

impl RenderRequest {
    pub fn new(seq: u64, key: RenderKey) -> Self {
        Self {
            seq,
            file_path: key.file_path,
            viewport: key.viewport,
            colormap_type: key.colormap,
            scaling: key.scaling,
            render_mode: key.render_mode,
            wiggle_config: key.wiggle,
        }
    }
}
