//! Single owner of the viewport, render configuration and the last
//! accepted image.
//!
//! Setters are synchronous and only update state. Each setter that actually
//! changes a value bumps the revision and broadcasts a [`StoreEvent`] to every
//! live subscription; setting an equal value is a no-op.

use std::sync::mpsc;
use std::sync::Arc;

use tracing::debug;

use crate::render::{
    AmplitudeScaling, ColormapType, DecodedImage, RenderMode, WiggleConfig, WigglePatch,
};
use crate::viewport::{Viewport, ViewportPatch};

/// The dataset being viewed, supplied by the file-loading collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSource {
    pub file_path: String,
    /// Total traces in the file, when the metadata loader reported it.
    pub total_traces: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    SourceChanged,
    ViewportChanged(Viewport),
    RenderModeChanged(RenderMode),
    ColormapChanged(ColormapType),
    ScalingChanged(AmplitudeScaling),
    WiggleChanged,
    ImageChanged,
    RenderingChanged(bool),
}

impl StoreEvent {
    /// Whether this change can alter what the renderer would produce.
    pub fn is_render_relevant(&self) -> bool {
        matches!(
            self,
            StoreEvent::SourceChanged
                | StoreEvent::ViewportChanged(_)
                | StoreEvent::RenderModeChanged(_)
                | StoreEvent::ColormapChanged(_)
                | StoreEvent::ScalingChanged(_)
                | StoreEvent::WiggleChanged
        )
    }
}

/// Receiving end of a store subscription.
pub struct StoreSubscription {
    rx: mpsc::Receiver<StoreEvent>,
}

impl StoreSubscription {
    /// Take every event delivered since the last drain.
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.rx.try_iter().collect()
    }
}

pub struct ViewportStore {
    source: Option<DataSource>,
    viewport: Viewport,
    render_mode: RenderMode,
    colormap: ColormapType,
    scaling: AmplitudeScaling,
    wiggle: WiggleConfig,
    current_image: Option<Arc<DecodedImage>>,
    is_rendering: bool,
    revision: u64,
    image_revision: u64,
    subscribers: Vec<mpsc::Sender<StoreEvent>>,
}

impl Default for ViewportStore {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewportStore {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            source: None,
            viewport,
            render_mode: RenderMode::default(),
            colormap: ColormapType::default(),
            scaling: AmplitudeScaling::default(),
            wiggle: WiggleConfig::default(),
            current_image: None,
            is_rendering: false,
            revision: 0,
            image_revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> StoreSubscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        StoreSubscription { rx }
    }

    pub fn source(&self) -> Option<&DataSource> {
        self.source.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn colormap(&self) -> ColormapType {
        self.colormap
    }

    pub fn amplitude_scaling(&self) -> &AmplitudeScaling {
        &self.scaling
    }

    pub fn wiggle_config(&self) -> &WiggleConfig {
        &self.wiggle
    }

    pub fn current_image(&self) -> Option<&Arc<DecodedImage>> {
        self.current_image.as_ref()
    }

    pub fn is_rendering(&self) -> bool {
        self.is_rendering
    }

    /// Bumped on every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumped only when the current image is replaced or cleared.
    pub fn image_revision(&self) -> u64 {
        self.image_revision
    }

    /// Replace the dataset. The trace window is re-clamped to its extent.
    pub fn set_source(&mut self, source: Option<DataSource>) {
        if self.source == source {
            return;
        }
        self.source = source;
        self.emit(StoreEvent::SourceChanged);
        let clamped = self.clamp_to_source(self.viewport);
        self.commit_viewport(clamped);
    }

    /// Merge and clamp a partial viewport update.
    pub fn update_viewport(&mut self, patch: ViewportPatch) {
        let merged = self.clamp_to_source(self.viewport.merged(&patch));
        self.commit_viewport(merged);
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if self.render_mode != mode {
            self.render_mode = mode;
            self.emit(StoreEvent::RenderModeChanged(mode));
        }
    }

    pub fn set_colormap(&mut self, colormap: ColormapType) {
        if self.colormap != colormap {
            self.colormap = colormap;
            self.emit(StoreEvent::ColormapChanged(colormap));
        }
    }

    /// Replace the scaling wholesale; fields are clamped into range first.
    pub fn set_amplitude_scaling(&mut self, scaling: AmplitudeScaling) {
        let scaling = scaling.normalized();
        if self.scaling != scaling {
            self.scaling = scaling.clone();
            self.emit(StoreEvent::ScalingChanged(scaling));
        }
    }

    pub fn set_wiggle_config(&mut self, patch: &WigglePatch) {
        let merged = self.wiggle.merged(patch);
        if self.wiggle != merged {
            self.wiggle = merged;
            self.emit(StoreEvent::WiggleChanged);
        }
    }

    /// Replace the whole wiggle style, e.g. with [`WiggleConfig::for_mode`].
    pub fn reset_wiggle_config(&mut self, config: WiggleConfig) {
        if self.wiggle != config {
            self.wiggle = config;
            self.emit(StoreEvent::WiggleChanged);
        }
    }

    pub fn set_current_image(&mut self, image: Option<Arc<DecodedImage>>) {
        if self.current_image.is_none() && image.is_none() {
            return;
        }
        self.current_image = image;
        self.image_revision += 1;
        self.emit(StoreEvent::ImageChanged);
    }

    pub fn set_is_rendering(&mut self, rendering: bool) {
        if self.is_rendering != rendering {
            self.is_rendering = rendering;
            self.emit(StoreEvent::RenderingChanged(rendering));
        }
    }

    fn clamp_to_source(&self, viewport: Viewport) -> Viewport {
        match self.source.as_ref().and_then(|s| s.total_traces) {
            Some(total) => viewport.clamp_to_dataset(total),
            None => viewport,
        }
    }

    fn commit_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        debug!(
            start = viewport.start_trace(),
            count = viewport.trace_count(),
            width = viewport.width(),
            height = viewport.height(),
            "Viewport committed"
        );
        self.viewport = viewport;
        self.emit(StoreEvent::ViewportChanged(viewport));
    }

    fn emit(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
