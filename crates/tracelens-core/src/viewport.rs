use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_TRACE_COUNT, MIN_VIEWPORT_DIMENSION, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH,
};

/// Pixel size of a container or canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const PLACEHOLDER: Size = Size::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);

    /// Round a fractional (logical pixel) measurement to whole pixels.
    pub fn from_f32(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0).round() as u32,
            height: height.max(0.0).round() as u32,
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Raise both dimensions to the committed-viewport minimum.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_VIEWPORT_DIMENSION),
            height: self.height.max(MIN_VIEWPORT_DIMENSION),
        }
    }
}

/// The trace window and pixel size currently being visualized.
///
/// Every constructor and update path clamps into bounds, so a `Viewport`
/// value always satisfies `start_trace >= 0`, `trace_count >= 1`,
/// `width >= 100` and `height >= 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ViewportPatch")]
pub struct Viewport {
    start_trace: usize,
    trace_count: usize,
    width: u32,
    height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            start_trace: 0,
            trace_count: DEFAULT_TRACE_COUNT,
            width: PLACEHOLDER_WIDTH,
            height: PLACEHOLDER_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(start_trace: i64, trace_count: i64, width: i64, height: i64) -> Self {
        Self::default().merged(&ViewportPatch {
            start_trace: Some(start_trace),
            trace_count: Some(trace_count),
            width: Some(width),
            height: Some(height),
        })
    }

    pub fn start_trace(&self) -> usize {
        self.start_trace
    }

    pub fn trace_count(&self) -> usize {
        self.trace_count
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True while the size is still the pre-measurement default.
    pub fn is_placeholder_size(&self) -> bool {
        self.size() == Size::PLACEHOLDER
    }

    /// Merge the fields present in `patch`, clamping each into bounds.
    pub fn merged(&self, patch: &ViewportPatch) -> Self {
        Self {
            start_trace: patch
                .start_trace
                .map_or(self.start_trace, |v| clamp_to_usize(v, 0)),
            trace_count: patch
                .trace_count
                .map_or(self.trace_count, |v| clamp_to_usize(v, 1)),
            width: patch.width.map_or(self.width, clamp_dimension),
            height: patch.height.map_or(self.height, clamp_dimension),
        }
    }

    /// Keep the trace window inside a dataset of `total_traces` traces.
    ///
    /// An empty dataset leaves the window untouched.
    pub fn clamp_to_dataset(&self, total_traces: usize) -> Self {
        if total_traces == 0 {
            return *self;
        }
        let start_trace = self.start_trace.min(total_traces - 1);
        let trace_count = self.trace_count.min(total_traces - start_trace).max(1);
        Self {
            start_trace,
            trace_count,
            ..*self
        }
    }
}

fn clamp_to_usize(value: i64, min: usize) -> usize {
    usize::try_from(value).unwrap_or(0).max(min)
}

fn clamp_dimension(value: i64) -> u32 {
    value.clamp(MIN_VIEWPORT_DIMENSION as i64, u32::MAX as i64) as u32
}

/// Partial viewport update. Values are signed so out-of-range input can be
/// clamped rather than rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportPatch {
    pub start_trace: Option<i64>,
    pub trace_count: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl ViewportPatch {
    pub fn size(size: Size) -> Self {
        Self {
            width: Some(size.width as i64),
            height: Some(size.height as i64),
            ..Self::default()
        }
    }

    pub fn trace_window(start_trace: i64, trace_count: i64) -> Self {
        Self {
            start_trace: Some(start_trace),
            trace_count: Some(trace_count),
            ..Self::default()
        }
    }

    pub fn with_start_trace(mut self, start_trace: i64) -> Self {
        self.start_trace = Some(start_trace);
        self
    }
}

impl From<ViewportPatch> for Viewport {
    fn from(patch: ViewportPatch) -> Self {
        Viewport::default().merged(&patch)
    }
}
