use std::time::Duration;

/// Smallest width or height (in pixels) a committed viewport may have.
pub const MIN_VIEWPORT_DIMENSION: u32 = 100;

/// Container size reported before the first real measurement arrives.
pub const PLACEHOLDER_WIDTH: u32 = 100;

/// Container size reported before the first real measurement arrives.
pub const PLACEHOLDER_HEIGHT: u32 = 100;

/// Number of traces shown when a dataset is opened without an explicit window.
pub const DEFAULT_TRACE_COUNT: usize = 500;

/// Fraction of the committed area a resize must change by to be significant.
pub const RESIZE_AREA_FRACTION: f64 = 0.005;

/// Fraction of the smaller committed dimension a single axis must change by.
pub const RESIZE_DIMENSION_FRACTION: f64 = 0.008;

/// Floor for the area threshold, in square pixels.
pub const RESIZE_MIN_AREA_DELTA: u64 = 2000;

/// Floor for the per-axis threshold, in pixels.
pub const RESIZE_MIN_DIMENSION_DELTA: u32 = 6;

/// Quiet period after a significant resize before the size is committed.
pub const RESIZE_SETTLE_DELAY: Duration = Duration::from_millis(400);

/// Debounce before the very first render after the container is measured.
pub const FIRST_RENDER_DEBOUNCE: Duration = Duration::from_millis(250);

/// Debounce for every render after the first.
pub const RENDER_DEBOUNCE: Duration = Duration::from_millis(600);

/// Lower zoom bound for the client-side canvas transform.
pub const MIN_ZOOM: f32 = 0.1;

/// Upper zoom bound for the client-side canvas transform.
pub const MAX_ZOOM: f32 = 10.0;

/// Zoom multiplier applied per wheel notch when scrolling up.
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Zoom multiplier applied per wheel notch when scrolling down.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Default clip percentile for percentile amplitude scaling.
pub const DEFAULT_PERCENTILE: f32 = 0.98;

/// Accepted percentile range for percentile amplitude scaling.
pub const MIN_PERCENTILE: f32 = 0.5;
pub const MAX_PERCENTILE: f32 = 1.0;

/// Default scale factor for manual amplitude scaling.
pub const DEFAULT_MANUAL_SCALE: f32 = 1.0;

/// Default reference amplitude for global amplitude scaling.
pub const DEFAULT_MAX_AMPLITUDE: f32 = 1.0;

/// Smallest accepted reference amplitude for global scaling (must stay > 0).
pub const MIN_MAX_AMPLITUDE: f32 = 1e-6;

/// How long a render failure stays visible in the status bar.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(6);
