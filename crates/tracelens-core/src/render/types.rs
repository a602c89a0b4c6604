//! Render configuration and result types exchanged with the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendering style for the trace window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Amplitude mapped to color through a colormap.
    #[default]
    VariableDensity,
    /// Each trace drawn as a deflected line with optional fill.
    Wiggle,
    /// Wiggle traces over a variable density background.
    WiggleVariableDensity,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [
        RenderMode::VariableDensity,
        RenderMode::Wiggle,
        RenderMode::WiggleVariableDensity,
    ];

    /// Whether the renderer needs a wiggle style for this mode.
    pub fn uses_wiggle(self) -> bool {
        !matches!(self, RenderMode::VariableDensity)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::VariableDensity => write!(f, "Variable Density"),
            RenderMode::Wiggle => write!(f, "Wiggle"),
            RenderMode::WiggleVariableDensity => write!(f, "Wiggle + VD"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColormapType {
    /// Red (negative) through white to blue (positive).
    #[default]
    Seismic,
    Grayscale,
    GrayscaleInverted,
    Viridis,
}

impl ColormapType {
    pub const ALL: [ColormapType; 4] = [
        ColormapType::Seismic,
        ColormapType::Grayscale,
        ColormapType::GrayscaleInverted,
        ColormapType::Viridis,
    ];
}

impl fmt::Display for ColormapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColormapType::Seismic => write!(f, "Seismic"),
            ColormapType::Grayscale => write!(f, "Grayscale"),
            ColormapType::GrayscaleInverted => write!(f, "Grayscale (inverted)"),
            ColormapType::Viridis => write!(f, "Viridis"),
        }
    }
}

/// RGB triple; every component is already within [0, 255].
pub type Rgb = [u8; 3];

/// Line and fill style for wiggle rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiggleConfig {
    pub line_width: f32,
    pub line_color: Rgb,
    pub fill_positive: bool,
    pub fill_negative: bool,
    pub positive_fill_color: Rgb,
    pub negative_fill_color: Rgb,
}

impl Default for WiggleConfig {
    fn default() -> Self {
        Self::for_mode(RenderMode::Wiggle)
    }
}

impl WiggleConfig {
    /// Style tuned for the given render mode: plain wiggles fill positive
    /// lobes, wiggles drawn over variable density stay unfilled.
    pub fn for_mode(mode: RenderMode) -> Self {
        Self {
            line_width: 1.0,
            line_color: [0, 0, 0],
            fill_positive: mode == RenderMode::Wiggle,
            fill_negative: false,
            positive_fill_color: [0, 0, 0],
            negative_fill_color: [255, 0, 0],
        }
    }

    /// Apply the fields present in `patch`. Line width is kept non-negative.
    pub fn merged(&self, patch: &WigglePatch) -> Self {
        let line_width = patch.line_width.map_or(self.line_width, |w| {
            if w.is_finite() {
                w.max(0.0)
            } else {
                self.line_width
            }
        });
        Self {
            line_width,
            line_color: patch.line_color.unwrap_or(self.line_color),
            fill_positive: patch.fill_positive.unwrap_or(self.fill_positive),
            fill_negative: patch.fill_negative.unwrap_or(self.fill_negative),
            positive_fill_color: patch
                .positive_fill_color
                .unwrap_or(self.positive_fill_color),
            negative_fill_color: patch
                .negative_fill_color
                .unwrap_or(self.negative_fill_color),
        }
    }
}

/// Partial wiggle style update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WigglePatch {
    pub line_width: Option<f32>,
    pub line_color: Option<Rgb>,
    pub fill_positive: Option<bool>,
    pub fill_negative: Option<bool>,
    pub positive_fill_color: Option<Rgb>,
    pub negative_fill_color: Option<Rgb>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFormat {
    #[default]
    Png,
}

/// Encoded image returned by the renderer. Opaque apart from its dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub format: ImageFormat,
}
