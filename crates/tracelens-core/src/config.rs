use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FIRST_RENDER_DEBOUNCE, MAX_ZOOM, MIN_ZOOM, NOTIFICATION_LIFETIME, RENDER_DEBOUNCE,
    RESIZE_AREA_FRACTION, RESIZE_DIMENSION_FRACTION, RESIZE_MIN_AREA_DELTA,
    RESIZE_MIN_DIMENSION_DELTA, RESIZE_SETTLE_DELAY, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use crate::error::{Result, TraceLensError};

/// Timing and threshold knobs for the viewer. Every section may be omitted
/// from a TOML file and falls back to its defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub resize: ResizeConfig,
    pub render: RenderTiming,
    pub zoom: ZoomConfig,
    pub notifications: NotificationConfig,
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.zoom.validate()?;
        Ok(config)
    }
}

/// When a container resize counts as significant, and how long it must
/// settle before being committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub area_fraction: f64,
    pub dimension_fraction: f64,
    pub min_area_delta: u64,
    pub min_dimension_delta: u32,
    pub settle_ms: u64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            area_fraction: RESIZE_AREA_FRACTION,
            dimension_fraction: RESIZE_DIMENSION_FRACTION,
            min_area_delta: RESIZE_MIN_AREA_DELTA,
            min_dimension_delta: RESIZE_MIN_DIMENSION_DELTA,
            settle_ms: RESIZE_SETTLE_DELAY.as_millis() as u64,
        }
    }
}

impl ResizeConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderTiming {
    /// Debounce before the first render of a freshly measured view.
    pub first_debounce_ms: u64,
    pub debounce_ms: u64,
}

impl Default for RenderTiming {
    fn default() -> Self {
        Self {
            first_debounce_ms: FIRST_RENDER_DEBOUNCE.as_millis() as u64,
            debounce_ms: RENDER_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl RenderTiming {
    pub fn first_debounce(&self) -> Duration {
        Duration::from_millis(self.first_debounce_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

impl ZoomConfig {
    /// Bounds must be finite, positive and ordered; step factors finite and positive.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TraceLensError::ConfigValue(format!(
                    "zoom.{name} must be a finite positive number, got {value}"
                )))
            }
        };
        positive("min_zoom", self.min_zoom)?;
        positive("max_zoom", self.max_zoom)?;
        positive("zoom_in_factor", self.zoom_in_factor)?;
        positive("zoom_out_factor", self.zoom_out_factor)?;
        if self.min_zoom > self.max_zoom {
            return Err(TraceLensError::ConfigValue(format!(
                "zoom.min_zoom ({}) is above zoom.max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub lifetime_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: NOTIFICATION_LIFETIME.as_millis() as u64,
        }
    }
}

impl NotificationConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}
