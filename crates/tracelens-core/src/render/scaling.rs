//! Amplitude scaling selection and validation.
//!
//! Exactly one strategy is active at a time. Switching strategy replaces the
//! whole value with that strategy's defaults; field edits only touch the
//! active strategy and are clamped to its accepted range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MANUAL_SCALE, DEFAULT_MAX_AMPLITUDE, DEFAULT_PERCENTILE, MAX_PERCENTILE,
    MIN_MAX_AMPLITUDE, MIN_PERCENTILE,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AmplitudeScaling {
    /// All traces divided by one reference amplitude.
    Global {
        #[serde(rename = "maxAmplitude")]
        max_amplitude: f32,
    },
    /// Per-trace AGC, optionally within a sliding window of samples.
    PerTrace {
        #[serde(rename = "windowSize")]
        window_size: Option<usize>,
    },
    /// Clip at a global absolute-amplitude percentile.
    Percentile { percentile: f32 },
    /// Fixed multiplier.
    Manual { scale: f32 },
}

/// Discriminant of [`AmplitudeScaling`], used to pick a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalingKind {
    Global,
    PerTrace,
    Percentile,
    Manual,
}

impl ScalingKind {
    pub const ALL: [ScalingKind; 4] = [
        ScalingKind::Global,
        ScalingKind::PerTrace,
        ScalingKind::Percentile,
        ScalingKind::Manual,
    ];
}

impl fmt::Display for ScalingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingKind::Global => write!(f, "Global"),
            ScalingKind::PerTrace => write!(f, "Per-trace (AGC)"),
            ScalingKind::Percentile => write!(f, "Percentile"),
            ScalingKind::Manual => write!(f, "Manual"),
        }
    }
}

impl Default for AmplitudeScaling {
    fn default() -> Self {
        Self::default_for(ScalingKind::Percentile)
    }
}

impl AmplitudeScaling {
    pub fn default_for(kind: ScalingKind) -> Self {
        match kind {
            ScalingKind::Global => AmplitudeScaling::Global {
                max_amplitude: DEFAULT_MAX_AMPLITUDE,
            },
            ScalingKind::PerTrace => AmplitudeScaling::PerTrace { window_size: None },
            ScalingKind::Percentile => AmplitudeScaling::Percentile {
                percentile: DEFAULT_PERCENTILE,
            },
            ScalingKind::Manual => AmplitudeScaling::Manual {
                scale: DEFAULT_MANUAL_SCALE,
            },
        }
    }

    pub fn kind(&self) -> ScalingKind {
        match self {
            AmplitudeScaling::Global { .. } => ScalingKind::Global,
            AmplitudeScaling::PerTrace { .. } => ScalingKind::PerTrace,
            AmplitudeScaling::Percentile { .. } => ScalingKind::Percentile,
            AmplitudeScaling::Manual { .. } => ScalingKind::Manual,
        }
    }

    /// Switch strategy. Selecting the active strategy keeps its fields;
    /// any other selection starts from that strategy's defaults.
    pub fn with_kind(&self, kind: ScalingKind) -> Self {
        if self.kind() == kind {
            self.clone()
        } else {
            Self::default_for(kind)
        }
    }

    /// Clamp every field of the active strategy into its accepted range.
    pub fn normalized(&self) -> Self {
        match *self {
            AmplitudeScaling::Global { max_amplitude } => AmplitudeScaling::Global {
                max_amplitude: clamp_max_amplitude(max_amplitude, DEFAULT_MAX_AMPLITUDE),
            },
            AmplitudeScaling::PerTrace { window_size } => AmplitudeScaling::PerTrace {
                window_size: window_size.filter(|&w| w > 0),
            },
            AmplitudeScaling::Percentile { percentile } => AmplitudeScaling::Percentile {
                percentile: clamp_percentile(percentile, DEFAULT_PERCENTILE),
            },
            AmplitudeScaling::Manual { scale } => AmplitudeScaling::Manual {
                scale: if scale.is_finite() {
                    scale
                } else {
                    DEFAULT_MANUAL_SCALE
                },
            },
        }
    }

    /// Returns `false` (and changes nothing) unless global scaling is active.
    pub fn set_max_amplitude(&mut self, value: f32) -> bool {
        match self {
            AmplitudeScaling::Global { max_amplitude } => {
                *max_amplitude = clamp_max_amplitude(value, *max_amplitude);
                true
            }
            _ => false,
        }
    }

    /// Non-positive windows are treated as "no window" (full-trace AGC).
    pub fn set_window_size(&mut self, value: Option<i64>) -> bool {
        match self {
            AmplitudeScaling::PerTrace { window_size } => {
                *window_size = value
                    .filter(|&w| w > 0)
                    .and_then(|w| usize::try_from(w).ok());
                true
            }
            _ => false,
        }
    }

    pub fn set_percentile(&mut self, value: f32) -> bool {
        match self {
            AmplitudeScaling::Percentile { percentile } => {
                *percentile = clamp_percentile(value, *percentile);
                true
            }
            _ => false,
        }
    }

    /// Any finite value is accepted, including zero and negatives.
    pub fn set_scale(&mut self, value: f32) -> bool {
        match self {
            AmplitudeScaling::Manual { scale } => {
                if value.is_finite() {
                    *scale = value;
                }
                true
            }
            _ => false,
        }
    }
}

fn clamp_percentile(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(MIN_PERCENTILE, MAX_PERCENTILE)
    }
}

fn clamp_max_amplitude(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(MIN_MAX_AMPLITUDE, f32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_kind_discards_previous_fields() {
        let scaling = AmplitudeScaling::Percentile { percentile: 0.7 };
        assert_eq!(
            scaling.with_kind(ScalingKind::Manual),
            AmplitudeScaling::Manual { scale: 1.0 }
        );
    }

    #[test]
    fn reselecting_active_kind_keeps_fields() {
        let scaling = AmplitudeScaling::Percentile { percentile: 0.7 };
        assert_eq!(scaling.with_kind(ScalingKind::Percentile), scaling);
    }

    #[test]
    fn edits_only_touch_active_variant() {
        let mut scaling = AmplitudeScaling::Manual { scale: 2.0 };
        assert!(!scaling.set_percentile(0.9));
        assert_eq!(scaling, AmplitudeScaling::Manual { scale: 2.0 });
    }
}
