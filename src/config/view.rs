//! Plot view configuration.

use heapless::String;
use serde::Deserialize;

/// Closed range of one plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Create a new axis range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the range is valid (min < max, both finite).
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// How the explorer lays out its plot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Plot title.
    pub title: String<32>,

    /// Time axis label.
    pub x_label: String<16>,

    /// Distance axis label.
    pub y_label: String<16>,

    /// Fixed time axis range.
    pub time_axis: AxisRange,

    /// Fixed distance axis range.
    pub distance_axis: AxisRange,

    /// Points sampled per phase curve.
    pub samples_per_phase: usize,

    /// Fit the axes to each profile instead of using the fixed ranges.
    pub auto_scale: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: String::try_from("Motion Profile").unwrap_or_default(),
            x_label: String::try_from("Time").unwrap_or_default(),
            y_label: String::try_from("Distance").unwrap_or_default(),
            time_axis: AxisRange::new(0.0, 15.0),
            distance_axis: AxisRange::new(0.0, 15.0),
            samples_per_phase: 100,
            auto_scale: false,
        }
    }
}
