//! Presentation adapter: profile → draw request.

use heapless::{String, Vec};

use crate::config::{AxisRange, ViewConfig};
use crate::motion::{sample, MotionProfile, Phase};

/// Capacity of one curve's point buffer.
pub const MAX_SAMPLES_PER_PHASE: usize = 256;

/// Headroom added above the profile when auto-scaling axes.
const AUTO_SCALE_MARGIN: f64 = 1.05;

/// Sampled `(time, position)` points of one curve.
pub type CurvePoints = Vec<(f64, f64), MAX_SAMPLES_PER_PHASE>;

/// Line style of a plotted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineStyle {
    /// Continuous line.
    Solid,
    /// Dashed reference line.
    Dashed,
}

/// Position-vs-time curve of one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Phase the curve belongs to.
    pub phase: Phase,
    /// Sampled points, in time order.
    pub points: CurvePoints,
}

impl Curve {
    /// Time values of the curve.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.0)
    }

    /// Position values of the curve.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }
}

/// Horizontal reference line at the position reached when a phase ends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundaryMarker {
    /// Phase whose end the marker shows.
    pub phase: Phase,
    /// Position (vertical coordinate) of the line.
    pub position: f64,
    /// Time where the line starts (always 0).
    pub time_start: f64,
    /// Time where the phase ends.
    pub time_end: f64,
    /// Line style.
    pub style: LineStyle,
}

/// Full-replace draw request handed to a [`Renderer`](super::Renderer).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    /// Plot title.
    pub title: String<32>,
    /// Time axis label.
    pub x_label: String<16>,
    /// Distance axis label.
    pub y_label: String<16>,
    /// Time axis range.
    pub time_axis: AxisRange,
    /// Distance axis range.
    pub distance_axis: AxisRange,
    /// Accelerate, cruise and decelerate curves, in that order.
    pub curves: [Curve; 3],
    /// Phase-end markers, in phase order.
    pub markers: [BoundaryMarker; 3],
}

impl DrawRequest {
    /// Build the draw request for a solved profile.
    pub fn build(profile: &MotionProfile, view: &ViewConfig) -> Self {
        let count = view.samples_per_phase.min(MAX_SAMPLES_PER_PHASE);

        let curves = Phase::ALL.map(|phase| Curve {
            phase,
            points: sample(profile, phase, count).collect(),
        });

        let markers = Phase::ALL.map(|phase| BoundaryMarker {
            phase,
            position: profile.phase_end_position(phase),
            time_start: 0.0,
            time_end: profile.phase_span(phase).1,
            style: LineStyle::Dashed,
        });

        let (time_axis, distance_axis) = if view.auto_scale {
            (
                AxisRange::new(0.0, profile.total_duration() * AUTO_SCALE_MARGIN),
                AxisRange::new(0.0, profile.distance() * AUTO_SCALE_MARGIN),
            )
        } else {
            (view.time_axis, view.distance_axis)
        };

        Self {
            title: view.title.clone(),
            x_label: view.x_label.clone(),
            y_label: view.y_label.clone(),
            time_axis,
            distance_axis,
            curves,
            markers,
        }
    }

    /// Get the curve of a phase.
    pub fn curve(&self, phase: Phase) -> &Curve {
        &self.curves[phase as usize]
    }

    /// Get the marker of a phase.
    pub fn marker(&self, phase: Phase) -> &BoundaryMarker {
        &self.markers[phase as usize]
    }
}
