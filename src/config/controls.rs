//! Control bounds for the four solver inputs.

use heapless::String;
use serde::Deserialize;

use crate::motion::Parameter;

/// Policy for handling values outside a control's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundPolicy {
    /// Clamp the value to the nearest bound (slider behaviour).
    #[default]
    Clamp,
    /// Reject values outside the range.
    Reject,
}

/// Bounds, initial value and label of one control.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ControlConfig {
    /// Label shown next to the control.
    pub label: String<32>,

    /// Minimum allowed value.
    pub min: f64,

    /// Maximum allowed value.
    pub max: f64,

    /// Value the control starts at.
    pub initial: f64,

    /// What to do when a value is out of range.
    #[serde(default)]
    pub policy: BoundPolicy,
}

impl ControlConfig {
    /// Create a new control configuration with the `Clamp` policy.
    pub fn new(label: &str, min: f64, max: f64, initial: f64) -> Self {
        Self {
            label: String::try_from(label).unwrap_or_default(),
            min,
            max,
            initial,
            policy: BoundPolicy::Clamp,
        }
    }

    /// Replace the bound policy.
    pub fn with_policy(mut self, policy: BoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check if the range is valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check if a value is within range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Apply the bound policy to a value.
    ///
    /// Returns `Some(value)` if valid or clamped, `None` if rejected.
    /// NaN is always rejected.
    pub fn apply(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        if self.contains(value) {
            Some(value)
        } else {
            match self.policy {
                BoundPolicy::Reject => None,
                BoundPolicy::Clamp => {
                    if value < self.min {
                        Some(self.min)
                    } else {
                        Some(self.max)
                    }
                }
            }
        }
    }
}

/// Configuration of all four controls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlSet {
    /// Requested max velocity control.
    pub max_velocity: ControlConfig,
    /// Max acceleration control.
    pub max_acceleration: ControlConfig,
    /// Max deceleration control.
    pub max_deceleration: ControlConfig,
    /// Distance control.
    pub distance: ControlConfig,
}

impl ControlSet {
    /// Get the configuration of one control.
    pub fn get(&self, parameter: Parameter) -> &ControlConfig {
        match parameter {
            Parameter::MaxVelocity => &self.max_velocity,
            Parameter::MaxAcceleration => &self.max_acceleration,
            Parameter::MaxDeceleration => &self.max_deceleration,
            Parameter::Distance => &self.distance,
        }
    }

    /// Iterate over `(parameter, config)` pairs in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &ControlConfig)> {
        Parameter::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl Default for ControlSet {
    fn default() -> Self {
        Self {
            max_velocity: ControlConfig::new("Max Velocity", 0.05, 5.0, 2.0),
            max_acceleration: ControlConfig::new("Max Acceleration", 0.05, 5.0, 1.5),
            max_deceleration: ControlConfig::new("Max Deceleration", 0.05, 5.0, 1.0),
            distance: ControlConfig::new("Distance", 0.1, 15.0, 12.0),
        }
    }
}
