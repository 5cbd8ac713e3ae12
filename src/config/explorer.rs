//! Explorer configuration - root configuration structure.

use serde::Deserialize;

use super::controls::{ControlConfig, ControlSet};
use super::view::ViewConfig;
use crate::motion::{InputParameters, Parameter};

/// Root configuration structure from TOML.
///
/// Missing tables fall back to the reference configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExplorerConfig {
    /// Bounds and initial values of the four controls.
    #[serde(default)]
    pub controls: ControlSet,

    /// Plot layout.
    #[serde(default)]
    pub view: ViewConfig,
}

impl ExplorerConfig {
    /// Get a control configuration.
    pub fn control(&self, parameter: Parameter) -> &ControlConfig {
        self.controls.get(parameter)
    }

    /// Initial values of all controls as solver inputs.
    pub fn initial_parameters(&self) -> InputParameters {
        InputParameters::new(
            self.controls.max_velocity.initial,
            self.controls.max_acceleration.initial,
            self.controls.max_deceleration.initial,
            self.controls.distance.initial,
        )
    }
}
