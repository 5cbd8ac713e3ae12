//! Control panel: the four bounded inputs of the explorer.

use crate::config::{ControlConfig, ControlSet};
use crate::error::{ConfigError, Error, Result};
use crate::motion::{InputParameters, Parameter};

/// One bounded control and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    config: ControlConfig,
    value: f64,
}

impl Control {
    /// Create a control at its initial value.
    pub fn new(config: ControlConfig) -> Self {
        let value = config.initial;
        Self { config, value }
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Bounds and label.
    #[inline]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Label shown next to the control.
    #[inline]
    pub fn label(&self) -> &str {
        self.config.label.as_str()
    }
}

/// The four controls, read as one [`InputParameters`] bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    controls: [Control; 4],
}

impl ControlPanel {
    /// Create a panel with every control at its initial value.
    pub fn new(controls: &ControlSet) -> Self {
        Self {
            controls: Parameter::ALL.map(|p| Control::new(controls.get(p).clone())),
        }
    }

    /// Get a control.
    #[inline]
    pub fn control(&self, parameter: Parameter) -> &Control {
        &self.controls[parameter as usize]
    }

    /// Current value of a control.
    #[inline]
    pub fn value(&self, parameter: Parameter) -> f64 {
        self.control(parameter).value
    }

    /// Set a control, applying its bound policy.
    ///
    /// Returns `true` if the stored value changed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the policy rejects the value.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> Result<bool> {
        let control = &mut self.controls[parameter as usize];
        let accepted = control.config.apply(value).ok_or_else(|| {
            Error::Config(ConfigError::ValueOutOfRange {
                parameter,
                value,
                min: control.config.min,
                max: control.config.max,
            })
        })?;

        let changed = accepted != control.value;
        control.value = accepted;
        Ok(changed)
    }

    /// Put every control back at its initial value.
    pub fn reset(&mut self) {
        for control in self.controls.iter_mut() {
            control.value = control.config.initial;
        }
    }

    /// Store a value without applying the bound policy.
    #[cfg(test)]
    pub(crate) fn set_unchecked(&mut self, parameter: Parameter, value: f64) {
        self.controls[parameter as usize].value = value;
    }

    /// Read the current values as solver inputs.
    pub fn parameters(&self) -> InputParameters {
        InputParameters::new(
            self.value(Parameter::MaxVelocity),
            self.value(Parameter::MaxAcceleration),
            self.value(Parameter::MaxDeceleration),
            self.value(Parameter::Distance),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundPolicy;

    #[test]
    fn test_initial_values() {
        let panel = ControlPanel::new(&ControlSet::default());

        assert_eq!(panel.parameters(), InputParameters::new(2.0, 1.5, 1.0, 12.0));
        assert_eq!(panel.control(Parameter::Distance).label(), "Distance");
    }

    #[test]
    fn test_set_reports_change() {
        let mut panel = ControlPanel::new(&ControlSet::default());

        assert_eq!(panel.set(Parameter::MaxVelocity, 3.0), Ok(true));
        assert_eq!(panel.set(Parameter::MaxVelocity, 3.0), Ok(false));
        assert_eq!(panel.value(Parameter::MaxVelocity), 3.0);
    }

    #[test]
    fn test_set_clamps() {
        let mut panel = ControlPanel::new(&ControlSet::default());

        assert_eq!(panel.set(Parameter::MaxAcceleration, 0.0), Ok(true));
        assert_eq!(panel.value(Parameter::MaxAcceleration), 0.05);
    }

    #[test]
    fn test_set_rejects() {
        let mut controls = ControlSet::default();
        controls.distance = controls.distance.clone().with_policy(BoundPolicy::Reject);
        let mut panel = ControlPanel::new(&controls);

        assert!(matches!(
            panel.set(Parameter::Distance, 20.0),
            Err(Error::Config(ConfigError::ValueOutOfRange { .. }))
        ));
        assert_eq!(panel.value(Parameter::Distance), 12.0);
    }

    #[test]
    fn test_reset() {
        let mut panel = ControlPanel::new(&ControlSet::default());
        panel.set(Parameter::Distance, 3.0).unwrap();
        panel.reset();

        assert_eq!(panel.value(Parameter::Distance), 12.0);
    }
}
