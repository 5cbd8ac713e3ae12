//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::explorer::MAX_SAMPLES_PER_PHASE;
use crate::motion::Parameter;

use super::{ControlConfig, ExplorerConfig, ViewConfig};

/// Validate an explorer configuration.
///
/// Checks:
/// - Control ranges are valid (min < max) and strictly positive
/// - Initial control values lie inside their ranges
/// - Axis ranges are valid
/// - Samples per phase fit the curve buffers
pub fn validate_config(config: &ExplorerConfig) -> Result<()> {
    for (parameter, control) in config.controls.iter() {
        validate_control(parameter, control)?;
    }

    validate_view(&config.view)
}

fn validate_control(parameter: Parameter, control: &ControlConfig) -> Result<()> {
    if !control.is_valid() {
        return Err(Error::Config(ConfigError::InvalidRange {
            parameter,
            min: control.min,
            max: control.max,
        }));
    }

    // Zero limits would make every phase duration divide by zero
    if !(control.min > 0.0) {
        return Err(Error::Config(ConfigError::NonPositiveMinimum {
            parameter,
            min: control.min,
        }));
    }

    if !control.contains(control.initial) {
        return Err(Error::Config(ConfigError::InitialOutOfRange {
            parameter,
            initial: control.initial,
        }));
    }

    Ok(())
}

fn validate_view(view: &ViewConfig) -> Result<()> {
    for axis in [view.time_axis, view.distance_axis] {
        if !axis.is_valid() {
            return Err(Error::Config(ConfigError::InvalidAxisRange {
                min: axis.min,
                max: axis.max,
            }));
        }
    }

    if view.samples_per_phase < 2 || view.samples_per_phase > MAX_SAMPLES_PER_PHASE {
        return Err(Error::Config(ConfigError::InvalidSampleCount(
            view.samples_per_phase,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisRange;

    #[test]
    fn test_reference_config_is_valid() {
        assert!(validate_config(&ExplorerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let mut config = ExplorerConfig::default();
        config.controls.max_acceleration = ControlConfig::new("Max Acceleration", 0.0, 5.0, 1.5);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::NonPositiveMinimum {
                parameter: Parameter::MaxAcceleration,
                ..
            }))
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = ExplorerConfig::default();
        config.controls.distance = ControlConfig::new("Distance", 15.0, 0.1, 12.0);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_initial_out_of_range_rejected() {
        let mut config = ExplorerConfig::default();
        config.controls.max_velocity = ControlConfig::new("Max Velocity", 0.05, 5.0, 7.0);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InitialOutOfRange { initial, .. })) if initial == 7.0
        ));
    }

    #[test]
    fn test_view_checks() {
        let mut config = ExplorerConfig::default();
        config.view.time_axis = AxisRange::new(5.0, 5.0);
        assert!(validate_config(&config).is_err());

        let mut config = ExplorerConfig::default();
        config.view.samples_per_phase = 1;
        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSampleCount(1)))
        );

        config.view.samples_per_phase = MAX_SAMPLES_PER_PHASE + 1;
        assert!(validate_config(&config).is_err());
    }
}
