//! Integration tests for trapezoid-motion library.
//!
//! These tests verify the complete workflow from configuration to solved
//! profile to draw request.

use trapezoid_motion::config::{parse_config, AxisRange, BoundPolicy, ExplorerConfig};
use trapezoid_motion::error::{ConfigError, Error, MotionError};
use trapezoid_motion::explorer::{Explorer, LineStyle, RecordingRenderer, RefreshOutcome};
use trapezoid_motion::motion::{phase_position, position_at, InputParameters, MotionProfile, Parameter, Phase};
use trapezoid_motion::velocity_ceiling;

// =============================================================================
// Test configuration data
// =============================================================================

const WIDE_CONFIG: &str = r#"
[controls.distance]
label = "Distance"
min = 0.5
max = 40.0
initial = 30.0

[controls.max_velocity]
label = "Max Velocity"
min = 0.1
max = 10.0
initial = 4.0
policy = "reject"

[view]
title = "Wide Profile"
auto_scale = true
samples_per_phase = 20
"#;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

// =============================================================================
// Solver scenarios
// =============================================================================

#[test]
fn scenario_cruising_profile() {
    let profile = MotionProfile::solve(InputParameters::new(2.0, 1.5, 1.0, 12.0)).unwrap();

    assert!(close(velocity_ceiling(1.5, 1.0, 12.0), 3.795));
    assert_eq!(profile.effective_max_velocity, 2.0);
    assert!(close(profile.accel_duration, 1.333));
    assert!(close(profile.accel_distance, 1.333));
    assert!(close(profile.decel_duration, 2.0));
    assert!(close(profile.decel_distance, 2.0));
    assert!(close(profile.cruise_distance, 8.667));
    assert!(close(profile.cruise_duration, 4.333));
}

#[test]
fn scenario_clamped_profile() {
    let profile = MotionProfile::solve(InputParameters::new(5.0, 1.0, 1.0, 1.0)).unwrap();

    assert!(close(velocity_ceiling(1.0, 1.0, 1.0), 1.0));
    assert!(close(profile.effective_max_velocity, 1.0));
    assert!(profile.cruise_duration.abs() < 1e-9);
    assert!(close(profile.accel_distance, 0.5));
    assert!(close(profile.decel_distance, 0.5));
    assert!(profile.is_degenerate());
}

#[test]
fn scenario_invalid_acceleration() {
    let result = MotionProfile::solve(InputParameters::new(2.0, 0.0, 1.0, 12.0));

    match result {
        Err(e) => {
            assert!(e.is_invalid_parameter());
            assert_eq!(
                e,
                Error::Motion(MotionError::InvalidParameter {
                    parameter: Parameter::MaxAcceleration,
                    value: 0.0,
                })
            );
        }
        Ok(profile) => panic!("zero acceleration produced {:?}", profile),
    }
}

#[test]
fn asymmetric_clamp_lands_on_ceiling() {
    // Fast acceleration, slow braking, short move
    let params = InputParameters::new(5.0, 4.0, 0.25, 2.0);
    let profile = MotionProfile::solve(params).unwrap();

    let ceiling = velocity_ceiling(4.0, 0.25, 2.0);
    assert!((profile.effective_max_velocity - ceiling).abs() < 1e-12);
    assert!(profile.cruise_distance.abs() < 1e-9);
    assert!(profile.decel_distance > profile.accel_distance);

    let t1 = profile.accel_duration;
    let left = phase_position(&profile, Phase::Accelerate, t1);
    let right = phase_position(&profile, Phase::Decelerate, t1);
    assert!((left - right).abs() < 1e-9);
}

#[test]
fn position_reaches_distance() {
    let profile = MotionProfile::solve(InputParameters::new(0.05, 5.0, 5.0, 15.0)).unwrap();

    assert_eq!(position_at(&profile, 0.0), 0.0);
    assert!((position_at(&profile, profile.total_duration()) - 15.0).abs() < 1e-9);
}

// =============================================================================
// Configuration loading
// =============================================================================

#[test]
fn parse_wide_config() {
    let config = parse_config(WIDE_CONFIG).expect("Should parse wide config");

    assert_eq!(config.control(Parameter::Distance).initial, 30.0);
    assert_eq!(config.control(Parameter::MaxVelocity).policy, BoundPolicy::Reject);
    assert_eq!(config.control(Parameter::MaxAcceleration).max, 5.0);
    assert_eq!(config.view.title.as_str(), "Wide Profile");
    assert_eq!(config.initial_parameters(), InputParameters::new(4.0, 1.5, 1.0, 30.0));
}

#[test]
fn reference_config_matches_defaults() {
    let config = ExplorerConfig::default();

    let bounds = [
        (Parameter::MaxVelocity, 0.05, 5.0, 2.0, "Max Velocity"),
        (Parameter::MaxAcceleration, 0.05, 5.0, 1.5, "Max Acceleration"),
        (Parameter::MaxDeceleration, 0.05, 5.0, 1.0, "Max Deceleration"),
        (Parameter::Distance, 0.1, 15.0, 12.0, "Distance"),
    ];
    for (parameter, min, max, initial, label) in bounds {
        let control = config.control(parameter);
        assert_eq!(control.min, min);
        assert_eq!(control.max, max);
        assert_eq!(control.initial, initial);
        assert_eq!(control.label.as_str(), label);
    }

    assert_eq!(config.view.time_axis, AxisRange::new(0.0, 15.0));
    assert_eq!(config.view.distance_axis, AxisRange::new(0.0, 15.0));
}

// =============================================================================
// Explorer session
// =============================================================================

#[test]
fn explorer_reference_session() {
    let explorer = Explorer::new(ExplorerConfig::default(), RecordingRenderer::new()).unwrap();
    let request = explorer.renderer().last().expect("initial draw");

    assert_eq!(request.x_label.as_str(), "Time");
    assert_eq!(request.y_label.as_str(), "Distance");
    assert_eq!(request.curves.len(), 3);
    assert!(request.markers.iter().all(|m| m.style == LineStyle::Dashed && m.time_start == 0.0));
    assert!((request.marker(Phase::Decelerate).position - 12.0).abs() < 1e-9);
}

#[test]
fn explorer_collapses_cruise_when_distance_shrinks() {
    let mut explorer = Explorer::new(ExplorerConfig::default(), RecordingRenderer::new()).unwrap();

    explorer.set_parameter(Parameter::MaxVelocity, 3.0).unwrap();
    assert!(!explorer.profile().unwrap().is_degenerate());

    explorer.set_parameter(Parameter::Distance, 0.5).unwrap();
    let profile = explorer.profile().unwrap();
    assert!(profile.is_clamped());
    assert!(profile.is_degenerate());

    let request = explorer.renderer().last().unwrap();
    let cruise = request.curve(Phase::Cruise);
    let first = cruise.points.first().unwrap();
    let last = cruise.points.last().unwrap();
    assert!((first.0 - last.0).abs() < 1e-9);
}

#[test]
fn explorer_auto_scales_wide_config() {
    let config = parse_config(WIDE_CONFIG).unwrap();
    let explorer = Explorer::new(config, RecordingRenderer::new()).unwrap();

    let request = explorer.renderer().last().unwrap();
    let profile = explorer.profile().unwrap();
    assert!(request.distance_axis.max >= 30.0);
    assert!(request.time_axis.max >= profile.total_duration());
    assert_eq!(request.curve(Phase::Accelerate).points.len(), 20);
}

#[test]
fn explorer_rejects_out_of_range_value() {
    let config = parse_config(WIDE_CONFIG).unwrap();
    let mut explorer = Explorer::new(config, RecordingRenderer::new()).unwrap();

    let result = explorer.set_parameter(Parameter::MaxVelocity, 50.0);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ValueOutOfRange { parameter: Parameter::MaxVelocity, .. }))
    ));
    assert_eq!(explorer.panel().value(Parameter::MaxVelocity), 4.0);
    assert_eq!(explorer.renderer().draw_count(), 1);
}

#[test]
fn explorer_clamps_slider_values() {
    let mut explorer = Explorer::new(ExplorerConfig::default(), RecordingRenderer::new()).unwrap();

    let outcome = explorer.set_parameter(Parameter::MaxDeceleration, -1.0).unwrap();
    assert_eq!(outcome, RefreshOutcome::Redrawn);
    assert_eq!(explorer.profile().unwrap().params.max_deceleration, 0.05);
}

#[test]
fn explorer_rejects_invalid_config() {
    let mut config = ExplorerConfig::default();
    config.view.samples_per_phase = 0;

    let result = Explorer::new(config, RecordingRenderer::new());
    assert!(matches!(
        result.map(|_| ()),
        Err(Error::Config(ConfigError::InvalidSampleCount(0)))
    ));
}
