//! Motion module for trapezoid-motion.
//!
//! Provides motion profile solving and closed-form phase evaluation.

mod evaluator;
mod profile;

pub use evaluator::{
    phase_at, phase_position, phase_velocity, position_at, sample, velocity_at, PhaseSamples,
};
pub use profile::{
    velocity_ceiling, InputParameters, MotionProfile, Parameter, Phase, DEGENERATE_TOLERANCE,
};
