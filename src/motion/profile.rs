//! Motion profile calculation.
//!
//! Provides asymmetric trapezoidal motion profiles with independent
//! acceleration and deceleration rates, clamped to the velocity the
//! distance can actually support.

use core::fmt;

use libm::sqrt;

use crate::error::{MotionError, Result};

/// Cruise distance, relative to the total distance, below which the cruise
/// phase counts as vanished.
pub const DEGENERATE_TOLERANCE: f64 = 1e-9;

/// One of the four solver inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    /// Requested maximum velocity.
    MaxVelocity,
    /// Maximum acceleration rate.
    MaxAcceleration,
    /// Maximum deceleration rate.
    MaxDeceleration,
    /// Total distance to travel.
    Distance,
}

impl Parameter {
    /// All parameters, in control-panel order.
    pub const ALL: [Parameter; 4] = [
        Parameter::MaxVelocity,
        Parameter::MaxAcceleration,
        Parameter::MaxDeceleration,
        Parameter::Distance,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::MaxVelocity => "max velocity",
            Parameter::MaxAcceleration => "max acceleration",
            Parameter::MaxDeceleration => "max deceleration",
            Parameter::Distance => "distance",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase of the motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Accelerating from rest toward the effective max velocity.
    Accelerate,
    /// Moving at constant effective max velocity.
    Cruise,
    /// Decelerating from the effective max velocity to rest.
    Decelerate,
}

impl Phase {
    /// All phases in time order.
    pub const ALL: [Phase; 3] = [Phase::Accelerate, Phase::Cruise, Phase::Decelerate];
}

/// The four solver inputs, passed explicitly into [`MotionProfile::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputParameters {
    /// Requested maximum velocity.
    pub max_velocity: f64,
    /// Maximum acceleration rate.
    pub max_acceleration: f64,
    /// Maximum deceleration rate.
    pub max_deceleration: f64,
    /// Total distance to travel.
    pub distance: f64,
}

impl InputParameters {
    /// Bundle the four inputs.
    pub const fn new(
        max_velocity: f64,
        max_acceleration: f64,
        max_deceleration: f64,
        distance: f64,
    ) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            max_deceleration,
            distance,
        }
    }

    /// Read one input.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::MaxVelocity => self.max_velocity,
            Parameter::MaxAcceleration => self.max_acceleration,
            Parameter::MaxDeceleration => self.max_deceleration,
            Parameter::Distance => self.distance,
        }
    }

    /// Overwrite one input.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::MaxVelocity => self.max_velocity = value,
            Parameter::MaxAcceleration => self.max_acceleration = value,
            Parameter::MaxDeceleration => self.max_deceleration = value,
            Parameter::Distance => self.distance = value,
        }
    }

    /// Reject any input that is zero, negative, or not finite.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidParameter` naming the first offending input.
    pub fn validate(&self) -> Result<()> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !(value.is_finite() && value > 0.0) {
                return Err(MotionError::InvalidParameter { parameter, value }.into());
            }
        }
        Ok(())
    }
}

/// Highest velocity reachable within `distance` by accelerating and then
/// immediately decelerating back to rest, with no cruise segment.
///
/// Solves `v²/(2a) + v²/(2b) = distance` for `v`.
#[inline]
pub fn velocity_ceiling(max_acceleration: f64, max_deceleration: f64, distance: f64) -> f64 {
    sqrt(
        2.0 * distance * max_acceleration * max_deceleration
            / (max_acceleration + max_deceleration),
    )
}

/// Computed motion profile for a move (asymmetric trapezoidal).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionProfile {
    /// Inputs this profile was solved from.
    pub params: InputParameters,

    /// Max velocity actually reached (never above the requested one).
    pub effective_max_velocity: f64,

    /// Time spent accelerating.
    pub accel_duration: f64,

    /// Time spent at constant velocity. Zero for a degenerate profile.
    pub cruise_duration: f64,

    /// Time spent decelerating.
    pub decel_duration: f64,

    /// Distance covered while accelerating.
    pub accel_distance: f64,

    /// Distance covered at constant velocity.
    pub cruise_distance: f64,

    /// Distance covered while decelerating.
    pub decel_distance: f64,
}

impl MotionProfile {
    /// Solve the three-phase profile for the given inputs.
    ///
    /// A requested max velocity above [`velocity_ceiling`] is clamped to it,
    /// which drives the cruise phase to zero.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidParameter` if any input is not a finite
    /// value > 0, and `MotionError::InvalidEffectiveVelocity` if the clamped
    /// velocity underflows to zero.
    pub fn solve(params: InputParameters) -> Result<Self> {
        params.validate()?;

        let a = params.max_acceleration;
        let b = params.max_deceleration;
        let distance = params.distance;

        let ceiling = velocity_ceiling(a, b, distance);
        let v = if params.max_velocity > ceiling {
            ceiling
        } else {
            params.max_velocity
        };

        if !(v > 0.0) {
            return Err(MotionError::InvalidEffectiveVelocity(v).into());
        }

        // v = a*t, d = 0.5*a*t²
        let accel_duration = v / a;
        let accel_distance = 0.5 * a * accel_duration * accel_duration;

        let decel_duration = v / b;
        let decel_distance = v * decel_duration - 0.5 * b * decel_duration * decel_duration;

        // Clamped profiles leave only rounding residue here
        let cruise_distance = (distance - accel_distance - decel_distance).max(0.0);
        let cruise_duration = cruise_distance / v;

        trace!(
            "solved profile: v_eff={} t_a={} t_c={} t_d={}",
            v,
            accel_duration,
            cruise_duration,
            decel_duration
        );

        Ok(Self {
            params,
            effective_max_velocity: v,
            accel_duration,
            cruise_duration,
            decel_duration,
            accel_distance,
            cruise_distance,
            decel_distance,
        })
    }

    /// Total distance travelled.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.params.distance
    }

    /// Total duration of the move.
    #[inline]
    pub fn total_duration(&self) -> f64 {
        self.accel_duration + self.cruise_duration + self.decel_duration
    }

    /// Velocity ceiling for this profile's limits and distance.
    #[inline]
    pub fn velocity_ceiling(&self) -> f64 {
        velocity_ceiling(
            self.params.max_acceleration,
            self.params.max_deceleration,
            self.params.distance,
        )
    }

    /// Whether the requested max velocity was clamped to the ceiling.
    #[inline]
    pub fn is_clamped(&self) -> bool {
        self.effective_max_velocity < self.params.max_velocity
    }

    /// Check if the cruise phase vanished (pure accelerate-then-decelerate).
    ///
    /// Clamped profiles can leave a few ulps of cruise distance behind, so
    /// this compares against [`DEGENERATE_TOLERANCE`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.cruise_distance <= DEGENERATE_TOLERANCE * self.params.distance
    }

    /// Get the `(start, end)` time interval of a phase.
    pub fn phase_span(&self, phase: Phase) -> (f64, f64) {
        let cruise_start = self.accel_duration;
        let decel_start = cruise_start + self.cruise_duration;
        match phase {
            Phase::Accelerate => (0.0, cruise_start),
            Phase::Cruise => (cruise_start, decel_start),
            Phase::Decelerate => (decel_start, decel_start + self.decel_duration),
        }
    }

    /// Position reached at the end of a phase.
    pub fn phase_end_position(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Accelerate => self.accel_distance,
            Phase::Cruise => self.accel_distance + self.cruise_distance,
            Phase::Decelerate => self.accel_distance + self.cruise_distance + self.decel_distance,
        }
    }
}
