//! Closed-form evaluation of a solved profile.
//!
//! Position and velocity are piecewise polynomials in time; nothing here
//! integrates numerically or keeps state between calls.

use core::iter::FusedIterator;

use super::profile::{MotionProfile, Phase};

/// Evaluate one phase's position formula at time `t`, regardless of whether
/// `t` falls inside that phase.
pub fn phase_position(profile: &MotionProfile, phase: Phase, t: f64) -> f64 {
    let v = profile.effective_max_velocity;
    match phase {
        Phase::Accelerate => 0.5 * profile.params.max_acceleration * t * t,
        Phase::Cruise => profile.accel_distance + v * (t - profile.accel_duration),
        Phase::Decelerate => {
            let dt = t - profile.accel_duration - profile.cruise_duration;
            profile.accel_distance + profile.cruise_distance + v * dt
                - 0.5 * profile.params.max_deceleration * dt * dt
        }
    }
}

/// Evaluate one phase's velocity formula at time `t`.
pub fn phase_velocity(profile: &MotionProfile, phase: Phase, t: f64) -> f64 {
    let v = profile.effective_max_velocity;
    match phase {
        Phase::Accelerate => profile.params.max_acceleration * t,
        Phase::Cruise => v,
        Phase::Decelerate => {
            let dt = t - profile.accel_duration - profile.cruise_duration;
            v - profile.params.max_deceleration * dt
        }
    }
}

/// Get the phase at time `t`, or `None` once the move is complete.
///
/// Boundaries belong to the phase that ends there, so `t = accel_duration`
/// is still accelerating.
pub fn phase_at(profile: &MotionProfile, t: f64) -> Option<Phase> {
    let cruise_end = profile.accel_duration + profile.cruise_duration;
    if t <= profile.accel_duration {
        Some(Phase::Accelerate)
    } else if t <= cruise_end {
        Some(Phase::Cruise)
    } else if t <= profile.total_duration() {
        Some(Phase::Decelerate)
    } else {
        None
    }
}

/// Position at time `t`.
///
/// Before the move the position is 0; after it, the full distance.
pub fn position_at(profile: &MotionProfile, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    match phase_at(profile, t) {
        Some(phase) => phase_position(profile, phase, t),
        None => profile.distance(),
    }
}

/// Velocity at time `t` (zero outside the move).
pub fn velocity_at(profile: &MotionProfile, t: f64) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    match phase_at(profile, t) {
        Some(phase) => phase_velocity(profile, phase, t).max(0.0),
        None => 0.0,
    }
}

/// Sample one phase with `count` evenly spaced points, endpoints included.
pub fn sample(profile: &MotionProfile, phase: Phase, count: usize) -> PhaseSamples {
    let (start, end) = profile.phase_span(phase);
    PhaseSamples {
        profile: *profile,
        phase,
        start,
        end,
        count,
        front: 0,
        back: count,
    }
}

/// Lazy `(time, position)` samples over one phase.
///
/// Cloning restarts nothing and shares nothing: every sample is recomputed
/// from the profile.
#[derive(Debug, Clone)]
pub struct PhaseSamples {
    profile: MotionProfile,
    phase: Phase,
    start: f64,
    end: f64,
    count: usize,
    front: usize,
    back: usize,
}

impl PhaseSamples {
    /// Phase being sampled.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rewind to the first sample.
    pub fn restart(&mut self) {
        self.front = 0;
        self.back = self.count;
    }

    fn point(&self, index: usize) -> (f64, f64) {
        // Pin the last sample to the phase end to avoid drift
        let t = if index + 1 == self.count && self.count > 1 {
            self.end
        } else if self.count > 1 {
            self.start + (self.end - self.start) * index as f64 / (self.count - 1) as f64
        } else {
            self.start
        };
        (t, phase_position(&self.profile, self.phase, t))
    }
}

impl Iterator for PhaseSamples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.point(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PhaseSamples {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for PhaseSamples {}

impl FusedIterator for PhaseSamples {}
