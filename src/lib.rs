//! # trapezoid-motion
//!
//! Asymmetric trapezoidal motion profiles for a point mass covering a fixed
//! distance, plus an interactive exploration session that redraws the
//! position-vs-time curve whenever one of the four limits changes.
//!
//! ## Features
//!
//! - **Closed-form solver**: accelerate, cruise and decelerate phases derived
//!   analytically from max velocity, acceleration, deceleration and distance
//! - **Velocity clamping**: requested velocities the distance cannot support are
//!   clamped to the velocity ceiling, collapsing the cruise phase
//! - **Lazy sampling**: restartable per-phase `(time, position)` iterators
//! - **Renderer-agnostic**: the explorer emits full-replace [`DrawRequest`]s
//!   to any [`Renderer`]
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust
//! use trapezoid_motion::{InputParameters, MotionProfile, Phase};
//!
//! let params = InputParameters::new(2.0, 1.5, 1.0, 12.0);
//! let profile = MotionProfile::solve(params)?;
//!
//! assert_eq!(profile.effective_max_velocity, 2.0);
//! assert!(profile.cruise_duration > 0.0);
//!
//! let curve: Vec<_> = trapezoid_motion::motion::sample(&profile, Phase::Cruise, 10).collect();
//! assert_eq!(curve.len(), 10);
//! # Ok::<(), trapezoid_motion::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML configuration loading and `log` output
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod explorer;
pub mod motion;

// Re-exports for ergonomic API
pub use config::{validate_config, ControlConfig, ExplorerConfig, ViewConfig};
pub use error::{Error, Result};
pub use explorer::{DrawRequest, Explorer, RefreshOutcome, Renderer};
pub use motion::{velocity_ceiling, InputParameters, MotionProfile, Parameter, Phase};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
