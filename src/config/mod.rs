//! Configuration module for trapezoid-motion.
//!
//! Provides control bounds and plot layout for the explorer, with the
//! reference configuration as the default and TOML loading (with `std`).

mod controls;
mod explorer;
#[cfg(feature = "std")]
mod loader;
mod validation;
mod view;

pub use controls::{BoundPolicy, ControlConfig, ControlSet};
pub use explorer::ExplorerConfig;
pub use validation::validate_config;
pub use view::{AxisRange, ViewConfig};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
