//! Example: Exploring trapezoidal profiles with a gnuplot renderer.
//!
//! This example demonstrates how to:
//! - Start an explorer session from the reference configuration
//! - Move controls the way a user drags sliders
//! - Render each full-replace draw request to a PNG with gnuplot
//!
//! Run with: `cargo run --example profile_plot` (requires gnuplot installed)

use std::path::PathBuf;

use gnuplot::{AxesCommon, Caption, DashType, Figure, Fix, PlotOption};
use trapezoid_motion::{
    explorer::{DrawRequest, Explorer, LineStyle, RefreshOutcome, Renderer},
    ExplorerConfig, Parameter,
};

/// Writes every draw request to `<dir>/profile_<n>.png`.
struct GnuplotRenderer {
    dir: PathBuf,
    frame: usize,
}

impl Renderer for GnuplotRenderer {
    type Error = String;

    fn draw(&mut self, request: &DrawRequest) -> Result<(), Self::Error> {
        let mut fg = Figure::new();
        {
            let axes = fg.axes2d();
            axes.set_title(request.title.as_str(), &[]);
            axes.set_x_label(request.x_label.as_str(), &[]);
            axes.set_y_label(request.y_label.as_str(), &[]);
            axes.set_x_range(Fix(request.time_axis.min), Fix(request.time_axis.max));
            axes.set_y_range(Fix(request.distance_axis.min), Fix(request.distance_axis.max));

            for marker in &request.markers {
                let dash = match marker.style {
                    LineStyle::Dashed => DashType::Dash,
                    LineStyle::Solid => DashType::Solid,
                };
                axes.lines(
                    [marker.time_start, marker.time_end],
                    [marker.position, marker.position],
                    &[PlotOption::LineStyle(dash)],
                );
            }

            for curve in &request.curves {
                let caption = format!("{:?}", curve.phase);
                axes.lines(curve.times(), curve.positions(), &[Caption(caption.as_str())]);
            }
        }

        let path = self.dir.join(format!("profile_{}.png", self.frame));
        self.frame += 1;
        fg.save_to_png(&path, 800, 500)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        println!("  wrote {}", path.display());
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Trapezoidal Profile Explorer ===\n");

    let renderer = GnuplotRenderer {
        dir: std::env::temp_dir(),
        frame: 0,
    };
    let mut explorer = Explorer::new(ExplorerConfig::default(), renderer)?;
    report(&explorer);

    // Drag the sliders: faster cruise, then a short move that clamps it
    let moves = [
        (Parameter::MaxVelocity, 3.0),
        (Parameter::MaxDeceleration, 0.5),
        (Parameter::Distance, 2.0),
        (Parameter::MaxVelocity, 5.0),
    ];

    for (parameter, value) in moves {
        println!("\nSet {} = {}", parameter, value);
        match explorer.set_parameter(parameter, value)? {
            RefreshOutcome::Redrawn => report(&explorer),
            RefreshOutcome::Retained(e) => println!("  kept previous profile: {}", e),
            RefreshOutcome::Unchanged => println!("  unchanged"),
        }
    }

    Ok(())
}

fn report<R: Renderer>(explorer: &Explorer<R>) {
    if let Some(profile) = explorer.profile() {
        println!(
            "  v_eff = {:.3} (ceiling {:.3}){}",
            profile.effective_max_velocity,
            profile.velocity_ceiling(),
            if profile.is_degenerate() { ", no cruise" } else { "" }
        );
        println!(
            "  accel: {:.3} in {:.3}s, cruise: {:.3} in {:.3}s, decel: {:.3} in {:.3}s",
            profile.accel_distance,
            profile.accel_duration,
            profile.cruise_distance,
            profile.cruise_duration,
            profile.decel_distance,
            profile.decel_duration
        );
    }
}
