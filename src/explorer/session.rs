//! Explorer session: the single "parameters changed" handler.
//!
//! Owns the control panel and the last valid profile, and drives a
//! [`Renderer`] with full-replace draw requests.

use core::fmt::{Debug, Write};

use super::adapter::DrawRequest;
use super::panel::ControlPanel;
use crate::config::{validate_config, ExplorerConfig};
use crate::error::{Error, Result};
use crate::motion::{MotionProfile, Parameter};

/// Plotting collaborator.
///
/// Every call replaces whatever was drawn before.
pub trait Renderer {
    /// Error reported by the backend.
    type Error: Debug;

    /// Draw a request, replacing the current view.
    fn draw(&mut self, request: &DrawRequest) -> core::result::Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn draw(&mut self, request: &DrawRequest) -> core::result::Result<(), Self::Error> {
        (**self).draw(request)
    }
}

/// Renderer that keeps the last request in memory.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    last: Option<DrawRequest>,
    draws: usize,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last request drawn.
    pub fn last(&self) -> Option<&DrawRequest> {
        self.last.as_ref()
    }

    /// Number of draws so far.
    pub fn draw_count(&self) -> usize {
        self.draws
    }
}

impl Renderer for RecordingRenderer {
    type Error = core::convert::Infallible;

    fn draw(&mut self, request: &DrawRequest) -> core::result::Result<(), Self::Error> {
        self.last = Some(request.clone());
        self.draws += 1;
        Ok(())
    }
}

/// Result of handling a parameter change.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// A new profile was solved and drawn.
    Redrawn,
    /// The new inputs were invalid; the last valid profile was kept and redrawn.
    Retained(Error),
    /// The control value did not change, nothing was drawn.
    Unchanged,
}

/// Interactive exploration session.
///
/// # Example
///
/// ```rust
/// use trapezoid_motion::explorer::{Explorer, RecordingRenderer};
/// use trapezoid_motion::{ExplorerConfig, Parameter};
///
/// let mut explorer = Explorer::new(ExplorerConfig::default(), RecordingRenderer::new())?;
/// explorer.set_parameter(Parameter::Distance, 1.0)?;
///
/// assert!(explorer.profile().map_or(false, |p| p.is_degenerate()));
/// assert_eq!(explorer.renderer().draw_count(), 2);
/// # Ok::<(), trapezoid_motion::Error>(())
/// ```
#[derive(Debug)]
pub struct Explorer<R: Renderer> {
    config: ExplorerConfig,
    panel: ControlPanel,
    profile: Option<MotionProfile>,
    renderer: R,
}

impl<R: Renderer> Explorer<R> {
    /// Create a session and draw the initial profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the first draw fails.
    pub fn new(config: ExplorerConfig, renderer: R) -> Result<Self> {
        validate_config(&config)?;

        let panel = ControlPanel::new(&config.controls);
        let mut explorer = Self {
            config,
            panel,
            profile: None,
            renderer,
        };
        explorer.parameters_changed()?;
        Ok(explorer)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Get the control panel.
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Last valid profile, if any was solved.
    pub fn profile(&self) -> Option<&MotionProfile> {
        self.profile.as_ref()
    }

    /// Get the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consume the session, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Move one control and redraw if its value changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the control rejects the value or the draw fails.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f64) -> Result<RefreshOutcome> {
        if self.panel.set(parameter, value)? {
            self.parameters_changed()
        } else {
            Ok(RefreshOutcome::Unchanged)
        }
    }

    /// Return every control to its initial value and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw fails.
    pub fn reset(&mut self) -> Result<RefreshOutcome> {
        self.panel.reset();
        self.parameters_changed()
    }

    /// Handle a change of any control: solve, build, draw.
    ///
    /// Invalid inputs keep the previous profile on screen.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the renderer fails. Solver errors are
    /// reported through [`RefreshOutcome::Retained`].
    pub fn parameters_changed(&mut self) -> Result<RefreshOutcome> {
        let params = self.panel.parameters();

        let outcome = match MotionProfile::solve(params) {
            Ok(profile) => {
                debug!(
                    "redrawing: v_eff={} total={}",
                    profile.effective_max_velocity,
                    profile.total_duration()
                );
                self.profile = Some(profile);
                RefreshOutcome::Redrawn
            }
            Err(e) => {
                warn!("keeping last profile, solve failed");
                RefreshOutcome::Retained(e)
            }
        };

        if let Some(profile) = self.profile.as_ref() {
            let request = DrawRequest::build(profile, &self.config.view);
            self.renderer.draw(&request).map_err(render_error)?;
        }

        Ok(outcome)
    }
}

fn render_error<E: Debug>(e: E) -> Error {
    let mut msg = heapless::String::<128>::new();
    let _ = write!(msg, "{:?}", e);
    Error::Render(msg)
}
