//! Explorer module for trapezoid-motion.
//!
//! Turns control changes into redraws: the panel feeds the solver, the
//! adapter turns profiles into draw requests, the session ties them to a
//! [`Renderer`].

mod adapter;
mod panel;
mod session;

pub use adapter::{
    BoundaryMarker, Curve, CurvePoints, DrawRequest, LineStyle, MAX_SAMPLES_PER_PHASE,
};
pub use panel::{Control, ControlPanel};
pub use session::{Explorer, RecordingRenderer, RefreshOutcome, Renderer};
