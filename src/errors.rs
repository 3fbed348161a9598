//! Error types with diagnostics using miette
//!
//! Invalid geometry is detected locally at the point of computation;
//! nothing is retried and no shared state is updated on failure.

use miette::Diagnostic;
use thiserror::Error;

/// Which axis of a rectangle failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

// ============================================================================
// Transform Errors
// ============================================================================

/// Errors that occur while preparing the world→device transform
#[derive(Error, Diagnostic, Debug)]
pub enum TransformError {
    #[error("invalid device extent: {axis} span is {extent}")]
    #[diagnostic(
        code(driftmark::transform::invalid_device_extent),
        help("the device rectangle must have positive width and height")
    )]
    InvalidDeviceExtent { axis: Axis, extent: i32 },

    #[error("invalid world extent: {axis} span is {extent}")]
    #[diagnostic(
        code(driftmark::transform::invalid_world_extent),
        help("the world rectangle must have positive width and height")
    )]
    InvalidWorldExtent { axis: Axis, extent: f64 },

    #[error("infinite or NaN in world bounds")]
    #[diagnostic(code(driftmark::transform::invalid_bounds))]
    InvalidBounds,
}

// ============================================================================
// Timeline Errors
// ============================================================================

/// Errors that occur while constructing the time-marker state
#[derive(Error, Diagnostic, Debug)]
pub enum TimelineError {
    #[error("degenerate timeline: left and right edges coincide at {edge}")]
    #[diagnostic(
        code(driftmark::timeline::degenerate),
        help("the timeline rectangle needs a positive horizontal span for ratio computation")
    )]
    DegenerateTimeline { edge: i32 },

    #[error("inverted timeline: right edge {right} is left of left edge {left}")]
    #[diagnostic(code(driftmark::timeline::inverted))]
    InvertedTimeline { left: i32, right: i32 },
}
