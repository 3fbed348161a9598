//! Overlay geometry constants (values carried over from the original
//! map-overlay renderer; documented effect, never re-derived per call)

/// Half-size in pixels of the bounding box for the arc-style arrowhead.
pub const ARC_HEAD_RADIUS: i32 = 8;

/// Angular sweep in degrees of the arc-style arrowhead.
pub const ARC_HEAD_SWEEP_DEG: f64 = 40.0;

/// Degrees the arc start is skewed back from the perpendicular of the
/// direction angle (the arc is centered on the direction).
pub const ARC_HEAD_SKEW_DEG: f64 = 20.0;

/// Degrees each wing is swept back from the shaft direction.
pub const WING_HANG_DEG: f64 = 150.0;

/// Wing length as a fraction of shaft length for the velocity-derived head.
pub const HEAD_RATIO: f64 = 0.25;

/// Divisor applied to shaft length to get the endpoint-derived head length.
pub const HEAD_LEN_DIVISOR: f64 = 3.0;

/// Absolute cap in pixels on the endpoint-derived head length.
pub const HEAD_LEN_MAX: f64 = 10.0;

/// Half-width in pixels of the time-marker triangle's box.
pub const MARKER_HALF_WIDTH: i32 = 5;

/// Default pixel inset of the marker triangle's lower-right stops.
pub const MARKER_CORNER_INSET: i32 = 2;
