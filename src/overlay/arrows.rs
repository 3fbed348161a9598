//! Arrow geometry: shafts, wing-line arrowheads, and arc arrowheads.
//!
//! Everything here operates on points already in device space; use
//! [`MapTransform`](super::transform::MapTransform) to get there. The
//! functions return geometry for the host backend to rasterize, never
//! drawing anything themselves.
//!
//! Two arrowhead styles exist for the same direction angle: two wing
//! segments swept back from the tip, or a filled arc centered on the
//! tip. Both are valid renderings; hosts pick one, not both.

use glam::{DVec2, dvec2};

use crate::types::{DevicePoint, DeviceRect, Segment, Velocity};

use super::defaults;

/// A filled-arc arrowhead: the host paints `sweep_deg` degrees of arc
/// starting at `start_deg`, inside `bounds`.
///
/// Angles follow the host arc primitive's convention (degrees,
/// clockwise-positive on a row-down device).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub bounds: DeviceRect,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

/// Backend-agnostic overlay geometry: either straight segments for a
/// line primitive or an arc spec for a filled-arc primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayShape {
    Segments(Vec<Segment>),
    Arc(ArcSpec),
}

/// Which arrowhead rendering the host wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadStyle {
    /// Two wing segments swept back from the tip.
    Wings,
    /// A filled arc centered on the tip.
    Arc,
}

/// Direction angle in radians of a velocity sample, in screen space.
///
/// The vertical component is negated first (device rows grow downward,
/// `v` grows northward). The quadrant adjustment reproduces the
/// historical sequence exactly: a negative raw arctangent is wrapped by
/// a full turn before the half-turn for `u < 0`, so some quadrants
/// yield angles above 2π. `sin`/`cos` are periodic, so downstream
/// geometry is unaffected; callers comparing angles should reduce
/// modulo 2π.
///
/// A zero vector has undefined direction and reports 0.
pub fn velocity_angle(velocity: Velocity) -> f64 {
    let u = velocity.u;
    let v = -velocity.v;

    if u == 0.0 {
        return if v == 0.0 {
            0.0
        } else if v > 0.0 {
            90f64.to_radians()
        } else {
            270f64.to_radians()
        };
    }

    let mut angle = (v / u).atan();
    if angle < 0.0 {
        angle += 360f64.to_radians();
    }
    if u < 0.0 {
        angle += 180f64.to_radians();
    }
    angle
}

/// Wing segments for an arrowhead at `tip`, direction taken from
/// `velocity`, wing length from the `tail`→`tip` shaft.
///
/// Each wing runs from the tip to a point rotated
/// [`WING_HANG_DEG`](defaults::WING_HANG_DEG) off the direction angle
/// and scaled by [`HEAD_RATIO`](defaults::HEAD_RATIO) of the shaft
/// length. Zero-magnitude velocity is an expected, frequent input: it
/// yields no geometry, not an error.
pub fn wing_segments(tail: DevicePoint, tip: DevicePoint, velocity: Velocity) -> Vec<Segment> {
    if velocity.is_zero() {
        return Vec::new();
    }

    let angle = velocity_angle(velocity);
    let shaft_len = tip.to_dvec2().distance(tail.to_dvec2());
    let wing_len = shaft_len * defaults::HEAD_RATIO;
    let hang = defaults::WING_HANG_DEG.to_radians();

    [angle - hang, angle + hang]
        .into_iter()
        .map(|a| {
            let end = tip.to_dvec2() + dvec2(a.cos(), a.sin()) * wing_len;
            Segment::new(tip, DevicePoint::from_dvec2(end))
        })
        .collect()
}

/// Arc-style arrowhead at `tip`, direction taken from `velocity`.
///
/// A fixed-radius bounding box is centered on the tip; the arc sweeps
/// [`ARC_HEAD_SWEEP_DEG`](defaults::ARC_HEAD_SWEEP_DEG) degrees
/// starting at the direction angle offset by −(skew + 90°). Total:
/// a zero vector degenerates to the 0° direction.
pub fn arc_head(tip: DevicePoint, velocity: Velocity) -> ArcSpec {
    let r = defaults::ARC_HEAD_RADIUS;
    let bounds = DeviceRect::new(tip.x - r, tip.y - r, tip.x + r, tip.y + r);
    let angle_deg = f64::atan2(-velocity.v, velocity.u).to_degrees();
    ArcSpec {
        bounds,
        start_deg: angle_deg - (defaults::ARC_HEAD_SKEW_DEG + 90.0),
        sweep_deg: defaults::ARC_HEAD_SWEEP_DEG,
    }
}

/// Arrowhead at `tip` in the requested style, or `None` for a
/// zero-magnitude sample (callers skip head rendering entirely).
pub fn arrow_head(
    tail: DevicePoint,
    tip: DevicePoint,
    velocity: Velocity,
    style: HeadStyle,
) -> Option<OverlayShape> {
    if velocity.is_zero() {
        return None;
    }
    Some(match style {
        HeadStyle::Wings => OverlayShape::Segments(wing_segments(tail, tip, velocity)),
        HeadStyle::Arc => OverlayShape::Arc(arc_head(tip, velocity)),
    })
}

/// Self-contained arrow from two endpoints: shaft plus two wings.
///
/// Head length is a third of the shaft length, capped at
/// [`HEAD_LEN_MAX`](defaults::HEAD_LEN_MAX) pixels; head width is a
/// third of that. Wing endpoints offset from the tip along the reverse
/// shaft direction and the shaft perpendicular. Identical endpoints
/// degenerate to a single 1-pixel segment so the sample still leaves a
/// mark (and the length normalization never divides by zero).
pub fn shaft_with_head(from: DevicePoint, to: DevicePoint) -> Vec<Segment> {
    if from == to {
        let dot = DevicePoint::new(from.x + 1, from.y + 1);
        return vec![Segment::new(from, dot)];
    }

    let d: DVec2 = to.to_dvec2() - from.to_dvec2();
    let len = d.length();

    // Head length as a fraction of shaft length, so it can scale the
    // raw delta directly.
    let head_len = len / defaults::HEAD_LEN_DIVISOR;
    let head_frac = if head_len > defaults::HEAD_LEN_MAX {
        defaults::HEAD_LEN_MAX / len
    } else {
        head_len / len
    };
    let width_frac = head_frac / 3.0;

    let base = to.to_dvec2() - d * head_frac;
    let side = d * width_frac;

    vec![
        Segment::new(from, to),
        Segment::new(
            to,
            DevicePoint::from_dvec2(dvec2(base.x - side.y, base.y + side.x)),
        ),
        Segment::new(
            to,
            DevicePoint::from_dvec2(dvec2(base.x + side.y, base.y - side.x)),
        ),
    ]
}
