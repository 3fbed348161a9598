//! Strongly-typed geometric primitives for driftmark.
//!
//! Design goals:
//! - No raw `f64` rectangles in domain logic
//! - Degenerate geometry rejected at construction where possible
//! - World/device spaces never mixed without an explicit transform

use std::fmt;
use std::ops::Add;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// High bound does not exceed low bound
    Degenerate,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Degenerate => write!(f, "high bound does not exceed low bound"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A point in world (geographic) coordinates: longitude east, latitude north.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WorldPoint {
    pub long: f64,
    pub lat: f64,
}

impl WorldPoint {
    pub fn new(long: f64, lat: f64) -> Self {
        WorldPoint { long, lat }
    }
}

/// Axis-aligned rectangle in world coordinates (west/east/south/north bounds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldRect {
    pub lo_long: f64,
    pub hi_long: f64,
    pub lo_lat: f64,
    pub hi_lat: f64,
}

impl WorldRect {
    /// Create a WorldRect (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    pub const fn new(lo_long: f64, hi_long: f64, lo_lat: f64, hi_lat: f64) -> Self {
        WorldRect { lo_long, hi_long, lo_lat, hi_lat }
    }

    /// Create a WorldRect with validation (rejects NaN/infinite/degenerate).
    pub fn try_new(
        lo_long: f64,
        hi_long: f64,
        lo_lat: f64,
        hi_lat: f64,
    ) -> Result<Self, NumericError> {
        for v in [lo_long, hi_long, lo_lat, hi_lat] {
            if v.is_nan() {
                return Err(NumericError::NaN);
            }
            if v.is_infinite() {
                return Err(NumericError::Infinite);
            }
        }
        if hi_long <= lo_long || hi_lat <= lo_lat {
            return Err(NumericError::Degenerate);
        }
        Ok(WorldRect { lo_long, hi_long, lo_lat, hi_lat })
    }

    /// Longitudinal extent (east minus west).
    #[inline]
    pub fn width(&self) -> f64 {
        self.hi_long - self.lo_long
    }

    /// Latitudinal extent (north minus south).
    #[inline]
    pub fn height(&self) -> f64 {
        self.hi_lat - self.lo_lat
    }

    /// Whether a point lies within the bounds (inclusive).
    pub fn contains(&self, p: WorldPoint) -> bool {
        p.long >= self.lo_long
            && p.long <= self.hi_long
            && p.lat >= self.lo_lat
            && p.lat <= self.hi_lat
    }
}

/// A point in integer device pixels. Rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DevicePoint {
    pub x: i32,
    pub y: i32,
}

impl DevicePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        DevicePoint { x, y }
    }

    /// Lift into floating-point vector space for geometry math.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x as f64, self.y as f64)
    }

    /// Round a floating-point vector back to the pixel grid.
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        DevicePoint { x: v.x.round() as i32, y: v.y.round() as i32 }
    }
}

impl fmt::Display for DevicePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in integer device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DeviceRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DeviceRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        DeviceRect { left, top, right, bottom }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A secondary pixel shift applied after the world→device interpolation
/// (used by hosts for tiled/paged rendering).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PixelOffset {
    pub dx: i32,
    pub dy: i32,
}

impl PixelOffset {
    pub const ZERO: PixelOffset = PixelOffset { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        PixelOffset { dx, dy }
    }
}

impl Add<PixelOffset> for DevicePoint {
    type Output = DevicePoint;
    fn add(self, rhs: PixelOffset) -> DevicePoint {
        DevicePoint { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

/// A velocity sample in world units per time unit.
///
/// `u` points east, `v` points north. The vertical sign is flipped
/// internally before any screen-space angle derivation, since device
/// rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub u: f64,
    pub v: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { u: 0.0, v: 0.0 };

    pub const fn new(u: f64, v: f64) -> Self {
        Velocity { u, v }
    }

    /// Zero-magnitude samples have no direction and produce no arrowhead.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.u == 0.0 && self.v == 0.0
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.u * self.u + self.v * self.v).sqrt()
    }
}

/// A straight segment between two device points, ready for the host's
/// line primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: DevicePoint,
    pub to: DevicePoint,
}

impl Segment {
    pub const fn new(from: DevicePoint, to: DevicePoint) -> Self {
        Segment { from, to }
    }

    /// Euclidean length in pixels.
    pub fn length(&self) -> f64 {
        self.from.to_dvec2().distance(self.to.to_dvec2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== WorldRect tests ====================

    #[test]
    fn world_rect_try_new_valid() {
        assert!(WorldRect::try_new(0.0, 10.0, 0.0, 5.0).is_ok());
        assert!(WorldRect::try_new(-180.0, 180.0, -90.0, 90.0).is_ok());
    }

    #[test]
    fn world_rect_try_new_rejects_nan() {
        assert_eq!(
            WorldRect::try_new(f64::NAN, 10.0, 0.0, 5.0),
            Err(NumericError::NaN)
        );
    }

    #[test]
    fn world_rect_try_new_rejects_infinity() {
        assert_eq!(
            WorldRect::try_new(0.0, f64::INFINITY, 0.0, 5.0),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn world_rect_try_new_rejects_degenerate() {
        assert_eq!(
            WorldRect::try_new(0.0, 0.0, 0.0, 5.0),
            Err(NumericError::Degenerate)
        );
        assert_eq!(
            WorldRect::try_new(0.0, 10.0, 5.0, 5.0),
            Err(NumericError::Degenerate)
        );
        assert_eq!(
            WorldRect::try_new(10.0, 0.0, 0.0, 5.0),
            Err(NumericError::Degenerate)
        );
    }

    #[test]
    fn world_rect_extents() {
        let w = WorldRect::new(2.0, 12.0, -5.0, 5.0);
        assert_eq!(w.width(), 10.0);
        assert_eq!(w.height(), 10.0);
    }

    #[test]
    fn world_rect_contains() {
        let w = WorldRect::new(0.0, 10.0, 0.0, 5.0);
        assert!(w.contains(WorldPoint::new(5.0, 2.5)));
        assert!(w.contains(WorldPoint::new(0.0, 0.0)));
        assert!(w.contains(WorldPoint::new(10.0, 5.0)));
        assert!(!w.contains(WorldPoint::new(10.1, 2.5)));
        assert!(!w.contains(WorldPoint::new(5.0, -0.1)));
    }

    // ==================== DevicePoint tests ====================

    #[test]
    fn device_point_dvec2_round_trip() {
        let p = DevicePoint::new(3, -7);
        assert_eq!(DevicePoint::from_dvec2(p.to_dvec2()), p);
    }

    #[test]
    fn device_point_from_dvec2_rounds_to_nearest() {
        assert_eq!(DevicePoint::from_dvec2(dvec2(1.4, 2.6)), DevicePoint::new(1, 3));
        assert_eq!(DevicePoint::from_dvec2(dvec2(-1.5, 0.0)), DevicePoint::new(-2, 0));
    }

    #[test]
    fn device_point_plus_offset() {
        let p = DevicePoint::new(10, 20) + PixelOffset::new(-3, 4);
        assert_eq!(p, DevicePoint::new(7, 24));
    }

    // ==================== DeviceRect tests ====================

    #[test]
    fn device_rect_extents() {
        let r = DeviceRect::new(10, 20, 110, 70);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
    }

    // ==================== Velocity tests ====================

    #[test]
    fn velocity_zero_detection() {
        assert!(Velocity::ZERO.is_zero());
        assert!(!Velocity::new(0.0, 0.001).is_zero());
        assert!(!Velocity::new(-0.001, 0.0).is_zero());
    }

    #[test]
    fn velocity_magnitude() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
    }

    // ==================== Segment tests ====================

    #[test]
    fn segment_length() {
        let s = Segment::new(DevicePoint::new(0, 0), DevicePoint::new(3, 4));
        assert!((s.length() - 5.0).abs() < 1e-12);
    }
}
