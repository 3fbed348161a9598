//! World→device coordinate transform with power-of-two extent padding.
//!
//! A `MapTransform` is prepared once per draw pass and consulted for
//! every overlay point drawn during that pass. Padding the device
//! extents to powers of two keeps the backing store alignment-friendly;
//! the world bounds are stretched by the same ratio so pixels-per-world-
//! unit stays constant across the padded region. The padded region is
//! never drawn into.

use crate::errors::{Axis, TransformError};
use crate::log::debug;
use crate::types::{DevicePoint, DeviceRect, PixelOffset, WorldPoint, WorldRect};

/// The active mapping between a world rectangle and a device rectangle.
///
/// Prepared via [`MapTransform::prepare`]; superseded by the next
/// prepare call whenever the view rectangle or world window changes.
/// The state is not incrementally updatable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapTransform {
    /// Device rectangle as originally requested (pre-padding).
    device: DeviceRect,
    /// Device rectangle with extents padded to powers of two.
    padded_device: DeviceRect,
    /// World rectangle stretched by the same ratios as the padding.
    padded_world: WorldRect,
    /// Secondary pixel shift applied to every mapped point.
    offset: PixelOffset,
}

/// Smallest power of two >= `extent`, searched from 2 upward by
/// doubling. Extents of 1 therefore still pad to 2.
fn pad_extent(extent: i32) -> i64 {
    let extent = extent as i64;
    let mut padded: i64 = 2;
    while padded < extent {
        padded <<= 1;
    }
    padded
}

impl MapTransform {
    /// Establish the transform for a draw pass.
    ///
    /// Fails with [`TransformError::InvalidDeviceExtent`] when the
    /// device rectangle has non-positive width or height, and with the
    /// world-side variants for degenerate or non-finite world bounds.
    pub fn prepare(
        device: DeviceRect,
        world: WorldRect,
        offset: PixelOffset,
    ) -> Result<MapTransform, TransformError> {
        let w = device.width();
        let h = device.height();
        if w <= 0 {
            return Err(TransformError::InvalidDeviceExtent { axis: Axis::Horizontal, extent: w });
        }
        if h <= 0 {
            return Err(TransformError::InvalidDeviceExtent { axis: Axis::Vertical, extent: h });
        }

        for bound in [world.lo_long, world.hi_long, world.lo_lat, world.hi_lat] {
            if !bound.is_finite() {
                return Err(TransformError::InvalidBounds);
            }
        }
        if world.width() <= 0.0 {
            return Err(TransformError::InvalidWorldExtent {
                axis: Axis::Horizontal,
                extent: world.width(),
            });
        }
        if world.height() <= 0.0 {
            return Err(TransformError::InvalidWorldExtent {
                axis: Axis::Vertical,
                extent: world.height(),
            });
        }

        let pw = pad_extent(w);
        let ph = pad_extent(h);
        let ratio_x = pw as f64 / w as f64;
        let ratio_y = ph as f64 / h as f64;

        let padded_device = DeviceRect::new(
            device.left,
            device.top,
            device.left + pw as i32,
            device.top + ph as i32,
        );
        let padded_world = WorldRect::new(
            world.lo_long,
            world.lo_long + world.width() * ratio_x,
            world.lo_lat,
            world.lo_lat + world.height() * ratio_y,
        );

        debug!(
            w,
            h,
            pw,
            ph,
            ratio_x,
            ratio_y,
            "prepared map transform"
        );

        Ok(MapTransform { device, padded_device, padded_world, offset })
    }

    /// Map a world point to device pixels.
    ///
    /// Longitude interpolates left-to-right against the padded bounds;
    /// latitude is flipped (device rows grow downward) and anchored so
    /// that the original world corners land on the original device
    /// corners. The pixel offset is applied last.
    pub fn world_to_device(&self, p: WorldPoint) -> DevicePoint {
        let x = self.device.left as f64 + (p.long - self.padded_world.lo_long) * self.scale_x();
        let y = self.device.bottom as f64 - (p.lat - self.padded_world.lo_lat) * self.scale_y();
        DevicePoint::new(x.round() as i32, y.round() as i32) + self.offset
    }

    /// Map a device point back to world coordinates (hit-testing).
    ///
    /// Total: a prepared transform guarantees non-zero extents.
    pub fn device_to_world(&self, p: DevicePoint) -> WorldPoint {
        let x = (p.x - self.offset.dx) as f64;
        let y = (p.y - self.offset.dy) as f64;
        WorldPoint::new(
            self.padded_world.lo_long + (x - self.device.left as f64) / self.scale_x(),
            self.padded_world.lo_lat + (self.device.bottom as f64 - y) / self.scale_y(),
        )
    }

    /// Pixels per world unit along the horizontal axis.
    fn scale_x(&self) -> f64 {
        self.padded_device.width() as f64 / self.padded_world.width()
    }

    /// Pixels per world unit along the vertical axis.
    fn scale_y(&self) -> f64 {
        self.padded_device.height() as f64 / self.padded_world.height()
    }

    /// The device rectangle as originally requested.
    pub fn device_rect(&self) -> DeviceRect {
        self.device
    }

    /// The device rectangle with power-of-two padded extents.
    pub fn padded_device_rect(&self) -> DeviceRect {
        self.padded_device
    }

    /// The world rectangle stretched by the padding ratios.
    pub fn padded_world_rect(&self) -> WorldRect {
        self.padded_world
    }

    /// The stored secondary pixel shift.
    pub fn offset(&self) -> PixelOffset {
        self.offset
    }
}
