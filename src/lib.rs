//! driftmark converts geographic ("world") coordinates into device
//! pixel coordinates and computes the screen-space geometry for
//! directional velocity arrows and a scrubber-style time marker.
//!
//! The crate emits geometry only — segments and arc specs in device
//! pixels — and leaves rasterization to the host's drawing backend.
//! A typical draw pass:
//!
//! 1. [`MapTransform::prepare`] once for the current view/device pair.
//! 2. [`overlay::arrows`] per velocity sample, handing the resulting
//!    segments (or arc spec) to the backend's line/arc primitive.
//! 3. [`Timeline::redraw`] whenever the time cursor moves, painting the
//!    returned erase segments in the background color first.
//!
//! ```
//! use driftmark::{
//!     DevicePoint, DeviceRect, MapTransform, PixelOffset, Velocity, WorldPoint, WorldRect,
//! };
//!
//! # fn main() -> Result<(), driftmark::TransformError> {
//! let transform = MapTransform::prepare(
//!     DeviceRect::new(0, 0, 100, 50),
//!     WorldRect::new(0.0, 10.0, 0.0, 5.0),
//!     PixelOffset::ZERO,
//! )?;
//!
//! let tail = transform.world_to_device(WorldPoint::new(5.0, 2.5));
//! let tip = DevicePoint::new(tail.x + 20, tail.y);
//! let wings = driftmark::wing_segments(tail, tip, Velocity::new(1.0, 0.0));
//! assert_eq!(wings.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod log;
pub mod overlay;
pub mod types;

pub use errors::{Axis, TimelineError, TransformError};
pub use overlay::{
    ArcSpec, CornerInset, HeadStyle, MapTransform, MarkerRedraw, OverlayShape, Timeline,
    arc_head, arrow_head, shaft_with_head, velocity_angle, wing_segments,
};
pub use types::{
    DevicePoint, DeviceRect, NumericError, PixelOffset, Segment, Velocity, WorldPoint, WorldRect,
};
