//! Overlay geometry for map-based visualizations
//!
//! This module is organized into submodules:
//! - `defaults`: Named geometry constants
//! - `transform`: World→device coordinate transform with power-of-two padding
//! - `arrows`: Shaft and arrowhead geometry (wing-line and arc styles)
//! - `timeline`: Time-marker triangle with erase-before-redraw bookkeeping

pub mod arrows;
pub mod defaults;
pub mod timeline;
pub mod transform;

// Re-export commonly used items
pub use arrows::{ArcSpec, HeadStyle, OverlayShape, arc_head, arrow_head, shaft_with_head, velocity_angle, wing_segments};
pub use timeline::{CornerInset, MarkerRedraw, Timeline};
pub use transform::MapTransform;
