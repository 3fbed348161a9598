//! Scrubber-style time marker with erase-before-redraw bookkeeping.
//!
//! The marker is an upward-pointing triangle whose horizontal position
//! encodes a time ratio along a fixed timeline rectangle. Redrawing is
//! incremental: the caller gets the previous marker's segments back (to
//! paint in the background color) alongside the new marker's segments,
//! so only two small triangles are touched per update.

use crate::errors::TimelineError;
use crate::log::debug;
use crate::types::{DevicePoint, DeviceRect, Segment};

use super::defaults;

/// Pixel inset of the triangle's lower-right stops.
///
/// The lower corner pixels are deliberately left out of the triangle, a
/// cosmetic concession that historically differed per platform. The
/// default is the larger, 2-pixel inset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerInset {
    pub right: i32,
    pub bottom: i32,
}

impl Default for CornerInset {
    fn default() -> Self {
        CornerInset {
            right: defaults::MARKER_CORNER_INSET,
            bottom: defaults::MARKER_CORNER_INSET,
        }
    }
}

/// One marker update: erase the old triangle (background color), draw
/// the new one (foreground color), and sync dependent UI off `ratio`.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerRedraw {
    /// Previous marker's segments, absent until a marker has been drawn
    /// or when erasing was not requested.
    pub erase: Option<[Segment; 3]>,
    /// New marker's segments.
    pub draw: [Segment; 3],
    /// Normalized `[0,1]` position of the marker along its track.
    pub ratio: f64,
}

/// Time-marker state for one timeline view.
///
/// Owns the retained previous position the erase contract needs; lives
/// as long as the view does. Callers serialize redraws (single-threaded
/// UI loop); nothing here suspends or blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    rect: DeviceRect,
    inset: CornerInset,
    half_width: i32,
    previous: Option<i32>,
}

impl Timeline {
    /// Create the marker state for a timeline rectangle.
    ///
    /// A zero-width rectangle would make the ratio computation divide
    /// by zero, so it is rejected here; `redraw` is total afterwards.
    pub fn new(rect: DeviceRect, inset: CornerInset) -> Result<Timeline, TimelineError> {
        if rect.right == rect.left {
            return Err(TimelineError::DegenerateTimeline { edge: rect.left });
        }
        if rect.right < rect.left {
            return Err(TimelineError::InvertedTimeline { left: rect.left, right: rect.right });
        }
        Ok(Timeline {
            rect,
            inset,
            half_width: defaults::MARKER_HALF_WIDTH,
            previous: None,
        })
    }

    /// Override the marker triangle's half-width in pixels.
    pub fn with_marker_half_width(mut self, half_width: i32) -> Timeline {
        self.half_width = half_width;
        self
    }

    /// Whether a marker has been drawn yet (erase has something to target).
    pub fn has_marker(&self) -> bool {
        self.previous.is_some()
    }

    /// Ratio for the last drawn marker position, if any.
    pub fn ratio(&self) -> Option<f64> {
        self.previous.map(|h| self.ratio_at(h))
    }

    /// Compute one marker update.
    ///
    /// `position` is clamped into `[left+1, right]` before everything
    /// else, so out-of-range scrub positions pin the marker to the
    /// track ends. With `erase_previous` set, the segments of the last
    /// drawn marker come back for background-color repainting; on a
    /// fresh timeline there is nothing to erase and `erase` stays
    /// `None`. State is updated only after the new geometry exists.
    pub fn redraw(&mut self, position: i32, erase_previous: bool) -> MarkerRedraw {
        let clamped = position.clamp(self.rect.left + 1, self.rect.right);

        let erase = if erase_previous {
            self.previous.map(|h| self.marker_segments(h))
        } else {
            None
        };

        let draw = self.marker_segments(clamped);
        self.previous = Some(clamped);
        let ratio = self.ratio_at(clamped);

        debug!(position, clamped, ratio, "time marker redraw");

        MarkerRedraw { erase, draw, ratio }
    }

    fn ratio_at(&self, h: i32) -> f64 {
        (h - self.rect.left) as f64 / (self.rect.right - self.rect.left) as f64
    }

    /// Bounding box of the marker triangle centered at `h`, spanning
    /// the timeline rect's vertical extent.
    fn marker_rect(&self, h: i32) -> DeviceRect {
        DeviceRect::new(h - self.half_width, self.rect.top, h + self.half_width, self.rect.bottom)
    }

    /// The three marker segments: bottom edge, left-rising edge to the
    /// apex, apex back down to the bottom-right stop. The lower corner
    /// pixels stay outside all three.
    fn marker_segments(&self, h: i32) -> [Segment; 3] {
        let tri = self.marker_rect(h);
        let mid = (tri.left + tri.right) / 2;
        let right_stop = tri.right - self.inset.right;
        let bottom_stop = tri.bottom - self.inset.bottom;

        [
            Segment::new(
                DevicePoint::new(tri.left + 1, tri.bottom - 1),
                DevicePoint::new(right_stop, tri.bottom - 1),
            ),
            Segment::new(
                DevicePoint::new(tri.left + 1, tri.bottom - 2),
                DevicePoint::new(mid, tri.top),
            ),
            Segment::new(
                DevicePoint::new(mid, tri.top),
                DevicePoint::new(right_stop, bottom_stop),
            ),
        ]
    }
}
