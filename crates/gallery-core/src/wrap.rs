//! Infinite-loop wrapping.
//!
//! An item that leaves the viewport on the side it is travelling toward is
//! moved by one full gallery length to the opposite end. Offsets only ever
//! change by whole gallery lengths, so wrapping never accumulates drift.

use crate::bounds::PlaneTransform;
use crate::config::WrapAxis;
use crate::constants::MAX_WRAPS_PER_FRAME;
use crate::scroll::Direction;
use crate::viewport::ViewportDimensions;

/// Where an item sits relative to the viewport along the wrap axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapState {
    #[default]
    InView,
    /// Fully past the trailing edge (below, or right of, the viewport).
    BeforeViewport,
    /// Fully past the leading edge (above, or left of, the viewport).
    AfterViewport,
}

/// Classify an item by its travel coordinate `t` and half-extent `h` against
/// the viewport half-extent `v`.
#[inline]
pub fn classify(t: f32, h: f32, v: f32) -> WrapState {
    if t + h < -v {
        WrapState::BeforeViewport
    } else if t - h > v {
        WrapState::AfterViewport
    } else {
        WrapState::InView
    }
}

/// One applied wrap correction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapEvent {
    pub item: usize,
    /// Change applied to the item's wrap offset (±gallery length).
    pub delta: f32,
}

/// Per-item wrap bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WrapController {
    pub offset: f32,
    pub state: WrapState,
}

impl WrapController {
    /// Update the state from `transform` and wrap if the scroll direction
    /// agrees with the edge the item left through.
    ///
    /// `transform` must have been projected with the current `self.offset`.
    /// Returns the total change applied to the offset (0 when nothing wrapped).
    /// Items that are out of view on the side they are moving away from are
    /// about to re-enter, so they are left alone.
    pub fn resolve(
        &mut self,
        transform: &PlaneTransform,
        viewport: ViewportDimensions,
        direction: Direction,
        gallery_length: f32,
        axis: WrapAxis,
    ) -> f32 {
        let h = transform.half_extent(axis);
        let v = match axis {
            WrapAxis::Vertical => viewport.height / 2.0,
            WrapAxis::Horizontal => viewport.width / 2.0,
        };
        // Travel coordinate with this item's offset taken back out.
        let unwrapped = transform.travel(axis) + self.offset;

        self.state = classify(transform.travel(axis), h, v);
        if !(gallery_length > 0.0 && gallery_length.is_finite()) {
            return 0.0;
        }

        let start = self.offset;
        let mut wraps = 0;
        loop {
            let delta = match (direction, self.state) {
                (Direction::Up, WrapState::BeforeViewport) => -gallery_length,
                (Direction::Down, WrapState::AfterViewport) => gallery_length,
                _ => break,
            };
            if wraps == MAX_WRAPS_PER_FRAME {
                log::warn!("[wrap] gave up after {wraps} corrections in one frame");
                break;
            }
            self.offset += delta;
            wraps += 1;
            self.state = classify(unwrapped - self.offset, h, v);
        }
        if wraps > 0 {
            self.state = WrapState::InView;
        }
        self.offset - start
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.state = WrapState::InView;
    }
}
