//! DOM pixel boxes projected into scene-space plane transforms.

use crate::config::WrapAxis;
use crate::viewport::{ScreenDimensions, ViewportDimensions};
use glam::Vec2;

/// Snapshot of an element's bounding box in CSS pixels, relative to the window.
///
/// Taken on startup and on every resize; not live-tracked in between.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Scale and centre of one plane in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneTransform {
    pub scale: Vec2,
    pub position: Vec2,
}

impl PlaneTransform {
    /// Coordinate along the wrap axis, oriented so that it grows while the
    /// scroll offset grows (items drift up, or to the left).
    #[inline]
    pub fn travel(&self, axis: WrapAxis) -> f32 {
        match axis {
            WrapAxis::Vertical => self.position.y,
            WrapAxis::Horizontal => -self.position.x,
        }
    }

    /// Half of the plane's extent along the wrap axis.
    #[inline]
    pub fn half_extent(&self, axis: WrapAxis) -> f32 {
        match axis {
            WrapAxis::Vertical => self.scale.y / 2.0,
            WrapAxis::Horizontal => self.scale.x / 2.0,
        }
    }
}

/// Project `bounds` into scene space.
///
/// Scene Y grows upward while DOM Y grows downward, hence the subtractions on
/// the vertical axis. `wrap_offset` shifts the plane against its direction of
/// travel along `axis`; it is read here and owned by the wrap controller.
///
/// `screen` must be valid (see [`ScreenDimensions::is_valid`]) and belong to the
/// same resize as `viewport`. Zero-sized bounds yield a zero-scale plane.
pub fn project(
    bounds: &ElementBounds,
    screen: ScreenDimensions,
    viewport: ViewportDimensions,
    scroll: Vec2,
    wrap_offset: f32,
    axis: WrapAxis,
) -> PlaneTransform {
    let scale = Vec2::new(
        viewport.width * bounds.width / screen.width,
        viewport.height * bounds.height / screen.height,
    );

    let mut x = -viewport.width / 2.0
        + scale.x / 2.0
        + (bounds.left - scroll.x) / screen.width * viewport.width;
    let mut y = viewport.height / 2.0
        - scale.y / 2.0
        - (bounds.top - scroll.y) / screen.height * viewport.height;

    match axis {
        WrapAxis::Vertical => y -= wrap_offset,
        WrapAxis::Horizontal => x += wrap_offset,
    }

    PlaneTransform {
        scale,
        position: Vec2::new(x, y),
    }
}

/// Scene-unit length of one full pass through the gallery along `axis`.
///
/// Prefers the gallery container's box; without one, falls back to the span
/// covered by the items themselves.
pub fn gallery_length(
    container: Option<&ElementBounds>,
    items: &[ElementBounds],
    screen: ScreenDimensions,
    viewport: ViewportDimensions,
    axis: WrapAxis,
) -> f32 {
    let (pixels, screen_px, viewport_units) = match axis {
        WrapAxis::Vertical => {
            let px = match container {
                Some(c) => c.height,
                None => span(items, |b| b.top, ElementBounds::bottom),
            };
            (px, screen.height, viewport.height)
        }
        WrapAxis::Horizontal => {
            let px = match container {
                Some(c) => c.width,
                None => span(items, |b| b.left, ElementBounds::right),
            };
            (px, screen.width, viewport.width)
        }
    };
    viewport_units * pixels / screen_px
}

fn span(
    items: &[ElementBounds],
    start: impl Fn(&ElementBounds) -> f32,
    end: impl Fn(&ElementBounds) -> f32,
) -> f32 {
    if items.is_empty() {
        return 0.0;
    }
    let lo = items.iter().map(&start).fold(f32::INFINITY, f32::min);
    let hi = items.iter().map(&end).fold(f32::NEG_INFINITY, f32::max);
    (hi - lo).max(0.0)
}
