use crate::config::ScrollMode;
use crate::constants::{WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_HEIGHT_PX};
use glam::Vec2;

/// Unit of a raw wheel delta, mirroring `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => WheelDeltaMode::Line,
            2 => WheelDeltaMode::Page,
            _ => WheelDeltaMode::Pixel,
        }
    }
}

/// Convert a raw wheel delta to pixels so every device scrolls at a comparable rate.
#[inline]
pub fn normalize_wheel(delta: f32, mode: WheelDeltaMode) -> f32 {
    if !delta.is_finite() {
        return 0.0;
    }
    match mode {
        WheelDeltaMode::Pixel => delta,
        WheelDeltaMode::Line => delta * WHEEL_LINE_HEIGHT_PX,
        WheelDeltaMode::Page => delta * WHEEL_PAGE_HEIGHT_PX,
    }
}

/// Events the host feeds into the gallery. Positions are window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Normalized wheel delta in pixels.
    Wheel(f32),
    DragStart(Vec2),
    DragMove(Vec2),
    DragEnd,
    /// Window or layout changed; bounds must be re-read.
    Resize,
    SetMode(ScrollMode),
    ToggleMode,
}
