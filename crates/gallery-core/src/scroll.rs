//! Smoothed scroll offset.
//!
//! Input moves `target`; every frame `current` eases toward it by a fixed
//! fraction. Because the lerp factor lies in (0, 1] and the target is fixed
//! between inputs, `current` approaches monotonically and never overshoots.

use crate::config::{GalleryConfig, ScrollMode};

/// Direction of the most recent scroll motion.
///
/// `Down` means the scroll offset is increasing (content drifts up, or left
/// on a horizontal gallery).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Scroll input already reduced to the scroll axis (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollInput {
    Wheel(f32),
    Press(f32),
    Move(f32),
    Release,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub pressed: bool,
    /// Pointer coordinate captured at press start.
    pub anchor: f32,
    pub target_at_press: f32,
}

/// Values the rest of the frame reads after [`ScrollState::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub current: f32,
    pub last: f32,
    pub direction: Direction,
}

impl ScrollFrame {
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.current - self.last
    }
}

#[derive(Clone, Debug)]
pub struct ScrollState {
    pub target: f32,
    pub current: f32,
    pub last: f32,
    pub ease: f32,
    pub direction: Direction,
    pub mode: ScrollMode,
    pub wheel_sensitivity: f32,
    pub drag_sensitivity: f32,
    pub autoplay_speed: f32,
    pub drag: DragState,
}

impl ScrollState {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            last: 0.0,
            ease: config.ease,
            direction: Direction::default(),
            mode: config.scroll_mode,
            wheel_sensitivity: config.wheel_sensitivity,
            drag_sensitivity: config.drag_sensitivity,
            autoplay_speed: config.autoplay_speed,
            drag: DragState::default(),
        }
    }

    pub fn integrate(&mut self, input: ScrollInput) {
        match input {
            ScrollInput::Wheel(delta) => {
                if delta.is_finite() {
                    self.target += delta * self.wheel_sensitivity;
                }
            }
            ScrollInput::Press(at) => {
                self.drag = DragState {
                    pressed: true,
                    anchor: at,
                    target_at_press: self.target,
                };
            }
            ScrollInput::Move(at) => {
                if self.drag.pressed {
                    let distance = self.drag.anchor - at;
                    self.target = self.drag.target_at_press + distance * self.drag_sensitivity;
                }
            }
            ScrollInput::Release => {
                self.drag.pressed = false;
            }
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> ScrollFrame {
        self.last = self.current;

        if self.mode == ScrollMode::Autoplay && !self.drag.pressed {
            self.target += self.autoplay_speed * self.direction.sign();
        }

        self.current = lerp(self.current, self.target, self.ease);

        if self.current > self.last {
            self.direction = Direction::Down;
        } else if self.current < self.last {
            self.direction = Direction::Up;
        }

        self.frame()
    }

    pub fn frame(&self) -> ScrollFrame {
        ScrollFrame {
            current: self.current,
            last: self.last,
            direction: self.direction,
        }
    }

    /// Shift every scroll value by the whole number of `period`s nearest to
    /// `current`, leaving velocity, direction and the drag anchor intact.
    /// Returns the shift that was subtracted.
    pub fn rebase(&mut self, period: f32) -> f32 {
        if !(period > 0.0 && period.is_finite()) {
            return 0.0;
        }
        let shift = (self.current / period).round() * period;
        if shift == 0.0 {
            return 0.0;
        }
        self.target -= shift;
        self.current -= shift;
        self.last -= shift;
        self.drag.target_at_press -= shift;
        shift
    }

    pub fn is_pressed(&self) -> bool {
        self.drag.pressed
    }

    pub fn set_mode(&mut self, mode: ScrollMode) {
        if self.mode != mode {
            log::info!("[scroll] mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
