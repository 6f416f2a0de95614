use crate::constants::*;
use crate::error::GalleryError;
use std::fmt;
use std::str::FromStr;

/// How the scroll target moves when the user is not touching anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Target moves only from wheel and drag input.
    #[default]
    Driven,
    /// Target also advances by a constant speed every frame.
    Autoplay,
}

impl ScrollMode {
    pub fn toggled(self) -> Self {
        match self {
            ScrollMode::Driven => ScrollMode::Autoplay,
            ScrollMode::Autoplay => ScrollMode::Driven,
        }
    }
}

impl FromStr for ScrollMode {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driven" => Ok(ScrollMode::Driven),
            "autoplay" => Ok(ScrollMode::Autoplay),
            other => Err(GalleryError::UnknownScrollMode(other.to_string())),
        }
    }
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScrollMode::Driven => "driven",
            ScrollMode::Autoplay => "autoplay",
        })
    }
}

/// Axis along which the gallery scrolls and wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl FromStr for WrapAxis {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" | "y" => Ok(WrapAxis::Vertical),
            "horizontal" | "x" => Ok(WrapAxis::Horizontal),
            other => Err(GalleryError::UnknownWrapAxis(other.to_string())),
        }
    }
}

impl fmt::Display for WrapAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WrapAxis::Vertical => "vertical",
            WrapAxis::Horizontal => "horizontal",
        })
    }
}

/// Tunables for one gallery instance.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub scroll_mode: ScrollMode,
    pub wrap_axis: WrapAxis,
    pub ease: f32,
    pub wheel_sensitivity: f32,
    /// Not derived from device pixel ratio; tune per target device.
    pub drag_sensitivity: f32,
    pub autoplay_speed: f32,
    pub fov_degrees: f32,
    pub camera_z: f32,
    pub strength_factor: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scroll_mode: ScrollMode::Driven,
            wrap_axis: WrapAxis::Vertical,
            ease: SCROLL_EASE,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            drag_sensitivity: DRAG_SENSITIVITY,
            autoplay_speed: AUTOPLAY_SPEED,
            fov_degrees: FOV_DEGREES,
            camera_z: CAMERA_Z,
            strength_factor: STRENGTH_FACTOR,
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), GalleryError> {
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(GalleryError::InvalidEase(self.ease));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(GalleryError::InvalidFov(self.fov_degrees));
        }
        if !(self.camera_z > 0.0 && self.camera_z.is_finite()) {
            return Err(GalleryError::InvalidFocalDistance(self.camera_z));
        }
        for (name, value) in [
            ("wheel_sensitivity", self.wheel_sensitivity),
            ("drag_sensitivity", self.drag_sensitivity),
            ("autoplay_speed", self.autoplay_speed),
            ("strength_factor", self.strength_factor),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(GalleryError::InvalidSensitivity { name, value });
            }
        }
        Ok(())
    }
}
