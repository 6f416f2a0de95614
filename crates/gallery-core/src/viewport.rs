//! Screen and scene-space dimensions.
//!
//! The camera looks down -Z at the focal plane z = 0. At that distance the
//! visible extent of the scene is the *viewport*, and one screen pixel maps to
//! `viewport.height / screen.height` scene units. Every other component reads
//! that factor from here, so the viewport must be recomputed whenever the
//! screen size or the field of view changes.

use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3};

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenDimensions {
    pub width: f32,
    pub height: f32,
}

impl ScreenDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A screen is usable for projection only when both sides are positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Visible extent of the focal plane in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportDimensions {
    pub width: f32,
    pub height: f32,
}

impl ViewportDimensions {
    /// Scene units per screen pixel.
    #[inline]
    pub fn pixel_scale(&self, screen: ScreenDimensions) -> f32 {
        self.height / screen.height
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Map a screen size and a vertical field of view to the viewport at `focal_distance`.
pub fn compute_viewport(
    screen: ScreenDimensions,
    fov_degrees: f32,
    focal_distance: f32,
) -> ViewportDimensions {
    let fov = fov_degrees.to_radians();
    let height = 2.0 * (fov / 2.0).tan() * focal_distance;
    let width = height * screen.width / screen.height;
    ViewportDimensions { width, height }
}

/// Right-handed perspective camera looking at the focal plane.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fov_degrees: f32, camera_z: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, camera_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fov_degrees,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Distance from the eye to the plane the gallery is laid out on.
    pub fn focal_distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Update the aspect ratio for `screen` and return the matching viewport.
    pub fn fit(&mut self, screen: ScreenDimensions) -> ViewportDimensions {
        self.aspect = screen.aspect();
        compute_viewport(screen, self.fov_degrees, self.focal_distance())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
