//! Seams to the host: layout queries and the renderer.
//!
//! The core never touches the DOM, the window or the GPU directly; front-ends
//! implement these traits over `web-sys`, winit and wgpu.

use crate::bounds::{ElementBounds, PlaneTransform};
use crate::viewport::{Camera, ScreenDimensions};
use glam::Vec2;

/// Read-only view of the page layout.
pub trait LayoutSource {
    fn window_size(&self) -> ScreenDimensions;
    /// Current boxes of the tracked elements, in gallery order.
    fn item_bounds(&self) -> Vec<ElementBounds>;
    /// Box of the element enclosing the whole gallery, if there is one.
    fn gallery_bounds(&self) -> Option<ElementBounds>;
}

/// Geometry request for a new plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneFootprint {
    pub index: usize,
    /// Subdivisions per side; the vertex bend needs more than one.
    pub segments: u32,
}

/// Natural pixel size of a decoded image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageInfo {
    pub natural_width: f32,
    pub natural_height: f32,
}

impl ImageInfo {
    pub fn new(natural_width: f32, natural_height: f32) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.natural_width, self.natural_height)
    }
}

/// Per-plane shader inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShaderParam {
    /// Plane scale in scene units, for cover-fit UVs.
    PlaneSize(Vec2),
    /// Natural image size in pixels; zero until the texture arrives.
    ImageSize(Vec2),
    ViewportSize(Vec2),
    /// Scroll-velocity bend amount.
    Strength(f32),
}

impl ShaderParam {
    pub fn name(&self) -> &'static str {
        match self {
            ShaderParam::PlaneSize(_) => "u_plane_size",
            ShaderParam::ImageSize(_) => "u_image_size",
            ShaderParam::ViewportSize(_) => "u_viewport_size",
            ShaderParam::Strength(_) => "u_strength",
        }
    }
}

/// Rendering collaborator owning meshes, textures and the frame submission.
pub trait PlaneRenderer {
    type Handle: Copy;
    type Texture;
    type Error: std::fmt::Debug;

    fn create_plane(&mut self, footprint: PlaneFootprint) -> Self::Handle;
    fn set_transform(&mut self, handle: Self::Handle, transform: &PlaneTransform);
    fn set_shader_parameter(&mut self, handle: Self::Handle, param: ShaderParam);
    /// Swap in a loaded texture; planes draw a placeholder until then.
    fn set_texture(&mut self, handle: Self::Handle, texture: Self::Texture);
    fn render_frame(&mut self, camera: &Camera) -> Result<(), Self::Error>;
}
