// Shared fakes for host-side gallery tests: a fixed layout and a renderer
// that records everything the gallery pushes at it.

#![allow(dead_code)]

use gallery_core::*;

pub const EPS: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS * (1.0 + a.abs().max(b.abs()))
}

#[derive(Clone, Debug, Default)]
pub struct FakeLayout {
    pub screen: ScreenDimensions,
    pub items: Vec<ElementBounds>,
    pub container: Option<ElementBounds>,
}

impl FakeLayout {
    /// `count` items of `item_px` square stacked in one column, centred on a
    /// 1000x1000 screen, inside a container exactly as tall as the stack.
    pub fn column(count: usize, item_px: f32) -> Self {
        let items = (0..count)
            .map(|i| ElementBounds::new(i as f32 * item_px, 250.0, 500.0, item_px))
            .collect::<Vec<_>>();
        Self {
            screen: ScreenDimensions::new(1000.0, 1000.0),
            container: Some(ElementBounds::new(0.0, 250.0, 500.0, count as f32 * item_px)),
            items,
        }
    }
}

impl LayoutSource for FakeLayout {
    fn window_size(&self) -> ScreenDimensions {
        self.screen
    }

    fn item_bounds(&self) -> Vec<ElementBounds> {
        self.items.clone()
    }

    fn gallery_bounds(&self) -> Option<ElementBounds> {
        self.container
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub footprints: Vec<PlaneFootprint>,
    pub transforms: Vec<PlaneTransform>,
    pub params: Vec<Vec<ShaderParam>>,
    pub textures: Vec<Option<u32>>,
    pub frames: usize,
    pub fail_render: bool,
}

impl RecordingRenderer {
    pub fn last_param(&self, handle: usize, name: &str) -> Option<ShaderParam> {
        self.params[handle]
            .iter()
            .rev()
            .find(|p| p.name() == name)
            .copied()
    }
}

impl PlaneRenderer for RecordingRenderer {
    type Handle = usize;
    type Texture = u32;
    type Error = String;

    fn create_plane(&mut self, footprint: PlaneFootprint) -> usize {
        self.footprints.push(footprint);
        self.transforms.push(PlaneTransform::default());
        self.params.push(Vec::new());
        self.textures.push(None);
        self.footprints.len() - 1
    }

    fn set_transform(&mut self, handle: usize, transform: &PlaneTransform) {
        self.transforms[handle] = *transform;
    }

    fn set_shader_parameter(&mut self, handle: usize, param: ShaderParam) {
        self.params[handle].push(param);
    }

    fn set_texture(&mut self, handle: usize, texture: u32) {
        self.textures[handle] = Some(texture);
    }

    fn render_frame(&mut self, _camera: &Camera) -> Result<(), String> {
        self.frames += 1;
        if self.fail_render {
            Err("surface lost".to_string())
        } else {
            Ok(())
        }
    }
}

/// Config whose viewport is exactly 2x2 scene units on a square screen.
pub fn unit_config() -> GalleryConfig {
    GalleryConfig {
        fov_degrees: 90.0,
        camera_z: 1.0,
        ..GalleryConfig::default()
    }
}
