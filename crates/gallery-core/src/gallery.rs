//! Per-frame orchestration of scroll, projection and wrapping.

use crate::bounds::{gallery_length, project, ElementBounds, PlaneTransform};
use crate::collab::{ImageInfo, LayoutSource, PlaneFootprint, PlaneRenderer, ShaderParam};
use crate::config::{GalleryConfig, WrapAxis};
use crate::error::GalleryError;
use crate::input::InputEvent;
use crate::scroll::{ScrollFrame, ScrollInput, ScrollState};
use crate::viewport::{Camera, ScreenDimensions, ViewportDimensions};
use crate::wrap::{WrapController, WrapEvent};
use glam::Vec2;
use smallvec::SmallVec;

const PLANE_SEGMENTS: u32 = 16;

/// One tracked element and its plane.
#[derive(Clone, Debug)]
pub struct GalleryItem<H> {
    pub handle: H,
    pub bounds: ElementBounds,
    pub transform: PlaneTransform,
    pub wrap: WrapController,
    pub image: Option<ImageInfo>,
}

/// Dimensions shared by every item within one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub screen: ScreenDimensions,
    pub viewport: ViewportDimensions,
    pub gallery_length: f32,
    pub axis: WrapAxis,
}

impl FrameGeometry {
    /// Gallery length converted back to screen pixels along the wrap axis.
    pub fn length_px(&self) -> f32 {
        let (screen, viewport) = match self.axis {
            WrapAxis::Vertical => (self.screen.height, self.viewport.height),
            WrapAxis::Horizontal => (self.screen.width, self.viewport.width),
        };
        if viewport > 0.0 {
            self.gallery_length * screen / viewport
        } else {
            0.0
        }
    }

    /// Scroll offset as a 2D pixel vector along the wrap axis.
    #[inline]
    pub fn scroll_vector(&self, scroll: f32) -> Vec2 {
        match self.axis {
            WrapAxis::Vertical => Vec2::new(0.0, scroll),
            WrapAxis::Horizontal => Vec2::new(scroll, 0.0),
        }
    }
}

/// Project one item, wrap it if it left the viewport, and return the final
/// transform together with the offset change applied this frame.
pub fn step_item(
    bounds: &ElementBounds,
    wrap: &mut WrapController,
    scroll: &ScrollFrame,
    geometry: &FrameGeometry,
) -> (PlaneTransform, f32) {
    let scroll_px = geometry.scroll_vector(scroll.current);
    let projected = project(
        bounds,
        geometry.screen,
        geometry.viewport,
        scroll_px,
        wrap.offset,
        geometry.axis,
    );
    let delta = wrap.resolve(
        &projected,
        geometry.viewport,
        scroll.direction,
        geometry.gallery_length,
        geometry.axis,
    );
    if delta == 0.0 {
        return (projected, 0.0);
    }
    let wrapped = project(
        bounds,
        geometry.screen,
        geometry.viewport,
        scroll_px,
        wrap.offset,
        geometry.axis,
    );
    (wrapped, delta)
}

/// What happened during one [`GalleryLoop::frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub scroll: ScrollFrame,
    pub wraps: SmallVec<[WrapEvent; 4]>,
}

pub struct GalleryLoop<L: LayoutSource, R: PlaneRenderer> {
    config: GalleryConfig,
    layout: L,
    renderer: R,
    camera: Camera,
    screen: ScreenDimensions,
    viewport: ViewportDimensions,
    gallery_length: f32,
    scroll: ScrollState,
    items: Vec<GalleryItem<R::Handle>>,
}

impl<L: LayoutSource, R: PlaneRenderer> GalleryLoop<L, R> {
    pub fn new(config: GalleryConfig, layout: L, mut renderer: R) -> Result<Self, GalleryError> {
        config.validate()?;
        let camera = Camera::new(config.fov_degrees, config.camera_z);
        let scroll = ScrollState::new(&config);

        let items = layout
            .item_bounds()
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| {
                let handle = renderer.create_plane(PlaneFootprint {
                    index,
                    segments: PLANE_SEGMENTS,
                });
                renderer.set_shader_parameter(handle, ShaderParam::ImageSize(Vec2::ZERO));
                GalleryItem {
                    handle,
                    bounds,
                    transform: PlaneTransform::default(),
                    wrap: WrapController::default(),
                    image: None,
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "[gallery] items={} mode={} axis={}",
            items.len(),
            config.scroll_mode,
            config.wrap_axis
        );

        let mut gallery = Self {
            config,
            layout,
            renderer,
            camera,
            screen: ScreenDimensions::default(),
            viewport: ViewportDimensions::default(),
            gallery_length: 0.0,
            scroll,
            items,
        };
        gallery.resize();
        Ok(gallery)
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        let axis = self.config.wrap_axis;
        let axis_of = move |p: Vec2| match axis {
            WrapAxis::Vertical => p.y,
            WrapAxis::Horizontal => p.x,
        };
        match event {
            InputEvent::Wheel(delta) => self.scroll.integrate(ScrollInput::Wheel(delta)),
            InputEvent::DragStart(p) => self.scroll.integrate(ScrollInput::Press(axis_of(p))),
            InputEvent::DragMove(p) => self.scroll.integrate(ScrollInput::Move(axis_of(p))),
            InputEvent::DragEnd => self.scroll.integrate(ScrollInput::Release),
            InputEvent::Resize => self.resize(),
            InputEvent::SetMode(mode) => self.scroll.set_mode(mode),
            InputEvent::ToggleMode => self.scroll.set_mode(self.scroll.mode.toggled()),
        }
    }

    /// Re-read the layout and rebuild every derived dimension.
    ///
    /// Each call starts from scratch, so back-to-back resizes only cost
    /// redundant work. Wrap offsets go back to zero because they were whole
    /// multiples of the previous gallery length.
    pub fn resize(&mut self) {
        let screen = self.layout.window_size();
        if !screen.is_valid() {
            log::warn!(
                "[gallery] ignoring resize to {}x{}",
                screen.width,
                screen.height
            );
            return;
        }
        self.screen = screen;
        self.viewport = self.camera.fit(screen);

        let bounds = self.layout.item_bounds();
        if bounds.len() != self.items.len() {
            log::warn!(
                "[gallery] layout reports {} items, tracking {}",
                bounds.len(),
                self.items.len()
            );
        }
        for (item, b) in self.items.iter_mut().zip(bounds.iter()) {
            item.bounds = *b;
        }
        // Length must describe the boxes actually being projected.
        let tracked = self.items.iter().map(|i| i.bounds).collect::<Vec<_>>();
        self.gallery_length = gallery_length(
            self.layout.gallery_bounds().as_ref(),
            &tracked,
            self.screen,
            self.viewport,
            self.config.wrap_axis,
        );

        // Offsets restart at zero, so bring the scroll back within half a
        // loop of the origin; otherwise every item lands whole loops away.
        let geometry = self.geometry();
        let shift = self.scroll.rebase(geometry.length_px());
        if shift != 0.0 {
            log::debug!("[gallery] scroll rebased by {:.1}px", shift);
        }
        let scroll_px = geometry.scroll_vector(self.scroll.current);
        for item in &mut self.items {
            item.wrap.reset();
            item.transform = project(
                &item.bounds,
                self.screen,
                self.viewport,
                scroll_px,
                0.0,
                self.config.wrap_axis,
            );
            self.renderer.set_transform(item.handle, &item.transform);
            self.renderer
                .set_shader_parameter(item.handle, ShaderParam::PlaneSize(item.transform.scale));
            self.renderer.set_shader_parameter(
                item.handle,
                ShaderParam::ViewportSize(self.viewport.as_vec2()),
            );
        }
        log::info!(
            "[gallery] resize screen={}x{} viewport={:.3}x{:.3} length={:.3}",
            self.screen.width,
            self.screen.height,
            self.viewport.width,
            self.viewport.height,
            self.gallery_length
        );
    }

    /// Advance scroll, update every plane and submit the frame.
    pub fn frame(&mut self) -> FrameReport {
        let scroll = self.scroll.tick();
        let mut report = FrameReport {
            scroll,
            wraps: SmallVec::new(),
        };

        // Nothing can be projected until a resize has seen a real window.
        if self.screen.is_valid() {
            let geometry = self.geometry();
            let strength = scroll.velocity() / self.screen.width * self.config.strength_factor;
            for (index, item) in self.items.iter_mut().enumerate() {
                let (transform, delta) = step_item(&item.bounds, &mut item.wrap, &scroll, &geometry);
                if delta != 0.0 {
                    log::debug!(
                        "[wrap] item={} delta={:.3} offset={:.3}",
                        index,
                        delta,
                        item.wrap.offset
                    );
                    report.wraps.push(WrapEvent { item: index, delta });
                }
                item.transform = transform;
                self.renderer.set_transform(item.handle, &transform);
                self.renderer
                    .set_shader_parameter(item.handle, ShaderParam::Strength(strength));
            }
        }

        if let Err(e) = self.renderer.render_frame(&self.camera) {
            log::error!("render error: {:?}", e);
        }
        report
    }

    /// Hand a decoded texture to the plane at `index`.
    pub fn attach_texture(
        &mut self,
        index: usize,
        image: ImageInfo,
        texture: R::Texture,
    ) -> Result<(), GalleryError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(GalleryError::ItemOutOfRange { index, len })?;
        item.image = Some(image);
        self.renderer
            .set_shader_parameter(item.handle, ShaderParam::ImageSize(image.as_vec2()));
        self.renderer.set_texture(item.handle, texture);
        Ok(())
    }

    /// Record a failed image load; the plane keeps drawing its placeholder.
    pub fn texture_failed(&mut self, index: usize, reason: &str) {
        log::warn!("[gallery] image {} failed to load: {}", index, reason);
    }

    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry {
            screen: self.screen,
            viewport: self.viewport,
            gallery_length: self.gallery_length,
            axis: self.config.wrap_axis,
        }
    }

    pub fn screen(&self) -> ScreenDimensions {
        self.screen
    }

    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    pub fn gallery_length(&self) -> f32 {
        self.gallery_length
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn items(&self) -> &[GalleryItem<R::Handle>] {
        &self.items
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
