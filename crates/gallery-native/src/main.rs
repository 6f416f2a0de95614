use std::sync::Arc;

use gallery_core::render::GpuPlanes;
use gallery_core::{
    normalize_wheel, ElementBounds, GalleryConfig, GalleryLoop, ImageInfo, InputEvent,
    LayoutSource, ScreenDimensions, ScrollMode, WheelDeltaMode, WrapAxis,
};
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

const ITEM_COUNT: usize = 14;
const COLUMNS: usize = 2;
const LAYOUT_SEED: u64 = 7;
const TEXTURE_SIDE: u32 = 256;

/// Column layout standing in for the DOM: figure widths follow the window,
/// heights come from fixed aspect ratios.
struct SyntheticLayout {
    screen: ScreenDimensions,
    aspects: Vec<f32>,
}

impl SyntheticLayout {
    fn new(screen: ScreenDimensions, rng: &mut StdRng) -> Self {
        let aspects = (0..ITEM_COUNT).map(|_| rng.gen_range(0.7..1.6)).collect();
        Self { screen, aspects }
    }

    fn column_width(&self) -> f32 {
        self.screen.width * 0.3
    }

    fn gap(&self) -> f32 {
        self.screen.width * 0.05
    }
}

impl LayoutSource for SyntheticLayout {
    fn window_size(&self) -> ScreenDimensions {
        self.screen
    }

    fn item_bounds(&self) -> Vec<ElementBounds> {
        let (col_w, gap) = (self.column_width(), self.gap());
        let inset = (self.screen.width - COLUMNS as f32 * col_w - gap) / 2.0;
        let mut column_tops = [gap; COLUMNS];
        self.aspects
            .iter()
            .enumerate()
            .map(|(i, aspect)| {
                let col = i % COLUMNS;
                let height = col_w * aspect;
                let bounds = ElementBounds::new(
                    column_tops[col],
                    inset + col as f32 * (col_w + gap),
                    col_w,
                    height,
                );
                column_tops[col] += height + gap;
                bounds
            })
            .collect()
    }

    fn gallery_bounds(&self) -> Option<ElementBounds> {
        let bottom = self
            .item_bounds()
            .iter()
            .map(ElementBounds::bottom)
            .fold(0.0, f32::max);
        Some(ElementBounds::new(
            0.0,
            0.0,
            self.screen.width,
            bottom + self.gap(),
        ))
    }
}

/// Diagonal two-colour gradient, tightly packed RGBA8.
fn gradient_rgba(side: u32, a: [u8; 3], b: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::with_capacity((side * side * 4) as usize);
    let span = (2 * (side - 1)).max(1) as f32;
    for y in 0..side {
        for x in 0..side {
            let t = (x + y) as f32 / span;
            for c in 0..3 {
                out.push((a[c] as f32 * (1.0 - t) + b[c] as f32 * t) as u8);
            }
            out.push(255);
        }
    }
    out
}

/// `autoplay`, `horizontal`, etc. on the command line override the defaults.
fn config_from_args() -> GalleryConfig {
    let mut config = GalleryConfig::default();
    for arg in std::env::args().skip(1) {
        if let Ok(mode) = arg.parse::<ScrollMode>() {
            config.scroll_mode = mode;
        } else if let Ok(axis) = arg.parse::<WrapAxis>() {
            config.wrap_axis = axis;
        } else {
            log::warn!("ignoring argument {:?}", arg);
        }
    }
    config
}

fn logical_screen(size: PhysicalSize<u32>, scale: f64) -> ScreenDimensions {
    let logical = size.to_logical::<f32>(scale);
    ScreenDimensions::new(logical.width, logical.height)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = config_from_args();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Infinite gallery (native)")
            .build(&event_loop)?,
    );

    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;
    let mut renderer = pollster::block_on(GpuPlanes::new(
        &instance,
        surface,
        size.width,
        size.height,
    ))?;
    renderer.set_clear_color(wgpu::Color {
        r: 0.93,
        g: 0.92,
        b: 0.9,
        a: 1.0,
    });

    let mut rng = StdRng::seed_from_u64(LAYOUT_SEED);
    let layout = SyntheticLayout::new(logical_screen(size, window.scale_factor()), &mut rng);
    let mut gallery = GalleryLoop::new(config, layout, renderer)?;

    for index in 0..ITEM_COUNT {
        let a = [rng.gen(), rng.gen(), rng.gen()];
        let b = [rng.gen(), rng.gen(), rng.gen()];
        let rgba = gradient_rgba(TEXTURE_SIDE, a, b);
        let texture = gallery
            .renderer()
            .upload_rgba(TEXTURE_SIDE, TEXTURE_SIDE, &rgba)?;
        let side = TEXTURE_SIDE as f32;
        gallery.attach_texture(index, ImageInfo::new(side, side), texture)?;
    }

    let mut cursor = Vec2::ZERO;
    let mut dragging = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gallery.renderer_mut().resize_if_needed(size.width, size.height);
                gallery.layout_mut().screen = logical_screen(size, window.scale_factor());
                gallery.handle_input(InputEvent::Resize);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports positive y for scrolling up; the DOM the other way.
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => normalize_wheel(-y, WheelDeltaMode::Line),
                    MouseScrollDelta::PixelDelta(p) => {
                        let logical = p.to_logical::<f32>(window.scale_factor());
                        normalize_wheel(-logical.y, WheelDeltaMode::Pixel)
                    }
                };
                gallery.handle_input(InputEvent::Wheel(delta));
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                cursor = Vec2::new(logical.x, logical.y);
                if dragging {
                    gallery.handle_input(InputEvent::DragMove(cursor));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    dragging = true;
                    gallery.handle_input(InputEvent::DragStart(cursor));
                }
                ElementState::Released => {
                    if dragging {
                        dragging = false;
                        gallery.handle_input(InputEvent::DragEnd);
                    }
                }
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Space) => gallery.handle_input(InputEvent::ToggleMode),
                Key::Named(NamedKey::Escape) => elwt.exit(),
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            gallery.frame();
            window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
