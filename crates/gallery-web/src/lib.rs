#![cfg(target_arch = "wasm32")]
use gallery_core::render::GpuPlanes;
use gallery_core::GalleryLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod images;

pub(crate) type WebGallery = GalleryLoop<dom::DomLayout, GpuPlanes>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document)?;
    let config = dom::read_config(&canvas);
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let mut renderer = GpuPlanes::new(&instance, surface, width, height).await?;
    renderer.set_clear_color(wgpu::Color::TRANSPARENT);

    let layout = dom::DomLayout::query(&window, &document)?;
    let sources = layout.image_sources();
    let gallery = Rc::new(RefCell::new(GalleryLoop::new(config, layout, renderer)?));

    let queue = events::InputQueue::default();
    events::wire_input_handlers(&window, &canvas, &queue);
    events::wire_global_keydown(&window, &queue);

    images::load_all(gallery.clone(), sources);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        gallery,
        queue,
        canvas,
    })));
    Ok(())
}
