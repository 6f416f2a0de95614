use crate::dom;
use crate::events::InputQueue;
use crate::WebGallery;
use gallery_core::InputEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gallery: Rc<RefCell<WebGallery>>,
    pub queue: InputQueue,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let events = std::mem::take(&mut *self.queue.borrow_mut());
        let mut gallery = self.gallery.borrow_mut();
        let mut resized = false;
        for event in events {
            if event == InputEvent::Resize {
                // One re-layout per frame is enough however many resize events fired.
                if resized {
                    continue;
                }
                resized = true;
                let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
                gallery.renderer_mut().resize_if_needed(w, h);
            }
            gallery.handle_input(event);
        }
        gallery.frame();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    if let Some(cb) = tick.as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
