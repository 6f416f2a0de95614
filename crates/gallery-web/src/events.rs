use gallery_core::{normalize_wheel, InputEvent, WheelDeltaMode};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Events collected between animation frames, drained by the frame loop.
pub type InputQueue = Rc<RefCell<Vec<InputEvent>>>;

fn listen<E: 'static>(target: &web::EventTarget, name: &str, handler: impl FnMut(E) + 'static)
where
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::error!("[events] failed to listen for {}: {:?}", name, e);
    }
    closure.forget();
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_input_handlers(window: &web::Window, canvas: &web::HtmlCanvasElement, queue: &InputQueue) {
    let pressed = Rc::new(Cell::new(false));

    {
        let q = queue.clone();
        listen(window, "wheel", move |ev: web::WheelEvent| {
            let delta = normalize_wheel(ev.delta_y() as f32, WheelDeltaMode::from_dom(ev.delta_mode()));
            q.borrow_mut().push(InputEvent::Wheel(delta));
        });
    }
    {
        let q = queue.clone();
        let pressed = pressed.clone();
        listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
            if !ev.is_primary() {
                return;
            }
            pressed.set(true);
            q.borrow_mut().push(InputEvent::DragStart(client_pos(&ev)));
        });
    }
    {
        let q = queue.clone();
        let pressed = pressed.clone();
        listen(window, "pointermove", move |ev: web::PointerEvent| {
            if pressed.get() && ev.is_primary() {
                q.borrow_mut().push(InputEvent::DragMove(client_pos(&ev)));
            }
        });
    }
    for name in ["pointerup", "pointercancel"] {
        let q = queue.clone();
        let pressed = pressed.clone();
        listen(window, name, move |ev: web::PointerEvent| {
            if pressed.get() && ev.is_primary() {
                pressed.set(false);
                q.borrow_mut().push(InputEvent::DragEnd);
            }
        });
    }
    {
        let q = queue.clone();
        listen(window, "resize", move |_: web::Event| {
            q.borrow_mut().push(InputEvent::Resize);
        });
    }
}

pub fn wire_global_keydown(window: &web::Window, queue: &InputQueue) {
    let q = queue.clone();
    listen(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == " " {
            q.borrow_mut().push(InputEvent::ToggleMode);
            ev.prevent_default();
        }
    });
}
