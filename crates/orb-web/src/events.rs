use crate::input::PointerState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer event position converted from client CSS pixels to canvas
/// backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (x_css / w) * canvas.width() as f32,
            (y_css / h) * canvas.height() as f32,
        )
    } else {
        Vec2::ZERO
    }
}

fn add_pointer_listener(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    mut handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| handler(ev))
        as Box<dyn FnMut(web::PointerEvent)>);
    let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Wire pointerdown/move/up/cancel on the canvas into the shared pointer
/// state. Handlers only record state; all motion is applied by the next
/// scheduled frame. The closures live as long as the canvas itself.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<PointerState>>,
) {
    {
        let pointer = pointer.clone();
        let canvas_pos = canvas.clone();
        add_pointer_listener(canvas, "pointerdown", move |ev| {
            let pos = pointer_canvas_px(&ev, &canvas_pos);
            pointer.borrow_mut().begin(pos.x, pos.y);
            ev.prevent_default();
        });
    }
    {
        let pointer = pointer.clone();
        let canvas_pos = canvas.clone();
        add_pointer_listener(canvas, "pointermove", move |ev| {
            let pos = pointer_canvas_px(&ev, &canvas_pos);
            pointer.borrow_mut().move_to(pos.x, pos.y);
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let pointer = pointer.clone();
        add_pointer_listener(canvas, event, move |_ev| {
            pointer.borrow_mut().end();
        });
    }
}
