#![cfg(target_arch = "wasm32")]
use orb_core::{GlobeScene, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mount;
mod render;

use mount::MountFlag;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");
    Ok(())
}

/// Live renderer instance. Keep it around for as long as the globe should
/// animate; call `unmount` when the host page removes the canvas.
#[wasm_bindgen]
pub struct GlobeHandle {
    mounted: MountFlag,
    resize_closure: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl GlobeHandle {
    /// Stop the animation loop and detach the resize listener. Safe to call
    /// any number of times; only the first call does work, and a frame that
    /// was already scheduled re-arms nothing.
    pub fn unmount(&mut self) {
        if !self.mounted.unmount() {
            return;
        }
        if let (Some(w), Some(closure)) = (web::window(), self.resize_closure.take()) {
            let _ = w.remove_event_listener_with_callback(
                "resize",
                closure.as_ref().unchecked_ref(),
            );
        }
        log::info!("[globe] unmounted");
    }
}

/// Mount the globe onto the canvas with the given element id, bounded by
/// `max_width` x `max_height` device-independent pixels.
#[wasm_bindgen]
pub fn mount_globe(
    canvas_id: &str,
    max_width: f64,
    max_height: f64,
) -> Result<GlobeHandle, JsValue> {
    init(canvas_id, max_width, max_height).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init(canvas_id: &str, max_width: f64, max_height: f64) -> anyhow::Result<GlobeHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // A detached or zero-width container is fine: the scene starts at zero
    // size, draws nothing, and picks up real dimensions on the first resize.
    let viewport = dom::sync_canvas_square_size(&canvas, max_width, max_height);
    let seed = js_sys::Date::now() as u64;
    let scene = GlobeScene::new(SceneParams::default(), viewport, seed)?;
    log::info!(
        "[globe] mounted on #{canvas_id}: {}x{} px, {} points",
        viewport.width,
        viewport.height,
        scene.point_count()
    );

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_pointer_handlers(&canvas, &pointer);

    // Resize only touches the backing store; the frame loop resizes the
    // scene when it next runs.
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_square_size(&canvas_resize, max_width, max_height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }

    let mounted = MountFlag::mounted();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        canvas,
        pointer,
    )));
    frame::start_loop(frame_ctx, mounted.clone());

    Ok(GlobeHandle {
        mounted,
        resize_closure: Some(resize_closure),
    })
}
