use crate::constants::FRAME_LOG_INTERVAL;
use crate::input::PointerState;
use crate::mount::MountFlag;
use crate::render;
use instant::Instant;
use orb_core::{DrawPoint, GlobeScene, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: GlobeScene,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,

    draw_buf: Vec<DrawPoint>,
    last_instant: Instant,
    frame_ms_accum: f32,
    frames: u32,
}

impl FrameContext {
    pub fn new(
        scene: GlobeScene,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Self {
        Self {
            scene,
            canvas,
            pointer,
            draw_buf: Vec::new(),
            last_instant: Instant::now(),
            frame_ms_accum: 0.0,
            frames: 0,
        }
    }

    /// One animation frame: drain input, follow any backing-size change,
    /// advance and project the scene, paint. Every failure path degrades to
    /// skipping the frame; nothing here can stop the loop.
    pub fn frame(&mut self) {
        self.track_frame_time();

        let (dx, dy) = self.pointer.borrow_mut().take_delta();
        if dx != 0.0 || dy != 0.0 {
            self.scene.drag(dx, dy);
        }

        // The resize listener only resizes the canvas backing store; the
        // scene follows it here, on the next scheduled frame.
        let backing = Viewport::square(self.canvas.width() as f32);
        if backing != self.scene.viewport() {
            self.scene.resize(backing);
        }

        let Some(ctx) = render::context_2d(&self.canvas) else {
            return;
        };
        self.scene.frame(&mut self.draw_buf);
        render::paint(
            &ctx,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
            &self.draw_buf,
        );
    }

    fn track_frame_time(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.frame_ms_accum += dt.as_secs_f32() * 1000.0;
        self.frames += 1;
        if self.frames >= FRAME_LOG_INTERVAL {
            log::debug!(
                "[frame] avg {:.2} ms over {} frames, {} points",
                self.frame_ms_accum / self.frames as f32,
                self.frames,
                self.scene.point_count()
            );
            self.frame_ms_accum = 0.0;
            self.frames = 0;
        }
    }
}

/// Drive the frame context from requestAnimationFrame. The closure re-arms
/// itself only while the mount flag is set, so a frame already scheduled when
/// teardown runs fires at most once and schedules nothing further.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, mounted: MountFlag) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !mounted.is_mounted() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
