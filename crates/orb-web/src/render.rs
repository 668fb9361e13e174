use crate::constants::POINT_COLOR;
use orb_core::DrawPoint;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Acquire the 2D context. `None` means the surface is not usable this frame
/// (detached canvas, context lost); the caller skips and retries next frame.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Clear the surface and paint the frame's draw list as filled circles.
pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    points: &[DrawPoint],
) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(POINT_COLOR);
    for p in points {
        ctx.set_global_alpha(p.alpha as f64);
        ctx.begin_path();
        let _ = ctx.arc(p.x as f64, p.y as f64, p.radius.max(0.0) as f64, 0.0, TAU);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
