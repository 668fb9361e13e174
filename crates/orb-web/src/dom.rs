use crate::constants::DEFAULT_MAX_SIZE;
use orb_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS width of the canvas's parent container, if the canvas is attached.
pub fn container_width(canvas: &web::HtmlCanvasElement) -> Option<f64> {
    canvas
        .parent_element()
        .map(|el| el.get_bounding_client_rect().width())
}

/// Size the canvas to a square that fits the container and the caller's
/// maxima: CSS size in device-independent pixels, backing store scaled by
/// devicePixelRatio. Returns the backing-store viewport the scene should use.
///
/// An unattached or zero-width container yields a zero viewport; nothing is
/// drawn until a resize gives us real space.
pub fn sync_canvas_square_size(
    canvas: &web::HtmlCanvasElement,
    max_width: f64,
    max_height: f64,
) -> Viewport {
    let max_width = if max_width > 0.0 {
        max_width
    } else {
        DEFAULT_MAX_SIZE
    };
    let max_height = if max_height > 0.0 {
        max_height
    } else {
        DEFAULT_MAX_SIZE
    };
    let container = container_width(canvas).unwrap_or(0.0);
    let css_size = container.min(max_width).min(max_height).max(0.0);

    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let px = (css_size * dpr) as u32;
    canvas.set_width(px);
    canvas.set_height(px);

    let style = canvas.style();
    let _ = style.set_property("width", &format!("{css_size}px"));
    let _ = style.set_property("height", &format!("{css_size}px"));

    Viewport::square(px as f32)
}
