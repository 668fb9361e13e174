/// Drawable surface size. The globe always renders inside a square region, so
/// width and height are kept equal and never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn square(size: f32) -> Self {
        let size = size.max(0.0);
        Self {
            width: size,
            height: size,
        }
    }

    /// Fit a square surface into the container: the side is the smallest of
    /// the container width and the configured maxima.
    pub fn fit(container_width: f32, max_width: f32, max_height: f32) -> Self {
        Self::square(container_width.min(max_width).min(max_height))
    }

    pub fn size(&self) -> f32 {
        self.width
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0.0
    }
}
