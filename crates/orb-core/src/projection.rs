use crate::constants::SCALE_FLOOR;
use glam::Vec3;

/// Result of projecting one point: screen position plus the perspective scale
/// factor. `scale` drives both point size and opacity attenuation; dropping
/// either flattens the depth illusion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Perspective projector for a square viewport with a fixed camera distance.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub depth: f32,
    pub width: f32,
    pub height: f32,
}

impl Projector {
    pub fn new(depth: f32, width: f32, height: f32) -> Self {
        Self {
            depth,
            width,
            height,
        }
    }

    /// Rotate about the vertical axis, then the horizontal axis, then apply
    /// the perspective divide and center in the viewport.
    ///
    /// The divide stays well-behaved for any rotation as long as the globe
    /// radius is below `depth`; if a point ever reaches `z'' <= -depth` the
    /// scale is clamped to a small positive floor instead of blowing up.
    pub fn project(&self, p: Vec3, rot_y: f32, rot_x: f32) -> Projected {
        let (sin_y, cos_y) = rot_y.sin_cos();
        let x1 = p.x * cos_y + p.z * sin_y;
        let z1 = p.z * cos_y - p.x * sin_y;

        let (sin_x, cos_x) = rot_x.sin_cos();
        let y2 = p.y * cos_x - z1 * sin_x;
        let z2 = z1 * cos_x + p.y * sin_x;

        let raw = self.depth / (self.depth + z2);
        let scale = if raw.is_finite() && raw >= SCALE_FLOOR {
            raw
        } else {
            SCALE_FLOOR
        };

        Projected {
            x: self.width / 2.0 + x1 * scale,
            y: self.height / 2.0 + y2 * scale,
            scale,
        }
    }
}
