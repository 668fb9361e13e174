use crate::constants::*;
use crate::points::generate_points;
use crate::projection::Projector;
use crate::viewport::Viewport;
use glam::Vec3;
use rand::prelude::*;

/// How the globe rotates over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// No input: steady spin about the vertical axis plus a slow sinusoidal
    /// tilt about the horizontal axis.
    Ambient,
    /// Pointer-driven: drag impulses feed rotational velocities that decay
    /// exponentially each frame.
    Inertial,
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub point_count: usize,
    pub radius_fraction: f32,
    pub camera_depth: f32,
    pub motion: Motion,
    /// Apply the travelling radial wave before projecting.
    pub wave: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            radius_fraction: RADIUS_FRACTION,
            camera_depth: CAMERA_DEPTH,
            motion: Motion::Inertial,
            wave: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("camera depth must be positive, got {0}")]
    NonPositiveDepth(f32),
    #[error("radius fraction must be positive, got {0}")]
    NonPositiveRadiusFraction(f32),
}

/// One projected point ready to paint: screen position, circle radius and
/// fill alpha.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawPoint {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// Owns the point cloud and all animation state for one globe instance.
///
/// Every instance carries its own RNG, frame counter and rotation state, so
/// several globes can run side by side without sharing anything. Stored points
/// are never mutated; the wave effect displaces a copy per frame.
pub struct GlobeScene {
    pub params: SceneParams,
    viewport: Viewport,
    radius: f32,
    points: Vec<Vec3>,
    rng: StdRng,
    t: f32,
    rot_y: f32,
    rot_x: f32,
    vel_x: f32,
    vel_y: f32,
}

impl GlobeScene {
    pub fn new(params: SceneParams, viewport: Viewport, seed: u64) -> Result<Self, SceneError> {
        if params.camera_depth <= 0.0 {
            return Err(SceneError::NonPositiveDepth(params.camera_depth));
        }
        if params.radius_fraction <= 0.0 {
            return Err(SceneError::NonPositiveRadiusFraction(params.radius_fraction));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let radius = viewport.size() * params.radius_fraction;
        let points = generate_points(params.point_count, radius, &mut rng);
        Ok(Self {
            params,
            viewport,
            radius,
            points,
            rng,
            t: 0.0,
            rot_y: 0.0,
            rot_x: 0.0,
            vel_x: 0.0,
            vel_y: 0.0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn frame_count(&self) -> f32 {
        self.t
    }

    pub fn rot_y(&self) -> f32 {
        self.rot_y
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Adopt a new viewport size. The globe radius follows the size and the
    /// cloud is regenerated at the new radius so point density stays visually
    /// constant. Frame counter and rotation state carry over untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.radius = viewport.size() * self.params.radius_fraction;
        self.points = generate_points(self.params.point_count, self.radius, &mut self.rng);
        log::debug!(
            "[scene] resized to {:.0}x{:.0}, regenerated {} points at radius {:.1}",
            viewport.width,
            viewport.height,
            self.points.len(),
            self.radius
        );
    }

    /// Feed a pointer drag delta (in surface pixels) into the rotational
    /// velocities. Ignored under ambient motion.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        if self.params.motion != Motion::Inertial {
            return;
        }
        self.vel_y = (self.vel_y + dx_px * DRAG_SENSITIVITY).clamp(-VELOCITY_MAX, VELOCITY_MAX);
        self.vel_x = (self.vel_x + dy_px * DRAG_SENSITIVITY).clamp(-VELOCITY_MAX, VELOCITY_MAX);
    }

    /// Advance one frame and fill `out` with the projected draw list.
    ///
    /// Rotation state is updated exactly once per call. An empty cloud (zero
    /// count or zero radius) yields an empty list, never an error.
    pub fn frame(&mut self, out: &mut Vec<DrawPoint>) {
        out.clear();
        self.t += 1.0;
        self.advance_rotation();

        if self.points.is_empty() || self.radius <= 0.0 {
            return;
        }

        let pulse = 0.5 + 0.5 * (self.t * PULSE_FREQ).sin();
        let point_size = BASE_POINT_SIZE * (1.0 + PULSE_SIZE_SPAN * (pulse - 0.5));
        let projector = Projector::new(
            self.params.camera_depth,
            self.viewport.width,
            self.viewport.height,
        );

        out.reserve(self.points.len());
        for p in &self.points {
            let dist = p.length();
            let q = if self.params.wave {
                let displacement =
                    (dist / WAVE_LENGTH - self.t * WAVE_SPEED).sin() * WAVE_AMPLITUDE * pulse;
                Vec3::new(p.x, p.y, p.z + displacement)
            } else {
                *p
            };
            let pr = projector.project(q, self.rot_y, self.rot_x);
            // Density fade by distance from center, not true depth; points
            // near the surface read as sparser and dimmer.
            let alpha = ALPHA_BASE + ALPHA_SPAN * (1.0 - dist / self.radius).clamp(0.0, 1.0);
            out.push(DrawPoint {
                x: pr.x,
                y: pr.y,
                radius: point_size * pr.scale,
                alpha: (alpha * pr.scale).clamp(0.0, 1.0),
            });
        }
    }

    fn advance_rotation(&mut self) {
        match self.params.motion {
            Motion::Ambient => {
                self.rot_y += BASE_ROT_SPEED;
                self.rot_x = AMBIENT_TILT_AMPLITUDE * (self.t * AMBIENT_TILT_FREQ).sin();
            }
            Motion::Inertial => {
                self.rot_y += BASE_ROT_SPEED + self.vel_y;
                self.rot_x += self.vel_x;
                self.vel_y *= DRAG_DAMPING;
                self.vel_x *= DRAG_DAMPING;
            }
        }
    }
}
