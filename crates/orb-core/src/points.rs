use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Generate `count` points uniformly distributed by volume inside a sphere of
/// the given radius, centered at the origin.
///
/// The polar angle comes from `acos(2u - 1)` and the radial distance from
/// `radius * cbrt(w)`, which together give uniform density through the volume
/// rather than a shell clustered at the surface. The generator is passed in so
/// callers can seed it for reproducible layouts.
pub fn generate_points<R: Rng>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    if count == 0 || radius <= 0.0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let u: f32 = rng.gen();
            let v: f32 = rng.gen();
            let w: f32 = rng.gen();
            let theta = (2.0 * u - 1.0).acos();
            let phi = TAU * v;
            let r = radius * w.cbrt();
            Vec3::new(
                r * theta.sin() * phi.cos(),
                r * theta.cos(),
                r * theta.sin() * phi.sin(),
            )
        })
        .collect()
}
