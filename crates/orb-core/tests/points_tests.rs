// Host-side tests for volumetric point generation.

use orb_core::generate_points;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn points_stay_inside_the_sphere() {
    let mut rng = StdRng::seed_from_u64(7);
    let radius = 200.0;
    let points = generate_points(2000, radius, &mut rng);
    assert_eq!(points.len(), 2000);
    for (i, p) in points.iter().enumerate() {
        let d = p.length();
        assert!(
            d <= radius + 1e-3,
            "point {i} escaped the sphere: distance {d} > radius {radius}"
        );
    }
}

#[test]
fn zero_count_is_legal_and_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_points(0, 100.0, &mut rng).is_empty());
}

#[test]
fn zero_radius_is_legal_and_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_points(100, 0.0, &mut rng).is_empty());
    assert!(generate_points(100, -5.0, &mut rng).is_empty());
}

#[test]
fn same_seed_reproduces_the_same_cloud() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let pa = generate_points(64, 150.0, &mut a);
    let pb = generate_points(64, 150.0, &mut b);
    assert_eq!(pa.len(), pb.len());
    for (x, y) in pa.iter().zip(pb.iter()) {
        assert_eq!(x, y, "seeded generation diverged");
    }
}

#[test]
fn sampling_is_volumetric_not_surface_clustered() {
    // Uniform volume density puts ~1/8 of the points inside half the radius.
    // Surface sampling would put none there; cbrt-less radial sampling would
    // put ~1/2 there. Accept a generous band around 0.125.
    let mut rng = StdRng::seed_from_u64(99);
    let radius = 100.0;
    let points = generate_points(4000, radius, &mut rng);
    let inner = points
        .iter()
        .filter(|p| p.length() <= radius / 2.0)
        .count();
    let fraction = inner as f64 / points.len() as f64;
    assert!(
        (0.08..=0.18).contains(&fraction),
        "inner-half fraction {fraction} is not consistent with uniform volume sampling"
    );
}
