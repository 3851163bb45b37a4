use glam::Vec2;
use vulca_core::constants::{DEFAULT_ATTRACTION_RANGE, DEFAULT_ATTRACTION_STRENGTH};
use vulca_core::{
    attraction_force, ArtworkId, NoiseField, Particle, PerlinNoise, PhysicsConfig, PhysicsEngine,
};

fn still_air() -> PhysicsEngine {
    let config = PhysicsConfig {
        wind_enabled: false,
        ..PhysicsConfig::default()
    };
    PhysicsEngine::new(config, Box::new(|_: f32, _: f32, _: f32| 0.0f32))
}

#[test]
fn attraction_falls_off_with_distance() {
    let mut prev = f32::INFINITY;
    for d in 0..=300 {
        let f = attraction_force(d as f32, DEFAULT_ATTRACTION_STRENGTH, DEFAULT_ATTRACTION_RANGE);
        assert!(f < prev, "force did not fall at distance {d}");
        assert!(f > 0.0);
        prev = f;
    }
}

#[test]
fn attraction_has_a_hard_cutoff() {
    let at_range = attraction_force(300.0, 5000.0, 300.0);
    assert!((at_range - 5000.0 / (301.0 * 301.0)).abs() < 1e-6);
    assert_eq!(attraction_force(301.0, 5000.0, 300.0), 0.0);
    assert_eq!(attraction_force(f32::NAN, 5000.0, 300.0), 0.0);
}

#[test]
fn particles_drift_toward_cursor_in_their_region() {
    let mut physics = still_air();
    let region = ArtworkId::from("artwork_1");
    physics.set_cursor(Vec2::new(150.0, 100.0), region.clone());
    let mut p = Particle::new(15);
    p.position = Vec2::new(100.0, 100.0);
    physics.step(&mut p, Vec2::new(400.0, 300.0), &region);
    assert!(p.velocity.x > 0.0);
    assert!(p.position.x > 100.0);
}

#[test]
fn trail_never_exceeds_its_length() {
    let physics = still_air();
    let region = ArtworkId::from("a");
    let mut p = Particle::new(physics.config().trail_length);
    p.velocity = Vec2::new(3.0, 2.0);
    for _ in 0..500 {
        physics.step(&mut p, Vec2::new(200.0, 200.0), &region);
        assert!(p.trail.len() <= physics.config().trail_length);
    }
    assert_eq!(p.trail.len(), physics.config().trail_length);
}

#[test]
fn particles_stay_inside_region() {
    let physics = PhysicsEngine::with_seed(PhysicsConfig::default(), 11);
    let region = ArtworkId::from("a");
    let extent = Vec2::new(120.0, 80.0);
    let mut p = Particle::new(4);
    p.position = Vec2::new(60.0, 40.0);
    p.velocity = Vec2::new(-40.0, 25.0);
    for _ in 0..300 {
        physics.step(&mut p, extent, &region);
        assert!(p.position.x >= 0.0 && p.position.x <= extent.x);
        assert!(p.position.y >= 0.0 && p.position.y <= extent.y);
    }
}

#[test]
fn disabled_trails_stay_empty() {
    let mut physics = still_air();
    physics.set_trails_enabled(false);
    let mut p = Particle::new(15);
    p.velocity = Vec2::ONE;
    physics.step(&mut p, Vec2::splat(100.0), &ArtworkId::from("a"));
    assert!(p.trail.is_empty());
    assert!(!physics.debug_info().trails_enabled);
}

#[test]
fn perlin_noise_is_seeded_and_bounded() {
    let a = PerlinNoise::new(99);
    let b = PerlinNoise::new(99);
    let c = PerlinNoise::new(100);
    let mut differs = false;
    for i in 0..400 {
        let x = i as f32 * 0.173 - 20.0;
        let y = i as f32 * 0.291;
        let z = i as f32 * 0.05;
        let v = a.sample(x, y, z);
        assert!((-1.0..=1.0).contains(&v));
        assert_eq!(v, b.sample(x, y, z));
        differs |= v != c.sample(x, y, z);
    }
    assert!(differs);
}

#[test]
fn toggles_switch_forces_off() {
    let mut physics = still_air();
    let region = ArtworkId::from("a");
    let at = Vec2::new(100.0, 100.0);
    physics.set_cursor(Vec2::new(150.0, 100.0), region.clone());
    let weak = physics.attraction_at(at, &region);
    physics.set_attraction_strength(10_000.0);
    let strong = physics.attraction_at(at, &region);
    assert!(strong.x > weak.x);

    physics.set_attraction_enabled(false);
    assert_eq!(physics.attraction_at(at, &region), Vec2::ZERO);
    assert!(!physics.debug_info().attraction_enabled);

    physics.set_wind_enabled(false);
    let mut p = Particle::new(4);
    p.position = at;
    physics.step(&mut p, Vec2::splat(200.0), &region);
    assert_eq!(p.velocity, Vec2::ZERO);
}
