// Host-side tests for the RPAIT → visual mapping.

use vulca_core::{map_visuals, Evaluator, IdentityTable, ScoreVector};

fn score_grid() -> Vec<ScoreVector> {
    let steps = [0.0, 2.5, 5.0, 7.5, 10.0];
    let mut out = Vec::new();
    for &r in &steps {
        for &p in &steps {
            for &a in &steps {
                out.push(ScoreVector::new(r, p, a, 10.0 - a, 10.0 - r));
            }
        }
    }
    // out-of-range inputs are clamped before mapping
    out.push(ScoreVector::new(-5.0, 20.0, f32::NAN, 11.0, -0.1));
    out
}

#[test]
fn outputs_stay_in_documented_ranges() {
    let table = IdentityTable::builtin();
    for e in Evaluator::ALL {
        for s in score_grid() {
            let v = map_visuals(&s, table.get(e));
            assert!((80..=300).contains(&v.particle_count), "{e}: count {}", v.particle_count);
            assert!(v.particle_size >= 0.5 && v.particle_size <= 10.0);
            assert!(v.hue >= 0.0 && v.hue < 360.0);
            assert!(v.saturation >= 0.4 - 1e-6 && v.saturation <= 1.0 + 1e-6);
            assert!(v.lightness >= 0.35 - 1e-6 && v.lightness <= 0.75 + 1e-6);
            assert!(v.alpha_min >= 0.05 - 1e-6 && v.alpha_min <= 0.10 + 1e-6);
            assert!(v.alpha_max >= 0.30 - 1e-6 && v.alpha_max <= 0.50 + 1e-6);
            assert!(v.alpha_min < v.alpha_max);
            assert!(v.drift_intensity >= 1.0 && v.drift_intensity <= 1.3 + 1e-6);
            assert!(v.speed >= 1.5 && v.speed <= 9.5 + 1e-5);
            assert!(v.precision >= 0.5 && v.precision <= 1.0 + 1e-6);
        }
    }
}

#[test]
fn mapping_is_deterministic() {
    let id = IdentityTable::builtin().get(Evaluator::JohnRuskin);
    let s = ScoreVector::new(6.3, 8.1, 2.2, 9.9, 4.4);
    let a = map_visuals(&s, id);
    let b = map_visuals(&s, id);
    assert_eq!(a, b);
    assert_eq!(a.color, b.color);
}

#[test]
fn higher_representation_means_more_and_larger_particles() {
    let id = IdentityTable::builtin().get(Evaluator::SuShi);
    let a = map_visuals(&ScoreVector::new(9.0, 8.0, 9.0, 8.0, 8.0), id);
    let b = map_visuals(&ScoreVector::new(6.0, 9.0, 5.0, 7.0, 8.0), id);
    assert_eq!(a.particle_count, 260);
    assert_eq!(b.particle_count, 200);
    assert!(a.particle_size > b.particle_size);
    // B is more philosophical, so it drifts harder
    assert!(b.drift_intensity > a.drift_intensity);
    assert!(a.glow && !b.glow);
}

#[test]
fn alpha_band_widens_with_interpretation() {
    let id = IdentityTable::builtin().get(Evaluator::GuoXi);
    let mut prev = -1.0;
    for i in 0..=10 {
        let v = map_visuals(&ScoreVector::new(5.0, 5.0, 5.0, i as f32, 5.0), id);
        let width = v.alpha_max - v.alpha_min;
        assert!(width > prev);
        prev = width;
    }
}

#[test]
fn identity_sets_the_hue_family() {
    let table = IdentityTable::builtin();
    let s = ScoreVector::neutral();
    let guo = map_visuals(&s, table.get(Evaluator::GuoXi));
    let ai = map_visuals(&s, table.get(Evaluator::AiEthicsReviewer));
    assert_eq!(guo.hue, 120.0);
    assert_eq!(ai.hue, 200.0);
    assert_ne!(guo.color, ai.color);
}
