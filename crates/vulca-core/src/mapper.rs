//! RPAIT → visual parameter mapping.
//!
//! A pure function of a score vector and an identity. The mapping is linear
//! per dimension:
//!
//! * Representation sets density (particle count, size, luminosity).
//! * Philosophy sets drift and rhythm.
//! * Aesthetics sets color and glow.
//! * Interpretation sets transparency and its variation.
//! * Technique sets speed and precision.
//!
//! The mapped color leans toward the evaluator's primary color, and the
//! identity's color scheme spreads it into a small per-particle palette.

use crate::color::{wrap_hue, Hsl, Rgb};
use crate::constants::*;
use crate::identity::{ColorScheme, VisualIdentity};
use crate::particle::ParticleShape;
use crate::score::{Dimension, ScoreVector};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rhythm {
    Steady,
    Oscillating,
    Pulsing,
    Chaotic,
}

impl Rhythm {
    fn from_philosophy(p: f32) -> Self {
        match ((p / 2.5).floor() as i32).clamp(0, 3) {
            0 => Rhythm::Steady,
            1 => Rhythm::Oscillating,
            2 => Rhythm::Pulsing,
            _ => Rhythm::Chaotic,
        }
    }

    /// Motion gain at `time` seconds, in `[0.5, 2]`.
    ///
    /// `period` is the cycle length in seconds; `frequency` (Hz) adds a
    /// second, unrelated beat to the chaotic rhythm.
    pub fn modulation(self, time: f32, period: f32, frequency: f32) -> f32 {
        let cycle = if period > 0.0 { time / period } else { 0.0 };
        let wave = (cycle * TAU).sin();
        match self {
            Rhythm::Steady => 1.0,
            Rhythm::Oscillating => 1.0 + 0.5 * wave,
            Rhythm::Pulsing => 0.5 + 1.5 * (0.5 + 0.5 * wave).powi(4),
            Rhythm::Chaotic => {
                let beat = (time * frequency * TAU).sin() * (cycle * 1.618 * TAU + 1.3).cos();
                1.0 + 0.5 * beat
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FadeCurve {
    Linear,
    Sinusoidal,
    Polynomial,
    Complex,
}

impl FadeCurve {
    /// Shape a normalized lifespan into an opacity multiplier, both in `[0, 1]`.
    pub fn apply(self, life: f32) -> f32 {
        let l = life.clamp(0.0, 1.0);
        match self {
            FadeCurve::Linear => l,
            FadeCurve::Sinusoidal => (l * std::f32::consts::FRAC_PI_2).sin(),
            FadeCurve::Polynomial => l * l,
            FadeCurve::Complex => l * l * (3.0 - 2.0 * l),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeVariety {
    Circle,
    Mixed,
    Diverse,
}

impl ShapeVariety {
    /// Shapes a particle may be drawn as.
    pub fn shapes(self) -> &'static [ParticleShape] {
        match self {
            ShapeVariety::Circle => &[ParticleShape::Circle],
            ShapeVariety::Mixed => &[ParticleShape::Circle, ParticleShape::Square],
            ShapeVariety::Diverse => &[
                ParticleShape::Circle,
                ParticleShape::Square,
                ParticleShape::Triangle,
                ParticleShape::Star,
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub struct MapperConfig {
    pub min_particles: usize,
    pub max_particles: usize,
    pub burst_threshold: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            min_particles: MIN_PARTICLES,
            max_particles: DEFAULT_MAX_PARTICLES,
            burst_threshold: DEFAULT_BURST_THRESHOLD,
        }
    }
}

/// Everything a channel needs to style and drive its particles.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualParameters {
    // Representation
    pub particle_count: usize,
    pub particle_size: f32,
    pub luminosity: f32,
    // Aesthetics
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub color: Rgb,
    /// Colors particles are drawn from, per the identity's scheme.
    pub palette: [Rgb; 3],
    pub glow: bool,
    pub glow_color: Rgb,
    pub glow_intensity: f32,
    pub shape_variety: ShapeVariety,
    pub color_scheme: ColorScheme,
    // Interpretation
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub alpha_speed: f32,
    pub fade_curve: FadeCurve,
    // Philosophy
    pub drift_intensity: f32,
    pub drift_frequency: f32,
    pub periodicity_ms: f32,
    pub rhythm: Rhythm,
    // Technique
    pub speed: f32,
    pub precision: f32,
    pub burst_on_click: bool,
}

impl VisualParameters {
    /// Velocity gain relative to a mid-technique channel.
    pub fn speed_scale(&self) -> f32 {
        self.speed / REFERENCE_SPEED
    }

    /// Motion gain from the philosophy rhythm at `time` seconds.
    pub fn rhythm_gain(&self, time: f32) -> f32 {
        self.rhythm
            .modulation(time, self.periodicity_ms / 1000.0, self.drift_frequency)
    }

    /// Alpha inside `[alpha_min, alpha_max]`, cycling at `alpha_speed`.
    pub fn oscillating_alpha(&self, time: f32, phase: f32) -> f32 {
        let k = 0.5 + 0.5 * (phase + time * self.alpha_speed * ALPHA_OSCILLATION_RATE).sin();
        self.alpha_min + (self.alpha_max - self.alpha_min) * k
    }
}

fn palette(scheme: ColorScheme, color: Rgb, accent: Rgb) -> [Rgb; 3] {
    match scheme {
        ColorScheme::Monochromatic => [color.variant(3.0), color, color.variant(7.0)],
        ColorScheme::Analogous => color.analogous(),
        ColorScheme::Complementary => [color, color, color.complementary()],
        ColorScheme::Warm => [color, accent, color.blend(accent, 0.5)],
        ColorScheme::Formal => [color, color, accent],
        ColorScheme::Digital => [color, accent, accent.complementary()],
    }
}

pub fn map_visuals(score: &ScoreVector, identity: &VisualIdentity) -> VisualParameters {
    map_visuals_with(score, identity, &MapperConfig::default())
}

pub fn map_visuals_with(
    score: &ScoreVector,
    identity: &VisualIdentity,
    config: &MapperConfig,
) -> VisualParameters {
    let raw_r = score.representation();
    let raw_p = score.philosophy();
    let raw_a = score.aesthetics();
    let raw_i = score.interpretation();
    let raw_t = score.technique();
    let r = score.normalized(Dimension::Representation);
    let p = score.normalized(Dimension::Philosophy);
    let a = score.normalized(Dimension::Aesthetics);
    let i = score.normalized(Dimension::Interpretation);
    let t = score.normalized(Dimension::Technique);

    let max_particles = config.max_particles.max(1);
    let min_particles = config.min_particles.min(max_particles);
    let particle_count = ((MIN_PARTICLES as f32 + raw_r * PARTICLES_PER_REPRESENTATION).round()
        as usize)
        .clamp(min_particles, max_particles);
    let particle_size = (2.0 + raw_r * 0.8).clamp(PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX);

    let hue = wrap_hue(identity.base_hue + (raw_a - SCORE_MIDPOINT) * HUE_SHIFT_PER_POINT);
    let saturation = 0.40 + a * 0.60;
    let lightness = 0.35 + a * 0.40;

    let shape_variety = if raw_a < 3.0 {
        ShapeVariety::Circle
    } else if raw_a < 6.0 {
        ShapeVariety::Mixed
    } else {
        ShapeVariety::Diverse
    };
    let fade_curve = if raw_i < 3.0 {
        FadeCurve::Linear
    } else if raw_i < 6.0 {
        FadeCurve::Sinusoidal
    } else if raw_i < 8.0 {
        FadeCurve::Polynomial
    } else {
        FadeCurve::Complex
    };

    let color = Hsl::new(hue, saturation, lightness)
        .to_rgb()
        .blend(identity.primary.variant(raw_a), IDENTITY_TINT);

    VisualParameters {
        particle_count,
        particle_size,
        luminosity: 0.5 + r * 0.5,
        hue,
        saturation,
        lightness,
        color,
        palette: palette(identity.scheme, color, identity.accent),
        glow: raw_a >= 7.0,
        glow_color: identity.glow,
        glow_intensity: 0.1 + a * 0.9,
        shape_variety,
        color_scheme: identity.scheme,
        alpha_min: 0.05 + i * 0.05,
        alpha_max: 0.30 + i * 0.20,
        alpha_speed: 5.0 + raw_i * 10.0,
        fade_curve,
        drift_intensity: 1.0 + p * 0.3,
        drift_frequency: 0.5 + p * 1.5,
        periodicity_ms: 2000.0 + raw_p * 500.0,
        rhythm: Rhythm::from_philosophy(raw_p),
        speed: 1.5 + raw_t * 0.8,
        precision: 0.5 + t * 0.5,
        burst_on_click: raw_t > config.burst_threshold,
    }
}
