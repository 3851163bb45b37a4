//! Motion pattern library.
//!
//! Each evaluator moves its particles with one signature pattern. Generators
//! are stateless: given the same [`MotionInput`] they return the same
//! [`MotionDelta`], so all per-particle variation comes in through `phase`
//! and `layer`.

use crate::constants::{DEPTH_LAYERS, MOTION_GAIN, ORBIT_PULL, REFERENCE_FPS};
use crate::identity::MotionPatternKind;
use crate::particle::Particle;
use crate::score::{Dimension, ScoreVector};
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionInput {
    /// Driving score component normalized to `[0, 1]`.
    pub dimension: f32,
    /// Channel motion time in seconds.
    pub time: f32,
    /// Region extent; positions are local to the region.
    pub bounds: Vec2,
    pub position: Vec2,
    pub phase: f32,
    pub layer: u8,
    /// Technique precision in `[0.5, 1]`; weight of the grid snap.
    pub precision: f32,
}

impl MotionInput {
    #[inline]
    fn frames(&self) -> f32 {
        self.time * REFERENCE_FPS
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionDelta {
    Velocity(Vec2),
    Position(Vec2),
}

impl MotionDelta {
    pub fn scaled(self, k: f32) -> Self {
        match self {
            MotionDelta::Velocity(v) => MotionDelta::Velocity(v * k),
            MotionDelta::Position(p) => MotionDelta::Position(p * k),
        }
    }

    /// Scale velocity nudges only. Position pulls keep their own target.
    pub fn with_velocity_gain(self, k: f32) -> Self {
        match self {
            MotionDelta::Velocity(v) => MotionDelta::Velocity(v * k),
            pulled => pulled,
        }
    }

    pub fn apply(self, particle: &mut Particle) {
        match self {
            MotionDelta::Velocity(v) => particle.velocity += v,
            MotionDelta::Position(p) => particle.position += p,
        }
    }

    pub fn magnitude(self) -> f32 {
        match self {
            MotionDelta::Velocity(v) | MotionDelta::Position(v) => v.length(),
        }
    }
}

impl MotionPatternKind {
    /// The score component this pattern responds to.
    pub fn driving_dimension(self) -> Dimension {
        match self {
            MotionPatternKind::Wave | MotionPatternKind::Orbit => Dimension::Philosophy,
            MotionPatternKind::PerspectiveDepth => Dimension::Interpretation,
            MotionPatternKind::Spiral => Dimension::Aesthetics,
            MotionPatternKind::GridSnap => Dimension::Technique,
            MotionPatternKind::Fractal => Dimension::Representation,
        }
    }

    pub fn generate(self, input: &MotionInput) -> MotionDelta {
        match self {
            MotionPatternKind::Wave => wave(input),
            MotionPatternKind::PerspectiveDepth => perspective_depth(input),
            MotionPatternKind::Spiral => spiral(input),
            MotionPatternKind::Orbit => orbit(input),
            MotionPatternKind::GridSnap => grid_snap(input),
            MotionPatternKind::Fractal => fractal(input),
        }
    }

    /// Normalized driving component for `score`.
    pub fn drive(self, score: &ScoreVector) -> f32 {
        score.normalized(self.driving_dimension())
    }
}

/// Brush stroke: a slow sinusoidal nudge.
pub fn wave(input: &MotionInput) -> MotionDelta {
    let p = input.dimension;
    let f = input.frames();
    let amplitude = 2.0 + p;
    let dir = Vec2::new((f * 0.02 * p).sin(), (f * 0.015 * p).cos());
    MotionDelta::Velocity(dir * amplitude * MOTION_GAIN)
}

/// Layers recede toward a vanishing point in the upper middle of the region.
pub fn perspective_depth(input: &MotionInput) -> MotionDelta {
    let i = input.dimension;
    let vanishing = Vec2::new(input.bounds.x * 0.5, input.bounds.y * 0.25);
    let to_vp = vanishing - input.position;
    let distance = to_vp.length();
    let layer = input.layer.min(DEPTH_LAYERS - 1) as f32;
    let scale = 0.8f32.powf(layer + distance / 100.0);
    let depth = 1.0 + i * 4.0;
    MotionDelta::Velocity(to_vp.normalize_or_zero() * scale * depth * MOTION_GAIN)
}

/// Ascending spiral: the radius saws up over each second.
pub fn spiral(input: &MotionInput) -> MotionDelta {
    let a = input.dimension;
    let angle = input.frames() * 0.01 + input.phase;
    let radius = input.time.rem_euclid(1.0) * (1.0 + 2.0 * a) * 20.0;
    let upward = 0.5 + 0.5 * a;
    let v = Vec2::new(
        angle.cos() * radius * 0.01,
        angle.sin() * radius * 0.01 - upward,
    );
    MotionDelta::Velocity(v * MOTION_GAIN)
}

/// Circular synchrony: particles are pulled toward a shared orbit point.
pub fn orbit(input: &MotionInput) -> MotionDelta {
    let p = input.dimension;
    let center = input.bounds * 0.5;
    let radius = (1.5 + 1.5 * p) * 20.0;
    let angular_velocity = 0.01 + 0.01 * p;
    let synchronization = 0.8 + 0.2 * p;
    let angle = input.frames() * angular_velocity + input.phase;
    let target = center + Vec2::new(angle.cos(), angle.sin()) * radius;
    MotionDelta::Position((target - input.position) * ORBIT_PULL * synchronization)
}

/// Geometric structure: moves onto the nearest lattice point, all the way at
/// full precision.
pub fn grid_snap(input: &MotionInput) -> MotionDelta {
    let spacing = 50.0 + 30.0 * input.dimension;
    let nearest = (input.position / spacing).round() * spacing;
    MotionDelta::Position((nearest - input.position) * input.precision.clamp(0.0, 1.0))
}

/// Algorithmic fractal: rotated, shrinking unit vectors summed over levels.
pub fn fractal(input: &MotionInput) -> MotionDelta {
    let r = input.dimension;
    let depth = 3 + (3.0 * r).floor() as u32;
    let scale_factor = 0.5 + 0.3 * r;
    let rotation = (60.0 + 30.0 * r).to_radians();
    let base = rotation * input.time + input.phase;
    let mut sum = Vec2::ZERO;
    let mut weight = 1.0;
    for level in 0..depth {
        let angle = base + rotation * level as f32;
        sum += Vec2::new(angle.cos(), angle.sin()) * weight;
        weight *= scale_factor;
    }
    MotionDelta::Velocity(sum * 0.5 * MOTION_GAIN)
}

/// Phase in `[0, TAU)` from a unit random draw.
#[inline]
pub fn phase_from_unit(u: f32) -> f32 {
    (u * TAU).rem_euclid(TAU)
}
