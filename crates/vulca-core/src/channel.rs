//! One particle channel per (artwork, evaluator) pairing.
//!
//! A channel owns its pool and restyles it from the mapped visual parameters.
//! Each tick it layers the evaluator's motion pattern, scaled by technique
//! speed and the philosophy rhythm, over a slow drift, then hands kinematics
//! to the shared [`PhysicsEngine`].

use crate::bounds::Bounds;
use crate::constants::*;
use crate::identity::{Evaluator, VisualIdentity};
use crate::mapper::{map_visuals_with, MapperConfig, VisualParameters};
use crate::motion::{phase_from_unit, MotionInput};
use crate::particle::Particle;
use crate::physics::PhysicsEngine;
use crate::prominence::Prominence;
use crate::score::ScoreVector;
use glam::Vec2;
use log::{debug, info};
use rand::prelude::*;
use std::f32::consts::TAU;
use std::fmt;

/// Opaque artwork key, e.g. `artwork_1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(String);

impl ArtworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ArtworkId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId {
    pub artwork: ArtworkId,
    pub evaluator: Evaluator,
}

impl ChannelId {
    pub fn new(artwork: impl Into<ArtworkId>, evaluator: Evaluator) -> Self {
        Self {
            artwork: artwork.into(),
            evaluator,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.artwork, self.evaluator)
    }
}

/// Content-side description of a channel. Scores may be missing.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSpec {
    pub artwork: ArtworkId,
    pub evaluator: Evaluator,
    pub scores: Option<ScoreVector>,
}

impl ChannelSpec {
    pub fn new(artwork: impl Into<ArtworkId>, evaluator: Evaluator, scores: ScoreVector) -> Self {
        Self {
            artwork: artwork.into(),
            evaluator,
            scores: Some(scores),
        }
    }

    pub fn id(&self) -> ChannelId {
        ChannelId::new(self.artwork.clone(), self.evaluator)
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub mapper: MapperConfig,
    pub trail_length: usize,
    pub base_prominence: f32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            mapper: MapperConfig::default(),
            trail_length: DEFAULT_TRAIL_LENGTH,
            base_prominence: DEFAULT_BASE_PROMINENCE,
        }
    }
}

/// Debug snapshot of a channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelInfo {
    pub id: ChannelId,
    pub particle_count: usize,
    pub active: bool,
    pub hovered: bool,
    pub destroyed: bool,
    pub scores: ScoreVector,
    pub motion: &'static str,
    pub final_alpha: f32,
}

pub struct Channel {
    id: ChannelId,
    scores: ScoreVector,
    identity: &'static VisualIdentity,
    params: VisualParameters,
    config: ChannelConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
    active: bool,
    hovered: bool,
    destroyed: bool,
    prominence: Prominence,
    rng: StdRng,
    motion_time: f32,
    /// Orbit phase shared by the whole channel.
    phase: f32,
}

impl Channel {
    pub fn new(
        id: ChannelId,
        scores: ScoreVector,
        identity: &'static VisualIdentity,
        bounds: Bounds,
        config: ChannelConfig,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let params = map_visuals_with(&scores, identity, &config.mapper);
        let phase = phase_from_unit(rng.gen());
        let prominence = Prominence::new(config.base_prominence);
        let mut channel = Self {
            id,
            scores,
            identity,
            params,
            config,
            bounds: bounds.sanitized(),
            particles: Vec::new(),
            active: true,
            hovered: false,
            destroyed: false,
            prominence,
            rng,
            motion_time: 0.0,
            phase,
        };
        channel.fill_pool();
        debug!(
            "channel {} created with {} particles ({})",
            channel.id,
            channel.particles.len(),
            channel.identity.motion.name()
        );
        channel
    }

    pub fn id(&self) -> &ChannelId {
        &self.id
    }
    pub fn artwork(&self) -> &ArtworkId {
        &self.id.artwork
    }
    pub fn scores(&self) -> &ScoreVector {
        &self.scores
    }
    pub fn identity(&self) -> &'static VisualIdentity {
        self.identity
    }
    pub fn params(&self) -> &VisualParameters {
        &self.params
    }
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    pub fn is_active(&self) -> bool {
        self.active && !self.destroyed
    }
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
    pub fn motion_time(&self) -> f32 {
        self.motion_time
    }
    pub fn prominence(&self) -> &Prominence {
        &self.prominence
    }
    pub fn prominence_mut(&mut self) -> &mut Prominence {
        &mut self.prominence
    }

    pub fn final_alpha(&self) -> f32 {
        self.prominence.final_alpha()
    }

    pub fn is_renderable(&self, epsilon: f32) -> bool {
        self.is_active() && !self.particles.is_empty() && self.final_alpha() >= epsilon
    }

    /// Advance motion and physics by `delta` seconds.
    pub fn tick(&mut self, delta: f32, physics: &PhysicsEngine) {
        if !self.is_active() {
            return;
        }
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let frame_scale = delta * REFERENCE_FPS;
        self.motion_time += delta;

        let extent = self.bounds.extent();
        let kind = self.identity.motion;
        let drive = kind.drive(&self.scores);
        let boost = if self.hovered { HOVER_ACTIVITY_BOOST } else { 1.0 };
        let size_scale = self.size_scale();
        let gain = self.params.speed_scale() * self.params.rhythm_gain(self.motion_time);
        let drift_angle = self.motion_time * self.params.drift_frequency * TAU;
        let drift = self.params.drift_intensity * DRIFT_GAIN;

        for p in self.particles.iter_mut() {
            p.lifespan -= p.decay * frame_scale;
            if p.is_expired() {
                spawn(p, &mut self.rng, &self.params, extent, size_scale);
            }
            p.set_alpha(self.params.oscillating_alpha(self.motion_time, p.phase));
            let input = MotionInput {
                dimension: drive,
                time: self.motion_time,
                bounds: extent,
                position: p.position,
                phase: self.phase + p.phase,
                layer: p.layer,
                precision: self.params.precision,
            };
            kind.generate(&input)
                .with_velocity_gain(gain)
                .scaled(boost)
                .apply(p);
            p.velocity += Vec2::from_angle(drift_angle + p.phase) * drift;
            physics.step(p, extent, &self.id.artwork);
        }
    }

    /// Replace the score vector, resize the pool at its edge and restyle.
    pub fn set_scores(&mut self, scores: ScoreVector) {
        if self.destroyed {
            return;
        }
        self.scores = scores;
        self.params = map_visuals_with(&scores, self.identity, &self.config.mapper);
        let target = self.params.particle_count;
        if self.particles.len() > target {
            self.particles.truncate(target);
        }
        let size_scale = self.size_scale();
        for p in self.particles.iter_mut() {
            style(p, &mut self.rng, &self.params, size_scale);
        }
        self.fill_pool();
        debug!("channel {} rescored, pool {}", self.id, self.particles.len());
    }

    pub fn hover(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        let scale = self.size_scale();
        for p in self.particles.iter_mut() {
            p.size = p.base_size * scale;
        }
    }

    /// Radial burst away from the region center. Reactivates a dormant channel.
    pub fn click(&mut self) {
        if self.destroyed {
            return;
        }
        self.active = true;
        let center = self.bounds.center_local();
        let speed = if self.params.burst_on_click {
            CLICK_IMPULSE_SPEED * BURST_MULTIPLIER
        } else {
            CLICK_IMPULSE_SPEED
        };
        for p in self.particles.iter_mut() {
            let dir = (p.position - center).try_normalize().unwrap_or_else(|| {
                let angle = phase_from_unit(self.rng.gen());
                Vec2::new(angle.cos(), angle.sin())
            });
            p.velocity = dir * speed;
        }
    }

    /// Wind-like push from a drag of `delta` pixels since the last sample.
    pub fn drag_impulse(&mut self, delta: Vec2) {
        if self.destroyed || !delta.is_finite() {
            return;
        }
        let k = DRAG_GAIN * delta.length() / DRAG_STRENGTH_DIVISOR;
        for p in self.particles.iter_mut() {
            p.velocity += delta * k;
        }
    }

    /// Particles outside the new region are clamped on the next step.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds.sanitized();
    }

    pub fn activate(&mut self) {
        if !self.destroyed {
            self.active = true;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Respawn the whole pool and clear transient state. Leaves the channel dormant.
    pub fn reset(&mut self) {
        if self.destroyed {
            return;
        }
        self.particles.clear();
        self.fill_pool();
        self.motion_time = 0.0;
        self.hovered = false;
        self.active = false;
        self.prominence = Prominence::new(self.config.base_prominence);
    }

    /// Release the pool. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.active = false;
        self.hovered = false;
        self.particles = Vec::new();
        info!("channel {} destroyed", self.id);
    }

    pub fn info(&self) -> ChannelInfo {
        ChannelInfo {
            id: self.id.clone(),
            particle_count: self.particles.len(),
            active: self.is_active(),
            hovered: self.hovered,
            destroyed: self.destroyed,
            scores: self.scores,
            motion: self.identity.motion.name(),
            final_alpha: self.final_alpha(),
        }
    }

    fn size_scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    fn fill_pool(&mut self) {
        let target = self.params.particle_count;
        let extent = self.bounds.extent();
        let size_scale = self.size_scale();
        self.particles.reserve(target.saturating_sub(self.particles.len()));
        while self.particles.len() < target {
            let mut p = Particle::new(self.config.trail_length);
            spawn(&mut p, &mut self.rng, &self.params, extent, size_scale);
            self.particles.push(p);
        }
    }
}

fn style(p: &mut Particle, rng: &mut StdRng, params: &VisualParameters, size_scale: f32) {
    p.color = params.palette[rng.gen_range(0..params.palette.len())];
    let shapes = params.shape_variety.shapes();
    p.shape = shapes[rng.gen_range(0..shapes.len())];
    p.set_alpha(rng.gen_range(params.alpha_min..=params.alpha_max));
    p.base_size = (params.particle_size * (1.0 - PARTICLE_SIZE_JITTER * rng.gen::<f32>()))
        .clamp(PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX);
    p.size = p.base_size * size_scale;
}

/// Reinitialize a slot in place: new position, velocity and lifespan, empty trail.
fn spawn(
    p: &mut Particle,
    rng: &mut StdRng,
    params: &VisualParameters,
    extent: Vec2,
    size_scale: f32,
) {
    p.position = Vec2::new(rng.gen::<f32>() * extent.x, rng.gen::<f32>() * extent.y);
    let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * 2.0;
    p.velocity = jitter * SPAWN_SPEED * params.drift_intensity * params.speed_scale();
    p.lifespan = 1.0;
    p.decay = 1.0 / rng.gen_range(PARTICLE_MAX_AGE_MIN..=PARTICLE_MAX_AGE_MAX);
    p.phase = phase_from_unit(rng.gen());
    p.layer = rng.gen_range(0..DEPTH_LAYERS);
    p.trail.clear();
    style(p, rng, params, size_scale);
}
