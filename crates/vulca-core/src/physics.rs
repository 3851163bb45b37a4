//! Shared particle physics.
//!
//! The engine knows nothing about identities or scores. Per particle per tick
//! it applies, in order: cursor attraction, wind, damping, integration, the
//! trail push, and finally the region boundary.

use crate::channel::ArtworkId;
use crate::constants::*;
use crate::noise::{NoiseField, PerlinNoise};
use crate::particle::Particle;
use glam::Vec2;
use std::fmt;

#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    pub attraction_enabled: bool,
    pub attraction_strength: f32,
    pub attraction_range: f32,
    pub attraction_gain: f32,
    pub wind_enabled: bool,
    pub wind_scale: f32,
    pub wind_strength: f32,
    pub wind_speed: f32,
    pub wind_gain: f32,
    pub wind_y_offset: f32,
    pub damping: f32,
    pub trails_enabled: bool,
    pub trail_length: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            attraction_enabled: true,
            attraction_strength: DEFAULT_ATTRACTION_STRENGTH,
            attraction_range: DEFAULT_ATTRACTION_RANGE,
            attraction_gain: ATTRACTION_GAIN,
            wind_enabled: true,
            wind_scale: DEFAULT_WIND_SCALE,
            wind_strength: DEFAULT_WIND_STRENGTH,
            wind_speed: DEFAULT_WIND_SPEED,
            wind_gain: WIND_GAIN,
            wind_y_offset: WIND_Y_TIME_OFFSET,
            damping: DEFAULT_DAMPING,
            trails_enabled: true,
            trail_length: DEFAULT_TRAIL_LENGTH,
        }
    }
}

/// Pointer position in the local coordinates of one artwork region.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub region: ArtworkId,
}

/// Inverse-square attraction magnitude with a hard cutoff at `range`.
///
/// `distance == range` still attracts; anything farther gets exactly zero.
#[inline]
pub fn attraction_force(distance: f32, strength: f32, range: f32) -> f32 {
    if !distance.is_finite() || distance < 0.0 || distance > range {
        return 0.0;
    }
    let d1 = distance + 1.0;
    strength / (d1 * d1)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsDebugInfo {
    pub cursor: Option<CursorState>,
    pub attraction_enabled: bool,
    pub wind_enabled: bool,
    pub trails_enabled: bool,
    pub damping: f32,
    pub time: f32,
}

pub struct PhysicsEngine {
    config: PhysicsConfig,
    cursor: Option<CursorState>,
    time: f32,
    noise: Box<dyn NoiseField>,
}

impl fmt::Debug for PhysicsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsEngine")
            .field("config", &self.config)
            .field("cursor", &self.cursor)
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

impl PhysicsEngine {
    pub fn new(config: PhysicsConfig, noise: Box<dyn NoiseField>) -> Self {
        Self {
            config,
            cursor: None,
            time: 0.0,
            noise,
        }
    }

    pub fn with_seed(config: PhysicsConfig, seed: u64) -> Self {
        Self::new(config, Box::new(PerlinNoise::new(seed)))
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_cursor(&mut self, position: Vec2, region: ArtworkId) {
        if position.is_finite() {
            self.cursor = Some(CursorState { position, region });
        } else {
            self.cursor = None;
        }
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<&CursorState> {
        self.cursor.as_ref()
    }

    /// Move the shared wind clock. Call once per frame, not once per channel.
    pub fn advance(&mut self, delta: f32) {
        if delta.is_finite() && delta > 0.0 {
            self.time += delta * self.config.wind_speed;
        }
    }

    pub fn wind_at(&self, position: Vec2) -> Vec2 {
        let scale = self.config.wind_scale.max(f32::EPSILON);
        let (nx, ny) = (position.x / scale, position.y / scale);
        let wx = self.noise.sample(nx, ny, self.time);
        let wy = self.noise.sample(nx, ny, self.time + self.config.wind_y_offset);
        Vec2::new(wx, wy) * self.config.wind_strength
    }

    /// Velocity change the cursor imparts on a particle at `position`.
    pub fn attraction_at(&self, position: Vec2, region: &ArtworkId) -> Vec2 {
        if !self.config.attraction_enabled {
            return Vec2::ZERO;
        }
        let Some(cursor) = self.cursor.as_ref().filter(|c| &c.region == region) else {
            return Vec2::ZERO;
        };
        let to_cursor = cursor.position - position;
        let distance = to_cursor.length();
        if distance <= 0.0 {
            return Vec2::ZERO;
        }
        let force = attraction_force(
            distance,
            self.config.attraction_strength,
            self.config.attraction_range,
        );
        to_cursor / distance * force * self.config.attraction_gain
    }

    /// Advance one particle inside a region of the given extent.
    pub fn step(&self, particle: &mut Particle, extent: Vec2, region: &ArtworkId) {
        particle.velocity += self.attraction_at(particle.position, region);
        if self.config.wind_enabled {
            particle.velocity += self.wind_at(particle.position) * self.config.wind_gain;
        }
        particle.velocity *= self.config.damping;
        particle.position += particle.velocity;
        if self.config.trails_enabled {
            particle.trail.push(particle.position);
        }
        contain(particle, extent);
    }

    pub fn set_attraction_enabled(&mut self, enabled: bool) {
        self.config.attraction_enabled = enabled;
    }

    pub fn set_wind_enabled(&mut self, enabled: bool) {
        self.config.wind_enabled = enabled;
    }

    pub fn set_trails_enabled(&mut self, enabled: bool) {
        self.config.trails_enabled = enabled;
    }

    pub fn set_attraction_strength(&mut self, strength: f32) {
        if strength.is_finite() {
            self.config.attraction_strength = strength.max(0.0);
        }
    }

    pub fn debug_info(&self) -> PhysicsDebugInfo {
        PhysicsDebugInfo {
            cursor: self.cursor.clone(),
            attraction_enabled: self.config.attraction_enabled,
            wind_enabled: self.config.wind_enabled,
            trails_enabled: self.config.trails_enabled,
            damping: self.config.damping,
            time: self.time,
        }
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::with_seed(PhysicsConfig::default(), 0)
    }
}

/// Reflect velocity on any axis that left `[0, extent]`, then clamp.
fn contain(particle: &mut Particle, extent: Vec2) {
    let p = &mut particle.position;
    let v = &mut particle.velocity;
    if p.x < 0.0 {
        v.x = v.x.abs();
    } else if p.x > extent.x {
        v.x = -v.x.abs();
    }
    if p.y < 0.0 {
        v.y = v.y.abs();
    } else if p.y > extent.y {
        v.y = -v.y.abs();
    }
    if !p.is_finite() {
        *p = extent * 0.5;
        *v = Vec2::ZERO;
    }
    *p = p.clamp(Vec2::ZERO, extent);
}
