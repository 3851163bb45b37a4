//! Visibility choreography.
//!
//! Three signals feed a channel's opacity:
//!
//! * `fade`: gallery-walk focus, eased in and out over time.
//! * `base`: the negative-space floor every channel keeps.
//! * `level`: attention from auto-play or hover, ramped per frame.
//!
//! `final = fade * (base + level * (1 - base))`.

use crate::channel::ArtworkId;
use crate::constants::{
    AUTOPLAY_PHASE_MS, DEFAULT_BASE_PROMINENCE, FADE_IN_PER_FRAME, FADE_OUT_PER_FRAME,
    PROMINENCE_RAMP_PER_FRAME,
};

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Combine the three signals; every input is clamped so the result is in `[0, 1]`.
#[inline]
pub fn final_alpha(fade: f32, base: f32, level: f32) -> f32 {
    let (fade, base, level) = (unit(fade), unit(base), unit(level));
    unit(fade * (base + level * (1.0 - base)))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prominence {
    fade: f32,
    base: f32,
    level: f32,
}

impl Prominence {
    pub fn new(base: f32) -> Self {
        Self {
            fade: 1.0,
            base: unit(base),
            level: 0.0,
        }
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }
    pub fn base(&self) -> f32 {
        self.base
    }
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn set_fade(&mut self, v: f32) {
        self.fade = unit(v);
    }
    pub fn set_base(&mut self, v: f32) {
        self.base = unit(v);
    }
    pub fn set_level(&mut self, v: f32) {
        self.level = unit(v);
    }

    pub fn final_alpha(&self) -> f32 {
        final_alpha(self.fade, self.base, self.level)
    }

    pub fn fade_in(&mut self, frame_scale: f32) {
        self.set_fade(self.fade + FADE_IN_PER_FRAME * frame_scale);
    }

    /// Returns true once the fade has reached zero.
    pub fn fade_out(&mut self, frame_scale: f32) -> bool {
        self.set_fade(self.fade - FADE_OUT_PER_FRAME * frame_scale);
        self.fade <= 0.0
    }

    /// Move the attention level one step toward 1 (`up`) or 0.
    pub fn ramp(&mut self, up: bool, step: f32) {
        let step = unit(step);
        if up {
            self.set_level(self.level + step);
        } else {
            self.set_level(self.level - step);
        }
    }
}

impl Default for Prominence {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PROMINENCE)
    }
}

#[derive(Clone, Debug)]
pub struct AutoPlayConfig {
    pub enabled: bool,
    pub phase_ms: f32,
    pub ramp_per_frame: f32,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            phase_ms: AUTOPLAY_PHASE_MS,
            ramp_per_frame: PROMINENCE_RAMP_PER_FRAME,
        }
    }
}

/// Cycles attention across artwork regions in layout order.
#[derive(Clone, Debug)]
pub struct AutoPlay {
    config: AutoPlayConfig,
    regions: Vec<ArtworkId>,
    index: usize,
    elapsed_ms: f32,
    paused: bool,
}

impl AutoPlay {
    pub fn new(config: AutoPlayConfig, regions: Vec<ArtworkId>) -> Self {
        let paused = !config.enabled;
        Self {
            config,
            regions,
            index: 0,
            elapsed_ms: 0.0,
            paused,
        }
    }

    pub fn config(&self) -> &AutoPlayConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&ArtworkId> {
        self.regions.get(self.index)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Stop cycling and restart the phase timer.
    pub fn pause(&mut self) {
        self.paused = true;
        self.elapsed_ms = 0.0;
    }

    pub fn resume(&mut self) {
        if self.config.enabled {
            self.paused = false;
        }
    }

    /// Advance the phase timer. Returns the new current region when it changes.
    pub fn advance(&mut self, delta_ms: f32) -> Option<&ArtworkId> {
        if self.paused || self.regions.is_empty() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return None;
        }
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms < self.config.phase_ms {
            return None;
        }
        self.elapsed_ms = 0.0;
        self.index = (self.index + 1) % self.regions.len();
        self.regions.get(self.index)
    }

    pub fn is_current(&self, artwork: &ArtworkId) -> bool {
        self.current() == Some(artwork)
    }

    /// Ramp step for one tick of `frame_scale` reference frames.
    pub fn ramp_step(&self, frame_scale: f32) -> f32 {
        self.config.ramp_per_frame * frame_scale
    }

    /// Replace the region list, keeping the current region when it survives.
    pub fn set_regions(&mut self, regions: Vec<ArtworkId>) {
        let current = self.current().cloned();
        self.regions = regions;
        self.index = current
            .and_then(|c| self.regions.iter().position(|r| *r == c))
            .unwrap_or(0);
    }
}
