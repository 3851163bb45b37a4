//! Frame accounting.
//!
//! FPS is derived from the deltas the gallery is stepped with rather than a
//! wall clock, so headless runs report the rate they simulate.

use crate::constants::FPS_UPDATE_INTERVAL_SEC;

/// Per-frame report emitted by the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameDiagnostic {
    /// Seconds simulated this frame.
    pub delta: f32,
    /// Frames per second, refreshed every update interval.
    pub fps: f32,
    pub frame: u64,
    /// Channels that passed the render threshold.
    pub rendered_channels: usize,
    pub rendered_particles: usize,
}

#[derive(Clone, Debug)]
pub struct FrameStats {
    frame_count: u64,
    elapsed: f32,
    fps: f32,
    window_frames: u64,
    window_elapsed: f32,
    update_interval: f32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::with_interval(FPS_UPDATE_INTERVAL_SEC)
    }

    pub fn with_interval(update_interval: f32) -> Self {
        Self {
            frame_count: 0,
            elapsed: 0.0,
            fps: 0.0,
            window_frames: 0,
            window_elapsed: 0.0,
            update_interval: update_interval.max(f32::EPSILON),
        }
    }

    /// Record one frame of `delta` seconds.
    pub fn record(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.frame_count += 1;
        self.elapsed += delta;
        self.window_frames += 1;
        self.window_elapsed += delta;
        if self.window_elapsed >= self.update_interval {
            self.fps = self.window_frames as f32 / self.window_elapsed;
            self.window_frames = 0;
            self.window_elapsed = 0.0;
        }
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_settles_after_first_window() {
        let mut s = FrameStats::new();
        for _ in 0..29 {
            s.record(1.0 / 60.0);
        }
        assert_eq!(s.fps(), 0.0);
        for _ in 0..2 {
            s.record(1.0 / 60.0);
        }
        assert!((s.fps() - 60.0).abs() < 1.0);
        assert_eq!(s.frame(), 31);
    }
}
