//! Backend-agnostic render boundary.
//!
//! The gallery hands each visible channel to a [`Renderer`] as a borrowed
//! [`ChannelView`]. Backends that draw instanced quads can pack the view into
//! [`ParticleInstance`] records and upload them as-is.

use crate::bounds::Bounds;
use crate::channel::{Channel, ChannelId};
use crate::mapper::VisualParameters;
use crate::constants::GLOW_TINT;
use crate::particle::Particle;
use glam::Vec2;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// Canvas-space center.
    pub pos: [f32; 2],
    pub size: f32,
    pub alpha: f32,
    /// Linear rgb plus glow intensity in `w`.
    pub color: [f32; 4],
    /// [`ParticleShape`](crate::particle::ParticleShape) discriminant.
    pub shape: u32,
}

/// Read-only view of one channel for a single frame.
#[derive(Clone, Copy, Debug)]
pub struct ChannelView<'a> {
    pub id: &'a ChannelId,
    pub bounds: Bounds,
    pub particles: &'a [Particle],
    pub params: &'a VisualParameters,
    pub final_alpha: f32,
    pub hovered: bool,
}

impl<'a> ChannelView<'a> {
    pub fn of(channel: &'a Channel) -> Self {
        Self {
            id: channel.id(),
            bounds: channel.bounds(),
            particles: channel.particles(),
            params: channel.params(),
            final_alpha: channel.final_alpha(),
            hovered: channel.is_hovered(),
        }
    }

    /// Opacity of one particle: its own alpha shaped by remaining life, times
    /// the channel's prominence.
    pub fn particle_alpha(&self, p: &Particle) -> f32 {
        (p.alpha * self.params.fade_curve.apply(p.lifespan) * self.final_alpha).clamp(0.0, 1.0)
    }

    /// Glowing channels tint toward their glow color; luminosity dims the rest.
    pub fn instance(&self, p: &Particle) -> ParticleInstance {
        let pos = self.bounds.to_canvas(p.position);
        let params = self.params;
        let (color, glow) = if params.glow {
            let tinted = p
                .color
                .blend(params.glow_color, GLOW_TINT * params.glow_intensity);
            (tinted, params.glow_intensity)
        } else {
            (p.color, 0.0)
        };
        let [r, g, b] = color.to_unit_array().map(|c| c * params.luminosity);
        ParticleInstance {
            pos: pos.to_array(),
            size: p.size,
            alpha: self.particle_alpha(p),
            color: [r, g, b, glow],
            shape: p.shape as u32,
        }
    }

    /// Trail points of `p` in canvas space, oldest first.
    pub fn trail(&self, p: &'a Particle) -> impl Iterator<Item = Vec2> + 'a {
        let origin = self.bounds.origin();
        p.trail.iter().map(move |q| q + origin)
    }
}

/// Append one instance per particle of `view`.
pub fn pack_instances(view: &ChannelView<'_>, out: &mut Vec<ParticleInstance>) {
    out.reserve(view.particles.len());
    out.extend(view.particles.iter().map(|p| view.instance(p)));
}

pub trait Renderer {
    fn begin_frame(&mut self, _canvas: Vec2) {}
    fn draw_channel(&mut self, view: &ChannelView<'_>);
    fn end_frame(&mut self) {}
}

/// Draws nothing; counts what it was given.
#[derive(Clone, Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
    pub channels_drawn: usize,
    pub particles_drawn: usize,
}

impl Renderer for NullRenderer {
    fn begin_frame(&mut self, _canvas: Vec2) {
        self.frames += 1;
    }

    fn draw_channel(&mut self, view: &ChannelView<'_>) {
        self.channels_drawn += 1;
        self.particles_drawn += view.particles.len();
    }
}
