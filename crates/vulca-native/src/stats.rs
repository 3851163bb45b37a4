use glam::Vec2;
use vulca_core::{pack_instances, ChannelView, ParticleInstance, Renderer};

/// Packs every visible channel into one instance buffer, the way a GPU
/// backend would before upload, and keeps byte counts for the log.
#[derive(Default)]
pub struct InstanceRenderer {
    instances: Vec<ParticleInstance>,
    canvas: Vec2,
    pub channels_last_frame: usize,
    pub bytes_last_frame: usize,
    pub peak_instances: usize,
    pub trail_points_last_frame: usize,
}

impl InstanceRenderer {
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }
}

impl Renderer for InstanceRenderer {
    fn begin_frame(&mut self, canvas: Vec2) {
        self.canvas = canvas;
        self.instances.clear();
        self.channels_last_frame = 0;
        self.trail_points_last_frame = 0;
    }

    fn draw_channel(&mut self, view: &ChannelView<'_>) {
        self.channels_last_frame += 1;
        pack_instances(view, &mut self.instances);
        self.trail_points_last_frame += view.particles.iter().map(|p| p.trail.len()).sum::<usize>();
    }

    fn end_frame(&mut self) {
        let bytes: &[u8] = bytemuck::cast_slice(&self.instances);
        self.bytes_last_frame = bytes.len();
        self.peak_instances = self.peak_instances.max(self.instances.len());
    }
}
