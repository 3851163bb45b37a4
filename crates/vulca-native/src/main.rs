mod content;
mod stats;

use anyhow::Context;
use glam::Vec2;
use std::time::Duration;
use vulca_core::{
    constants::DEFAULT_FRAME_DELTA, ArtworkId, Clock, Gallery, GalleryConfig, GalleryEvent,
    GridLayout, InteractionKind, ManualClock, PointerKind, PointerSample, SystemClock,
};

const CANVAS_W: f32 = 1280.0;
const CANVAS_H: f32 = 720.0;
const FRAMES: u64 = 60 * 20;
const LOG_EVERY: u64 = 60;

/// Scripted pointer for the headless run: hover and circle over the first
/// artwork, press and drag across it, release, then leave the canvas.
fn pointer_at(frame: u64) -> Option<PointerSample> {
    let t = frame as f32 / 60.0;
    let center = Vec2::new(CANVAS_W * 0.25, CANVAS_H * 0.25);
    match frame {
        120..=299 if frame % 2 == 0 => {
            let p = center + Vec2::new(t.cos(), t.sin()) * 80.0;
            Some(PointerSample::moved(p.x, p.y))
        }
        300 => Some(PointerSample::new(center.x, center.y, PointerKind::Down)),
        301..=359 => {
            let p = center + Vec2::new((frame - 300) as f32 * 2.0, 0.0);
            Some(PointerSample::moved(p.x, p.y))
        }
        360 => Some(PointerSample::new(center.x + 120.0, center.y, PointerKind::Up)),
        420 => Some(PointerSample::moved(-10.0, -10.0)),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    for artwork in &content::ARTWORKS {
        if let Some(avg) = content::summary(artwork) {
            log::info!("{} {}: consensus {:?}", artwork.id, artwork.title, avg.to_array());
        }
    }

    // --realtime paces frames against the wall clock instead of a scripted one
    let realtime = std::env::args().any(|a| a == "--realtime");
    let manual = ManualClock::new(0);
    let system = SystemClock::new();
    let clock: Box<dyn Clock> = if realtime {
        Box::new(system.clone())
    } else {
        Box::new(manual.clone())
    };

    let layout = GridLayout::new(content::artwork_ids(), CANVAS_W, CANVAS_H);
    let config = GalleryConfig {
        seed: 0x5EED,
        ..GalleryConfig::default()
    };
    let mut gallery = Gallery::new(config, content::channel_specs(), Box::new(layout), clock)
        .context("building gallery")?;
    log::info!("running {FRAMES} frames, realtime: {realtime}");

    let mut renderer = stats::InstanceRenderer::default();
    let (mut hovers, mut clicks, mut drags) = (0usize, 0usize, 0usize);

    let mut last_ms = 0;
    for frame in 0..FRAMES {
        let delta = if realtime {
            std::thread::sleep(Duration::from_millis(16));
            let now = system.now_ms();
            let delta = now.saturating_sub(last_ms) as f32 / 1000.0;
            last_ms = now;
            delta
        } else {
            manual.set(frame * 1000 / 60);
            DEFAULT_FRAME_DELTA
        };

        if let Some(sample) = pointer_at(frame) {
            gallery.handle_pointer(sample);
        }
        match frame {
            600 => {
                let applied = gallery.resize(0.0, 0.0)?;
                log::info!("resize to 0x0 applied: {applied}");
                gallery.resize(CANVAS_W * 1.25, CANVAS_H * 1.25)?;
            }
            700 => gallery.set_walk_focus(Some(ArtworkId::from("artwork_3")))?,
            800 => gallery.physics_mut().set_wind_enabled(false),
            900 => {
                let physics = gallery.physics_mut();
                physics.set_wind_enabled(true);
                physics.set_attraction_strength(8000.0);
            }
            1000 => gallery.set_walk_focus(None)?,
            1100 => gallery.physics_mut().set_attraction_enabled(false),
            _ => {}
        }

        gallery.tick(delta, &mut renderer);

        for event in gallery.drain_events() {
            match event {
                GalleryEvent::Interaction(e) => match e.kind {
                    InteractionKind::Hover => hovers += 1,
                    InteractionKind::Click => clicks += 1,
                    InteractionKind::Drag => drags += 1,
                },
                GalleryEvent::Frame(d) if d.frame % LOG_EVERY == 0 => {
                    log::info!(
                        "frame {:>4} fps {:>5.1} channels {:>2} particles {:>4} buffer {} B trails {} auto-play {}",
                        d.frame,
                        d.fps,
                        d.rendered_channels,
                        d.rendered_particles,
                        renderer.bytes_last_frame,
                        renderer.trail_points_last_frame,
                        gallery
                            .autoplay()
                            .current()
                            .map_or("-", |a| a.as_str()),
                    );
                }
                GalleryEvent::Frame(_) => {}
            }
        }
    }

    log::info!(
        "interactions: {hovers} hover, {clicks} click, {drags} drag; peak instances {}, last frame {} on {:?}",
        renderer.peak_instances,
        renderer.instances().len(),
        renderer.canvas()
    );
    log::info!("physics: {:?}", gallery.physics().debug_info());
    for ch in gallery.channels().iter().take(6) {
        log::info!("{:?}", ch.info());
    }

    gallery.destroy();
    gallery.destroy();
    Ok(())
}
