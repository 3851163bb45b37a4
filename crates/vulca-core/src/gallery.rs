//! The orchestrator: owns every channel and drives them once per frame.
//!
//! Frame order in [`Gallery::step`]:
//!
//! 1. fire due scheduler tasks (auto-play resume),
//! 2. advance the shared wind clock,
//! 3. ramp prominence from auto-play, or from hover while paused,
//! 4. ease gallery-walk fades, waking channels the walk brought into focus,
//! 5. tick every active channel,
//! 6. record frame stats and emit a [`FrameDiagnostic`].

use crate::channel::{ArtworkId, Channel, ChannelConfig, ChannelId, ChannelSpec};
use crate::constants::{IDLE_RESUME_MS, REFERENCE_FPS, RENDER_ALPHA_EPSILON};
use crate::context::GalleryContext;
use crate::diagnostics::{FrameDiagnostic, FrameStats};
use crate::error::{GalleryError, Result};
use crate::interaction::{InteractionManager, PointerSample, RegionAction};
use crate::layout::RegionProvider;
use crate::physics::{PhysicsConfig, PhysicsEngine};
use crate::prominence::{AutoPlay, AutoPlayConfig};
use crate::render::{ChannelView, Renderer};
use crate::scheduler::{Clock, TaskHandle, TaskScheduler};
use crate::score::ScoreVector;
use fnv::FnvHashMap;
use log::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub seed: u64,
    pub channel: ChannelConfig,
    pub physics: PhysicsConfig,
    pub autoplay: AutoPlayConfig,
    /// Channels whose final alpha falls below this are not drawn.
    pub render_epsilon: f32,
    pub idle_resume_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            channel: ChannelConfig::default(),
            physics: PhysicsConfig::default(),
            autoplay: AutoPlayConfig::default(),
            render_epsilon: RENDER_ALPHA_EPSILON,
            idle_resume_ms: IDLE_RESUME_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Hover,
    Click,
    Drag,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub channel: ChannelId,
    pub scores: ScoreVector,
    pub timestamp_ms: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent {
    Interaction(InteractionEvent),
    Frame(FrameDiagnostic),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryTask {
    ResumeAutoPlay,
}

/// Per-channel walk bookkeeping, parallel to `Gallery::channels`.
#[derive(Clone, Copy, Debug, Default)]
struct WalkFlags {
    /// Brought into focus by `set_walk_focus`; the next fade-in reactivates it.
    wake: bool,
    /// Deactivated through `Gallery::deactivate`; the walk leaves it dormant.
    held: bool,
}

pub struct Gallery {
    config: GalleryConfig,
    context: GalleryContext,
    layout: Box<dyn RegionProvider>,
    clock: Box<dyn Clock>,
    channels: Vec<Channel>,
    index: FnvHashMap<ChannelId, usize>,
    autoplay: AutoPlay,
    interaction: InteractionManager,
    scheduler: TaskScheduler<GalleryTask>,
    resume_task: Option<TaskHandle>,
    walk_focus: Option<ArtworkId>,
    walk: Vec<WalkFlags>,
    stats: FrameStats,
    events: Vec<GalleryEvent>,
    actions: Vec<RegionAction>,
    due: Vec<GalleryTask>,
    destroyed: bool,
}

impl Gallery {
    /// Build a gallery with the built-in identities and a seeded wind field.
    pub fn new(
        config: GalleryConfig,
        specs: Vec<ChannelSpec>,
        layout: Box<dyn RegionProvider>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let context = GalleryContext::seeded(config.physics.clone(), config.seed);
        Self::with_context(config, context, specs, layout, clock)
    }

    pub fn with_context(
        config: GalleryConfig,
        context: GalleryContext,
        specs: Vec<ChannelSpec>,
        layout: Box<dyn RegionProvider>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let mut channel_config = config.channel.clone();
        channel_config.trail_length = context.physics.config().trail_length;

        let mut channels = Vec::with_capacity(specs.len());
        let mut index = FnvHashMap::default();
        for (i, spec) in specs.into_iter().enumerate() {
            let id = spec.id();
            if index.contains_key(&id) {
                return Err(GalleryError::DuplicateChannel(id));
            }
            let bounds = layout
                .bounds_of(&spec.artwork)
                .ok_or_else(|| GalleryError::MissingRegion(spec.artwork.clone()))?;
            let scores = spec.scores.unwrap_or_else(|| {
                warn!("no scores for {id}, using neutral values");
                ScoreVector::neutral()
            });
            let identity = context.identities.get(spec.evaluator);
            // Derive per-channel RNGs from the base seed
            let seed = config.seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            index.insert(id.clone(), channels.len());
            channels.push(Channel::new(
                id,
                scores,
                identity,
                bounds,
                channel_config.clone(),
                seed,
            ));
        }

        let regions = regions_with_channels(layout.as_ref(), &channels);
        let walk = vec![WalkFlags::default(); channels.len()];
        let now = clock.now_ms();
        info!(
            "gallery ready: {} channels over {} regions",
            channels.len(),
            regions.len()
        );
        Ok(Self {
            autoplay: AutoPlay::new(config.autoplay.clone(), regions),
            interaction: InteractionManager::with_idle_threshold(now, config.idle_resume_ms),
            config,
            context,
            layout,
            clock,
            channels,
            index,
            scheduler: TaskScheduler::new(),
            resume_task: None,
            walk_focus: None,
            walk,
            stats: FrameStats::new(),
            events: Vec::new(),
            actions: Vec::new(),
            due: Vec::new(),
            destroyed: false,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
    pub fn channel(&self, id: &ChannelId) -> Option<&Channel> {
        self.index.get(id).map(|&i| &self.channels[i])
    }
    pub fn autoplay(&self) -> &AutoPlay {
        &self.autoplay
    }
    pub fn interaction(&self) -> &InteractionManager {
        &self.interaction
    }
    pub fn physics(&self) -> &PhysicsEngine {
        &self.context.physics
    }
    pub fn physics_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.context.physics
    }
    pub fn layout(&self) -> &dyn RegionProvider {
        self.layout.as_ref()
    }
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
    pub fn walk_focus(&self) -> Option<&ArtworkId> {
        self.walk_focus.as_ref()
    }
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
    pub fn is_resume_pending(&self) -> bool {
        self.resume_task
            .is_some_and(|h| self.scheduler.is_pending(h))
    }

    /// Step the simulation, then hand every visible channel to `renderer`.
    pub fn tick(&mut self, delta: f32, renderer: &mut dyn Renderer) {
        if self.destroyed {
            return;
        }
        self.step(delta);
        renderer.begin_frame(self.layout.size());
        let epsilon = self.config.render_epsilon;
        for ch in self.channels.iter().filter(|c| c.is_renderable(epsilon)) {
            renderer.draw_channel(&ChannelView::of(ch));
        }
        renderer.end_frame();
    }

    /// Headless frame: everything [`Gallery::tick`] does except drawing.
    pub fn step(&mut self, delta: f32) {
        if self.destroyed {
            return;
        }
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let frame_scale = delta * REFERENCE_FPS;
        let now = self.clock.now_ms();

        self.run_due_tasks(now);
        self.context.physics.advance(delta);
        self.update_attention(delta, frame_scale);
        self.update_walk_fade(frame_scale);

        for ch in self.channels.iter_mut() {
            ch.tick(delta, &self.context.physics);
        }

        self.stats.record(delta);
        let epsilon = self.config.render_epsilon;
        let (rendered_channels, rendered_particles) = self
            .channels
            .iter()
            .filter(|c| c.is_renderable(epsilon))
            .fold((0, 0), |(c, p), ch| (c + 1, p + ch.particles().len()));
        self.events.push(GalleryEvent::Frame(FrameDiagnostic {
            delta,
            fps: self.stats.fps(),
            frame: self.stats.frame(),
            rendered_channels,
            rendered_particles,
        }));
    }

    /// Feed one pointer sample. Ignored after teardown.
    pub fn handle_pointer(&mut self, sample: PointerSample) {
        if self.destroyed {
            return;
        }
        let now = self.clock.now_ms();
        let mut actions = std::mem::take(&mut self.actions);
        let outcome = self
            .interaction
            .handle(sample, self.layout.as_ref(), now, &mut actions);
        match outcome.cursor {
            Some(c) => self.context.physics.set_cursor(c.position, c.region),
            None => self.context.physics.clear_cursor(),
        }

        for action in actions.drain(..) {
            match action {
                RegionAction::HoverEnter(artwork) => {
                    self.for_region(&artwork, now, Some(InteractionKind::Hover), |ch| {
                        ch.hover(true)
                    });
                }
                RegionAction::HoverLeave(artwork) => {
                    self.for_region(&artwork, now, None, |ch| ch.hover(false));
                }
                RegionAction::Click(artwork) => {
                    debug!("click on {artwork}");
                    for (ch, flags) in self.channels.iter().zip(self.walk.iter_mut()) {
                        if ch.artwork() == &artwork {
                            flags.held = false;
                        }
                    }
                    self.for_region(&artwork, now, Some(InteractionKind::Click), |ch| ch.click());
                }
                RegionAction::Drag(impulse) => {
                    let delta = impulse.delta;
                    self.for_region(&impulse.artwork, now, Some(InteractionKind::Drag), |ch| {
                        ch.drag_impulse(delta)
                    });
                }
            }
        }
        self.actions = actions;

        if outcome.discrete {
            self.defer_autoplay(now);
        }
    }

    /// Apply a new canvas size. Returns `Ok(false)` when the size was ignored.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool> {
        self.ensure_live()?;
        if !self.layout.resize(width, height) {
            return Ok(false);
        }
        for ch in self.channels.iter_mut() {
            if let Some(b) = self.layout.bounds_of(ch.artwork()) {
                ch.set_bounds(b);
            }
        }
        let regions = regions_with_channels(self.layout.as_ref(), &self.channels);
        self.autoplay.set_regions(regions);
        info!("gallery resized to {width}x{height}");
        Ok(true)
    }

    /// Focus the gallery walk on one artwork, or clear it with `None`.
    pub fn set_walk_focus(&mut self, artwork: Option<ArtworkId>) -> Result<()> {
        self.ensure_live()?;
        if let Some(a) = artwork.as_ref() {
            if self.layout.bounds_of(a).is_none() {
                return Err(GalleryError::MissingRegion(a.clone()));
            }
        }
        debug!("walk focus: {artwork:?}");
        let focused = |focus: &Option<ArtworkId>, ch: &Channel| {
            focus.as_ref().map_or(true, |a| a == ch.artwork())
        };
        for (ch, flags) in self.channels.iter().zip(self.walk.iter_mut()) {
            let was = focused(&self.walk_focus, ch);
            let now = focused(&artwork, ch);
            flags.wake = now && (flags.wake || !was) && !flags.held;
        }
        self.walk_focus = artwork;
        Ok(())
    }

    /// Put one channel to sleep. The walk fade will not wake it.
    pub fn deactivate(&mut self, id: &ChannelId) -> Result<()> {
        let i = self.live_index(id)?;
        self.channels[i].deactivate();
        self.walk[i] = WalkFlags {
            wake: false,
            held: true,
        };
        debug!("channel {id} deactivated");
        Ok(())
    }

    pub fn activate(&mut self, id: &ChannelId) -> Result<()> {
        let i = self.live_index(id)?;
        self.channels[i].activate();
        self.walk[i].held = false;
        debug!("channel {id} activated");
        Ok(())
    }

    pub fn set_scores(&mut self, id: &ChannelId, scores: ScoreVector) -> Result<()> {
        let i = self.live_index(id)?;
        self.channels[i].set_scores(scores);
        Ok(())
    }

    /// Respawn every channel and leave it dormant until clicked or activated.
    pub fn reset_all(&mut self) -> Result<()> {
        self.ensure_live()?;
        for ch in self.channels.iter_mut() {
            ch.reset();
        }
        for flags in self.walk.iter_mut() {
            flags.wake = false;
        }
        self.interaction.reset();
        self.context.physics.clear_cursor();
        info!("all channels reset");
        Ok(())
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GalleryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Release all channels and pending tasks. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for ch in self.channels.iter_mut() {
            ch.destroy();
        }
        self.scheduler.clear();
        self.resume_task = None;
        self.interaction.reset();
        self.context.physics.clear_cursor();
        self.destroyed = true;
        info!("gallery destroyed");
    }

    fn ensure_live(&self) -> Result<()> {
        if self.destroyed {
            Err(GalleryError::Destroyed)
        } else {
            Ok(())
        }
    }

    fn live_index(&self, id: &ChannelId) -> Result<usize> {
        self.ensure_live()?;
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GalleryError::UnknownChannel(id.clone()))
    }

    fn for_region(
        &mut self,
        artwork: &ArtworkId,
        now: u64,
        kind: Option<InteractionKind>,
        mut f: impl FnMut(&mut Channel),
    ) {
        for ch in self.channels.iter_mut().filter(|c| c.artwork() == artwork) {
            f(ch);
            if let Some(kind) = kind {
                self.events.push(GalleryEvent::Interaction(InteractionEvent {
                    kind,
                    channel: ch.id().clone(),
                    scores: *ch.scores(),
                    timestamp_ms: now,
                }));
            }
        }
    }

    /// Pause auto-play and (re)arm the resume task.
    fn defer_autoplay(&mut self, now: u64) {
        if !self.autoplay.is_paused() {
            debug!("auto-play paused by interaction");
        }
        self.autoplay.pause();
        if let Some(h) = self.resume_task.take() {
            self.scheduler.cancel(h);
        }
        let delay = self.interaction.idle_resume_ms();
        self.resume_task = Some(
            self.scheduler
                .schedule_after(now, delay, GalleryTask::ResumeAutoPlay),
        );
    }

    fn run_due_tasks(&mut self, now: u64) {
        let mut due = std::mem::take(&mut self.due);
        self.scheduler.poll(now, &mut due);
        for task in due.drain(..) {
            match task {
                GalleryTask::ResumeAutoPlay => {
                    self.resume_task = None;
                    if self.interaction.should_resume(now) {
                        self.autoplay.resume();
                        info!("auto-play resumed");
                    } else {
                        let wait = self
                            .interaction
                            .last_interaction_ms()
                            .saturating_add(self.interaction.idle_resume_ms());
                        self.resume_task =
                            Some(self.scheduler.schedule_at(wait, GalleryTask::ResumeAutoPlay));
                    }
                }
            }
        }
        self.due = due;
    }

    fn update_attention(&mut self, delta: f32, frame_scale: f32) {
        if !self.autoplay.is_paused() {
            if let Some(region) = self.autoplay.advance(delta * 1000.0) {
                info!("auto-play moved to {region}");
            }
        }
        let step = self.autoplay.ramp_step(frame_scale);
        let paused = self.autoplay.is_paused();
        for ch in self.channels.iter_mut() {
            let up = if paused {
                self.interaction.hovered() == Some(ch.artwork())
            } else {
                self.autoplay.is_current(ch.artwork())
            };
            ch.prominence_mut().ramp(up, step);
        }
    }

    fn update_walk_fade(&mut self, frame_scale: f32) {
        for (ch, flags) in self.channels.iter_mut().zip(self.walk.iter_mut()) {
            let focused = self
                .walk_focus
                .as_ref()
                .map_or(true, |a| a == ch.artwork());
            if focused {
                if std::mem::take(&mut flags.wake) {
                    ch.activate();
                }
                ch.prominence_mut().fade_in(frame_scale);
            } else if ch.prominence().fade() > 0.0 && ch.prominence_mut().fade_out(frame_scale) {
                ch.deactivate();
            }
        }
    }
}

fn regions_with_channels(layout: &dyn RegionProvider, channels: &[Channel]) -> Vec<ArtworkId> {
    layout
        .artworks()
        .into_iter()
        .filter(|a| channels.iter().any(|c| c.artwork() == a))
        .collect()
}
