//! Pointer handling.
//!
//! Samples are translated into region-level actions rather than applied to
//! channels directly; the gallery fans each action out to every channel of
//! the region. Each region moves through idle, hovered and dragging.

use crate::channel::ArtworkId;
use crate::constants::IDLE_RESUME_MS;
use crate::layout::RegionProvider;
use crate::physics::CursorState;
use glam::Vec2;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Move,
    Down,
    Up,
}

/// One pointer sample in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub kind: PointerKind,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, kind: PointerKind) -> Self {
        Self { x, y, kind }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Move)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionState {
    Idle,
    Hovered,
    Dragging,
}

/// Incremental pointer movement while a region is being dragged.
#[derive(Clone, Debug, PartialEq)]
pub struct DragImpulse {
    pub artwork: ArtworkId,
    pub delta: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegionAction {
    HoverEnter(ArtworkId),
    HoverLeave(ArtworkId),
    Click(ArtworkId),
    Drag(DragImpulse),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerOutcome {
    /// Latest cursor, or `None` outside every region.
    pub cursor: Option<CursorState>,
    /// The sample produced at least one discrete interaction.
    pub discrete: bool,
}

#[derive(Clone, Debug)]
pub struct InteractionManager {
    hovered: Option<ArtworkId>,
    dragging: Option<ArtworkId>,
    last_pointer: Option<Vec2>,
    last_interaction_ms: u64,
    idle_resume_ms: u64,
}

impl InteractionManager {
    pub fn new(now_ms: u64) -> Self {
        Self::with_idle_threshold(now_ms, IDLE_RESUME_MS)
    }

    pub fn with_idle_threshold(now_ms: u64, idle_resume_ms: u64) -> Self {
        Self {
            hovered: None,
            dragging: None,
            last_pointer: None,
            last_interaction_ms: now_ms,
            idle_resume_ms,
        }
    }

    pub fn hovered(&self) -> Option<&ArtworkId> {
        self.hovered.as_ref()
    }

    pub fn dragging(&self) -> Option<&ArtworkId> {
        self.dragging.as_ref()
    }

    pub fn state_of(&self, artwork: &ArtworkId) -> RegionState {
        if self.dragging.as_ref() == Some(artwork) {
            RegionState::Dragging
        } else if self.hovered.as_ref() == Some(artwork) {
            RegionState::Hovered
        } else {
            RegionState::Idle
        }
    }

    pub fn last_interaction_ms(&self) -> u64 {
        self.last_interaction_ms
    }

    pub fn idle_resume_ms(&self) -> u64 {
        self.idle_resume_ms
    }

    /// True once the pointer has been quiet for the idle threshold.
    pub fn should_resume(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_interaction_ms) >= self.idle_resume_ms
    }

    pub fn handle(
        &mut self,
        sample: PointerSample,
        regions: &dyn RegionProvider,
        now_ms: u64,
        out: &mut Vec<RegionAction>,
    ) -> PointerOutcome {
        let start = out.len();
        let point = sample.position();
        if !point.is_finite() {
            return PointerOutcome {
                cursor: None,
                discrete: false,
            };
        }
        let region = regions.region_at(point);
        let cursor = region.as_ref().and_then(|r| {
            regions.bounds_of(r).map(|b| CursorState {
                position: b.to_local(point),
                region: r.clone(),
            })
        });

        match sample.kind {
            PointerKind::Move => {
                if let (Some(dragged), Some(prev)) = (self.dragging.clone(), self.last_pointer) {
                    let delta = point - prev;
                    if delta != Vec2::ZERO {
                        out.push(RegionAction::Drag(DragImpulse {
                            artwork: dragged,
                            delta,
                        }));
                    }
                }
                self.update_hover(region, out);
            }
            PointerKind::Down => {
                self.update_hover(region.clone(), out);
                if let Some(r) = region {
                    debug!("press on {r}");
                    self.dragging = Some(r.clone());
                    out.push(RegionAction::Click(r));
                }
            }
            PointerKind::Up => {
                // dragging -> idle, then idle -> hovered if still inside
                if let Some(dragged) = self.dragging.take() {
                    if self.hovered.as_ref() == Some(&dragged) {
                        self.hovered = None;
                    }
                    out.push(RegionAction::HoverLeave(dragged));
                }
                self.update_hover(region, out);
            }
        }

        self.last_pointer = Some(point);
        // a release only counts when it ended a drag, and that always emits
        let discrete = out.len() > start;
        if discrete {
            self.last_interaction_ms = now_ms;
        }
        PointerOutcome { cursor, discrete }
    }

    /// Forget hover and drag state, e.g. on teardown.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.dragging = None;
        self.last_pointer = None;
    }

    fn update_hover(&mut self, region: Option<ArtworkId>, out: &mut Vec<RegionAction>) {
        if region == self.hovered {
            return;
        }
        if let Some(old) = self.hovered.take() {
            if self.dragging.as_ref() != Some(&old) {
                out.push(RegionAction::HoverLeave(old));
            }
        }
        if let Some(new) = region.as_ref() {
            if self.dragging.as_ref() != Some(new) {
                out.push(RegionAction::HoverEnter(new.clone()));
            }
        }
        self.hovered = region;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridLayout;

    fn layout() -> GridLayout {
        GridLayout::new(
            vec![ArtworkId::from("left"), ArtworkId::from("right")],
            200.0,
            100.0,
        )
    }

    #[test]
    fn enter_and_leave_follow_the_pointer() {
        let g = layout();
        let mut im = InteractionManager::new(0);
        let mut out = Vec::new();
        im.handle(PointerSample::moved(10.0, 10.0), &g, 1, &mut out);
        im.handle(PointerSample::moved(150.0, 10.0), &g, 2, &mut out);
        assert_eq!(
            out,
            vec![
                RegionAction::HoverEnter(ArtworkId::from("left")),
                RegionAction::HoverLeave(ArtworkId::from("left")),
                RegionAction::HoverEnter(ArtworkId::from("right")),
            ]
        );
        assert_eq!(im.state_of(&ArtworkId::from("right")), RegionState::Hovered);
    }

    #[test]
    fn cursor_is_region_local() {
        let g = layout();
        let mut im = InteractionManager::new(0);
        let mut out = Vec::new();
        let o = im.handle(PointerSample::moved(130.0, 40.0), &g, 0, &mut out);
        let c = o.cursor.unwrap();
        assert_eq!(c.region, ArtworkId::from("right"));
        assert_eq!(c.position, Vec2::new(30.0, 40.0));
        let o = im.handle(PointerSample::moved(500.0, 40.0), &g, 0, &mut out);
        assert!(o.cursor.is_none());
    }

    #[test]
    fn drag_reports_incremental_deltas() {
        let g = layout();
        let mut im = InteractionManager::new(0);
        let mut out = Vec::new();
        im.handle(PointerSample::new(10.0, 10.0, PointerKind::Down), &g, 0, &mut out);
        assert_eq!(im.state_of(&ArtworkId::from("left")), RegionState::Dragging);
        out.clear();
        im.handle(PointerSample::moved(14.0, 10.0), &g, 0, &mut out);
        im.handle(PointerSample::moved(20.0, 13.0), &g, 0, &mut out);
        let deltas: Vec<Vec2> = out
            .iter()
            .filter_map(|a| match a {
                RegionAction::Drag(d) => Some(d.delta),
                _ => None,
            })
            .collect();
        assert_eq!(deltas, vec![Vec2::new(4.0, 0.0), Vec2::new(6.0, 3.0)]);
    }

    #[test]
    fn release_inside_returns_to_hovered() {
        let g = layout();
        let mut im = InteractionManager::new(0);
        let mut out = Vec::new();
        im.handle(PointerSample::new(10.0, 10.0, PointerKind::Down), &g, 0, &mut out);
        im.handle(PointerSample::new(12.0, 10.0, PointerKind::Up), &g, 0, &mut out);
        assert_eq!(im.state_of(&ArtworkId::from("left")), RegionState::Hovered);
        im.handle(PointerSample::new(12.0, 10.0, PointerKind::Down), &g, 0, &mut out);
        im.handle(PointerSample::new(300.0, 10.0, PointerKind::Up), &g, 0, &mut out);
        assert_eq!(im.state_of(&ArtworkId::from("left")), RegionState::Idle);
    }

    #[test]
    fn stray_release_is_not_an_interaction() {
        let g = layout();
        let mut im = InteractionManager::new(0);
        let mut out = Vec::new();
        let o = im.handle(PointerSample::new(500.0, 10.0, PointerKind::Up), &g, 2_000, &mut out);
        assert!(!o.discrete);
        assert!(out.is_empty());
        assert_eq!(im.last_interaction_ms(), 0);

        im.handle(PointerSample::new(10.0, 10.0, PointerKind::Down), &g, 3_000, &mut out);
        let o = im.handle(PointerSample::new(500.0, 10.0, PointerKind::Up), &g, 3_500, &mut out);
        assert!(o.discrete);
        assert_eq!(im.last_interaction_ms(), 3_500);
    }

    #[test]
    fn idle_threshold_gates_resume() {
        let g = layout();
        let mut im = InteractionManager::new(0);
        let mut out = Vec::new();
        im.handle(PointerSample::moved(10.0, 10.0), &g, 1_000, &mut out);
        assert!(!im.should_resume(3_999));
        assert!(im.should_resume(4_000));
    }
}
