use glam::Vec2;
use vulca_core::constants::DEFAULT_FRAME_DELTA;
use vulca_core::{
    final_alpha, ArtworkId, ChannelId, ChannelSpec, Evaluator, Gallery, GalleryConfig,
    GalleryError, GalleryEvent, GridLayout, InteractionKind, ManualClock, NullRenderer,
    PointerKind, PointerSample, ScoreVector, TaskScheduler,
};

// Two side-by-side 200x200 regions: "a" at x 0..200, "b" at x 200..400.
fn specs() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec::new("a", Evaluator::SuShi, ScoreVector::new(7.0, 9.0, 8.0, 8.0, 7.0)),
        ChannelSpec::new("a", Evaluator::GuoXi, ScoreVector::new(8.0, 7.0, 9.0, 7.0, 8.0)),
        ChannelSpec::new("b", Evaluator::MamaZola, ScoreVector::new(6.0, 9.0, 9.0, 9.0, 6.0)),
    ]
}

fn layout() -> GridLayout {
    GridLayout::new(vec![ArtworkId::from("a"), ArtworkId::from("b")], 400.0, 200.0)
}

fn gallery_with(specs: Vec<ChannelSpec>) -> (Gallery, ManualClock) {
    let clock = ManualClock::new(0);
    let gallery = Gallery::new(
        GalleryConfig::default(),
        specs,
        Box::new(layout()),
        Box::new(clock.clone()),
    )
    .expect("valid gallery");
    (gallery, clock)
}

fn run(gallery: &mut Gallery, frames: usize) {
    for _ in 0..frames {
        gallery.step(DEFAULT_FRAME_DELTA);
    }
}

fn interactions(gallery: &mut Gallery) -> Vec<(InteractionKind, ChannelId, u64)> {
    gallery
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GalleryEvent::Interaction(i) => Some((i.kind, i.channel, i.timestamp_ms)),
            GalleryEvent::Frame(_) => None,
        })
        .collect()
}

#[test]
fn builds_one_channel_per_pairing() {
    let (gallery, _) = gallery_with(specs());
    assert_eq!(gallery.channels().len(), 3);
    let id = ChannelId::new("b", Evaluator::MamaZola);
    let ch = gallery.channel(&id).expect("channel b");
    assert_eq!(ch.bounds().origin().x, 200.0);
    assert!(!gallery.autoplay().is_paused());
    assert_eq!(gallery.autoplay().current(), Some(&ArtworkId::from("a")));
}

#[test]
fn duplicate_channel_is_rejected() {
    let mut s = specs();
    s.push(ChannelSpec::new("a", Evaluator::SuShi, ScoreVector::neutral()));
    let clock = ManualClock::new(0);
    let err = Gallery::new(GalleryConfig::default(), s, Box::new(layout()), Box::new(clock))
        .err()
        .expect("duplicate");
    assert_eq!(err, GalleryError::DuplicateChannel(ChannelId::new("a", Evaluator::SuShi)));
}

#[test]
fn channel_without_region_is_rejected() {
    let mut s = specs();
    s.push(ChannelSpec::new("z", Evaluator::SuShi, ScoreVector::neutral()));
    let clock = ManualClock::new(0);
    let err = Gallery::new(GalleryConfig::default(), s, Box::new(layout()), Box::new(clock))
        .err()
        .expect("missing region");
    assert_eq!(err, GalleryError::MissingRegion(ArtworkId::from("z")));
}

#[test]
fn missing_scores_fall_back_to_neutral() {
    let mut s = specs();
    s.push(ChannelSpec {
        artwork: ArtworkId::from("b"),
        evaluator: Evaluator::JohnRuskin,
        scores: None,
    });
    let (gallery, _) = gallery_with(s);
    let ch = gallery
        .channel(&ChannelId::new("b", Evaluator::JohnRuskin))
        .expect("channel");
    assert_eq!(*ch.scores(), ScoreVector::neutral());
    assert_eq!(ch.particles().len(), 180);
}

#[test]
fn final_alpha_stays_in_unit_range() {
    let (mut gallery, clock) = gallery_with(specs());
    for frame in 0..600u64 {
        clock.set(frame * 16);
        if frame % 37 == 0 {
            let x = (frame * 13 % 400) as f32;
            gallery.handle_pointer(PointerSample::moved(x, 100.0));
        }
        gallery.step(DEFAULT_FRAME_DELTA);
        for ch in gallery.channels() {
            let a = ch.final_alpha();
            assert!((0.0..=1.0).contains(&a), "{} alpha {a}", ch.id());
        }
    }
    for i in 0..1000 {
        let x = i as f32 * 0.37 - 100.0;
        let a = final_alpha(x.sin() * 3.0, x.cos() * 2.0, x * 0.01);
        assert!((0.0..=1.0).contains(&a));
    }
}

#[test]
fn hover_emits_one_event_per_channel() {
    let (mut gallery, clock) = gallery_with(specs());
    clock.set(500);
    gallery.handle_pointer(PointerSample::moved(50.0, 50.0));
    let events = interactions(&mut gallery);
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|(k, c, t)| *k == InteractionKind::Hover && c.artwork.as_str() == "a" && *t == 500));
    assert!(gallery.channels()[0].is_hovered());
    assert!(!gallery.channels()[2].is_hovered());
    let cursor = gallery.physics().cursor().expect("cursor");
    assert_eq!(cursor.region, ArtworkId::from("a"));

    // leaving emits nothing
    gallery.handle_pointer(PointerSample::moved(-5.0, -5.0));
    assert!(interactions(&mut gallery).is_empty());
    assert!(gallery.physics().cursor().is_none());
    assert!(!gallery.channels()[0].is_hovered());
}

#[test]
fn press_and_drag_emit_click_then_drag() {
    let (mut gallery, _) = gallery_with(specs());
    gallery.handle_pointer(PointerSample::new(250.0, 100.0, PointerKind::Down));
    gallery.handle_pointer(PointerSample::moved(270.0, 100.0));
    gallery.handle_pointer(PointerSample::new(270.0, 100.0, PointerKind::Up));
    let kinds: Vec<InteractionKind> = interactions(&mut gallery)
        .into_iter()
        .map(|(k, _, _)| k)
        .collect();
    assert_eq!(
        kinds,
        vec![
            InteractionKind::Hover,
            InteractionKind::Click,
            InteractionKind::Drag,
            InteractionKind::Hover,
        ]
    );
}

#[test]
fn autoplay_resumes_after_idle_threshold() {
    let (mut gallery, clock) = gallery_with(specs());
    clock.set(1000);
    gallery.handle_pointer(PointerSample::new(50.0, 50.0, PointerKind::Down));
    assert!(gallery.autoplay().is_paused());
    assert!(gallery.is_resume_pending());

    clock.set(3999);
    gallery.step(DEFAULT_FRAME_DELTA);
    assert!(gallery.autoplay().is_paused());

    clock.set(4000);
    gallery.step(DEFAULT_FRAME_DELTA);
    assert!(!gallery.autoplay().is_paused());
    assert!(!gallery.is_resume_pending());
}

#[test]
fn fresh_interaction_pushes_resume_back() {
    let (mut gallery, clock) = gallery_with(specs());
    clock.set(1000);
    gallery.handle_pointer(PointerSample::moved(50.0, 50.0));
    clock.set(2500);
    gallery.handle_pointer(PointerSample::moved(250.0, 50.0));

    clock.set(4000);
    gallery.step(DEFAULT_FRAME_DELTA);
    assert!(gallery.autoplay().is_paused());

    clock.set(5500);
    gallery.step(DEFAULT_FRAME_DELTA);
    assert!(!gallery.autoplay().is_paused());
}

#[test]
fn autoplay_ramps_the_current_region() {
    let (mut gallery, _) = gallery_with(specs());
    run(&mut gallery, 60);
    let a = &gallery.channels()[0];
    let b = &gallery.channels()[2];
    assert!(a.prominence().level() > 0.9);
    assert_eq!(b.prominence().level(), 0.0);
    assert!(a.final_alpha() > b.final_alpha());
    assert!(b.final_alpha() >= 0.05 - 1e-6);
}

#[test]
fn hover_drives_prominence_while_paused() {
    let (mut gallery, _) = gallery_with(specs());
    gallery.handle_pointer(PointerSample::moved(300.0, 100.0));
    run(&mut gallery, 60);
    assert!(gallery.channels()[2].prominence().level() > 0.9);
    assert_eq!(gallery.channels()[0].prominence().level(), 0.0);
}

#[test]
fn cancelled_tasks_never_fire() {
    let mut scheduler = TaskScheduler::new();
    let keep = scheduler.schedule_at(100, "keep");
    let dropped = scheduler.schedule_after(0, 50, "drop");
    assert!(scheduler.cancel(dropped));
    assert!(!scheduler.cancel(dropped));
    let mut fired = Vec::new();
    scheduler.poll(10_000, &mut fired);
    assert_eq!(fired, vec!["keep"]);
    assert!(!scheduler.is_pending(keep));
    assert!(scheduler.is_empty());
}

#[test]
fn walk_focus_fades_out_other_regions() {
    let (mut gallery, _) = gallery_with(specs());
    gallery
        .set_walk_focus(Some(ArtworkId::from("b")))
        .expect("known region");
    run(&mut gallery, 30);
    let a = &gallery.channels()[0];
    assert!(a.is_active());
    assert!(a.prominence().fade() < 1.0 && a.prominence().fade() > 0.0);

    run(&mut gallery, 120);
    assert!(!gallery.channels()[0].is_active());
    assert_eq!(gallery.channels()[0].final_alpha(), 0.0);
    assert!(gallery.channels()[2].is_active());
    assert_eq!(gallery.channels()[2].prominence().fade(), 1.0);

    let mut renderer = NullRenderer::default();
    gallery.tick(DEFAULT_FRAME_DELTA, &mut renderer);
    assert_eq!(renderer.channels_drawn, 1);

    gallery.set_walk_focus(None).expect("clear");
    gallery.step(DEFAULT_FRAME_DELTA);
    assert!(gallery.channels().iter().all(|c| c.is_active()));
}

#[test]
fn walk_focus_rejects_unknown_region() {
    let (mut gallery, _) = gallery_with(specs());
    assert_eq!(
        gallery.set_walk_focus(Some(ArtworkId::from("nope"))),
        Err(GalleryError::MissingRegion(ArtworkId::from("nope")))
    );
    assert!(gallery.walk_focus().is_none());
}

#[test]
fn renderer_sees_every_visible_channel() {
    let (mut gallery, _) = gallery_with(specs());
    let mut renderer = NullRenderer::default();
    gallery.tick(DEFAULT_FRAME_DELTA, &mut renderer);
    assert_eq!(renderer.frames, 1);
    assert_eq!(renderer.channels_drawn, 3);
    let total: usize = gallery.channels().iter().map(|c| c.particles().len()).sum();
    assert_eq!(renderer.particles_drawn, total);

    let frame = gallery
        .drain_events()
        .into_iter()
        .find_map(|e| match e {
            GalleryEvent::Frame(d) => Some(d),
            _ => None,
        })
        .expect("frame diagnostic");
    assert_eq!(frame.frame, 1);
    assert_eq!(frame.rendered_channels, 3);
    assert_eq!(frame.rendered_particles, total);
}

#[test]
fn zero_resize_keeps_previous_layout() {
    let (mut gallery, _) = gallery_with(specs());
    let before = gallery.channels()[2].bounds();
    assert_eq!(gallery.resize(0.0, 0.0), Ok(false));
    assert_eq!(gallery.resize(f32::NAN, 300.0), Ok(false));
    assert_eq!(gallery.channels()[2].bounds(), before);

    assert_eq!(gallery.resize(800.0, 400.0), Ok(true));
    let after = gallery.channels()[2].bounds();
    assert_eq!(after.origin().x, 400.0);
    assert_eq!(after.extent().x, 400.0);
}

#[test]
fn rescoring_keeps_pool_under_cap() {
    let (mut gallery, _) = gallery_with(specs());
    let id = ChannelId::new("a", Evaluator::GuoXi);
    gallery
        .set_scores(&id, ScoreVector::new(10.0, 0.0, 10.0, 0.0, 10.0))
        .expect("known channel");
    run(&mut gallery, 10);
    let ch = gallery.channel(&id).expect("channel");
    assert!(ch.particles().len() <= 300);
    assert_eq!(ch.particles().len(), ch.params().particle_count);

    let missing = ChannelId::new("b", Evaluator::SuShi);
    assert_eq!(
        gallery.set_scores(&missing, ScoreVector::neutral()),
        Err(GalleryError::UnknownChannel(missing.clone()))
    );
}

#[test]
fn reset_leaves_channels_dormant_until_woken() {
    let (mut gallery, _) = gallery_with(specs());
    run(&mut gallery, 30);
    gallery.reset_all().expect("live");
    assert!(gallery.channels().iter().all(|c| !c.is_active()));
    run(&mut gallery, 5);
    assert!(gallery.channels().iter().all(|c| !c.is_active()));

    gallery.handle_pointer(PointerSample::new(50.0, 50.0, PointerKind::Down));
    assert!(gallery.channels()[0].is_active());
    assert!(gallery.channels()[1].is_active());
    assert!(!gallery.channels()[2].is_active());

    let b = ChannelId::new("b", Evaluator::MamaZola);
    gallery.activate(&b).expect("known channel");
    assert!(gallery.channels()[2].is_active());
}

#[test]
fn deactivated_channel_ignores_the_walk() {
    let (mut gallery, _) = gallery_with(specs());
    let b = ChannelId::new("b", Evaluator::MamaZola);
    gallery.deactivate(&b).expect("known channel");
    run(&mut gallery, 5);
    assert!(!gallery.channel(&b).expect("b").is_active());

    gallery
        .set_walk_focus(Some(ArtworkId::from("a")))
        .expect("known region");
    run(&mut gallery, 10);
    gallery
        .set_walk_focus(Some(ArtworkId::from("b")))
        .expect("known region");
    run(&mut gallery, 10);
    assert!(!gallery.channel(&b).expect("b").is_active());

    gallery.activate(&b).expect("known channel");
    run(&mut gallery, 5);
    assert!(gallery.channel(&b).expect("b").is_active());

    let missing = ChannelId::new("a", Evaluator::JohnRuskin);
    assert_eq!(
        gallery.deactivate(&missing),
        Err(GalleryError::UnknownChannel(missing.clone()))
    );
}

#[test]
fn shrinking_resize_clamps_on_the_next_step() {
    let (mut gallery, _) = gallery_with(specs());
    let before: Vec<Vec<Vec2>> = gallery
        .channels()
        .iter()
        .map(|c| c.particles().iter().map(|p| p.position).collect())
        .collect();
    assert!(before[2].iter().any(|p| p.x > 100.0 || p.y > 100.0));

    assert_eq!(gallery.resize(200.0, 100.0), Ok(true));
    for (ch, positions) in gallery.channels().iter().zip(&before) {
        let now: Vec<Vec2> = ch.particles().iter().map(|p| p.position).collect();
        assert_eq!(&now, positions);
    }

    gallery.step(DEFAULT_FRAME_DELTA);
    for ch in gallery.channels() {
        let extent = ch.bounds().extent();
        for p in ch.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= extent.x, "{}", ch.id());
            assert!(p.position.y >= 0.0 && p.position.y <= extent.y, "{}", ch.id());
        }
    }
}

#[test]
fn drag_pushes_the_dragged_region() {
    let (mut gallery, _) = gallery_with(specs());
    gallery.handle_pointer(PointerSample::new(250.0, 100.0, PointerKind::Down));
    let velocities = |g: &Gallery, i: usize| -> Vec<Vec2> {
        g.channels()[i].particles().iter().map(|p| p.velocity).collect()
    };
    let b_before = velocities(&gallery, 2);
    let a_before = velocities(&gallery, 0);
    gallery.handle_pointer(PointerSample::moved(270.0, 100.0));
    for (v, before) in velocities(&gallery, 2).into_iter().zip(b_before) {
        assert!(v.x > before.x);
        assert_eq!(v.y, before.y);
    }
    assert_eq!(velocities(&gallery, 0), a_before);
}

#[test]
fn stray_release_keeps_autoplay_running() {
    let (mut gallery, clock) = gallery_with(specs());
    clock.set(1000);
    gallery.handle_pointer(PointerSample::new(-50.0, -50.0, PointerKind::Up));
    assert!(!gallery.autoplay().is_paused());
    assert!(!gallery.is_resume_pending());
    assert_eq!(gallery.interaction().last_interaction_ms(), 0);
}

#[test]
fn destroy_is_idempotent_and_final() {
    let (mut gallery, _) = gallery_with(specs());
    gallery.handle_pointer(PointerSample::moved(50.0, 50.0));
    gallery.destroy();
    gallery.destroy();
    assert!(gallery.is_destroyed());
    assert!(!gallery.is_resume_pending());
    assert!(gallery.channels().iter().all(|c| c.particles().is_empty()));

    let mut renderer = NullRenderer::default();
    gallery.tick(DEFAULT_FRAME_DELTA, &mut renderer);
    gallery.handle_pointer(PointerSample::moved(60.0, 60.0));
    assert_eq!(renderer.frames, 0);
    assert_eq!(gallery.resize(800.0, 600.0), Err(GalleryError::Destroyed));
    assert_eq!(gallery.reset_all(), Err(GalleryError::Destroyed));
    assert_eq!(gallery.set_walk_focus(None), Err(GalleryError::Destroyed));
}
