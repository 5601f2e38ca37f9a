use std::time::{Duration, Instant};

use rand::Rng;

use super::*;
use crate::track::{Item, Layout, Track, TrackId};
use crate::ui;

fn track(labels: &[&str]) -> Track {
    let items = labels.iter().map(|l| Item::new(*l, 2)).collect();
    Track::new(TrackId(0), items, 24.0)
}

fn position(scroller: &Scroller, track: &Track) -> f32 {
    scroller.state(track.id()).expect("loop running").position
}

#[test]
fn start_twice_duplicates_once() {
    let mut track = track(&["alpha", "beta", "gamma"]);
    let mut scroller = Scroller::new();
    let now = Instant::now();

    assert!(scroller.start(&mut track, Direction::Left, 32.0, 0.0, now));
    assert!(scroller.start(&mut track, Direction::Left, 32.0, 0.0, now));

    // Exactly one duplicate set, not two.
    assert_eq!(track.clone_len(), track.original_len());
    assert_eq!(track.content_width(), 2.0 * track.span_width());
}

#[test]
fn position_stays_bounded_over_randomized_frames() {
    let mut rng = rand::rng();
    let mut track = track(&["alpha", "beta", "gamma", "delta"]);
    let mut scroller = Scroller::new();
    let mut now = Instant::now();

    assert!(scroller.start(&mut track, Direction::Left, 32.0, 0.0, now));
    let span = scroller.state(track.id()).unwrap().single_span;

    for frame in 0..10_000 {
        // Occasionally restart with fresh speed/direction/offset so the
        // bound holds across restarts too.
        if frame % 1_000 == 999 {
            let direction = if rng.random_bool(0.5) {
                Direction::Left
            } else {
                Direction::Right
            };
            let speed = rng.random_range(1.0..200.0);
            let offset = rng.random_range(-2.0 * span..2.0 * span);
            assert!(scroller.start(&mut track, direction, speed, offset, now));
        }

        now += Duration::from_secs_f32(rng.random_range(0.0..0.2));
        scroller.tick(&mut track, now);

        let pos = position(&scroller, &track);
        assert!(
            pos > -span && pos < span,
            "frame {frame}: position {pos} escaped ±{span}"
        );
    }
}

#[test]
fn window_is_identical_one_span_apart() {
    let mut track = track(&["alpha", "beta", "gamma"]);
    let mut scroller = Scroller::new();
    scroller.start(&mut track, Direction::Left, 32.0, 0.0, Instant::now());
    let span = track.span_width();

    // The duplicated strip shows the same cells no matter which copy the
    // window happens to be inside.
    for p in [0.0, -1.0, -7.5, -(span - 1.0), 4.0, span / 2.0] {
        track.set_transform(p);
        let near = ui::strip_window(&track);
        track.set_transform(p - span);
        let far = ui::strip_window(&track);
        assert_eq!(near, far, "window differs at position {p}");
    }
}

#[test]
fn pause_sources_combine_with_or() {
    // (interaction, visibility) -> expect motion only when both inactive.
    for (interaction, hidden) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut track = track(&["alpha", "beta"]);
        let mut scroller = Scroller::new();
        let t0 = Instant::now();
        scroller.start(&mut track, Direction::Left, 32.0, 0.0, t0);

        if interaction {
            scroller.pause_shortly(track.id(), t0);
        }
        scroller.set_visible(track.id(), !hidden);

        scroller.tick(&mut track, t0 + Duration::from_millis(20));
        let moved = position(&scroller, &track) != 0.0;
        assert_eq!(
            moved,
            !interaction && !hidden,
            "interaction={interaction} hidden={hidden}"
        );
    }
}

#[test]
fn stop_restores_pre_start_state() {
    let mut track = track(&["alpha", "beta", "gamma"]);
    let prev_layout = Layout {
        inline: false,
        wrap: true,
        width: Some(42.0),
        min_width: None,
    };
    track.set_layout(prev_layout.clone());
    let original_count = track.items().len();

    let mut scroller = Scroller::new();
    let t0 = Instant::now();
    scroller.start(&mut track, Direction::Left, 32.0, 5.0, t0);
    scroller.tick(&mut track, t0 + Duration::from_millis(40));
    assert_ne!(track.transform(), 0.0);
    assert_ne!(*track.layout(), prev_layout);

    scroller.stop(&mut track);
    assert_eq!(track.items().len(), original_count);
    assert_eq!(track.clone_len(), 0);
    assert!(!track.is_duplicated());
    assert_eq!(*track.layout(), prev_layout);
    assert_eq!(track.transform(), 0.0);

    // Stale signals after stop mutate nothing.
    scroller.pause_shortly(track.id(), t0);
    scroller.set_visible(track.id(), false);
    scroller.tick(&mut track, t0 + Duration::from_secs(1));
    assert_eq!(track.transform(), 0.0);
    assert_eq!(scroller.active_loops(), 0);

    // And stop itself stays a no-op.
    scroller.stop(&mut track);
    assert_eq!(track.items().len(), original_count);
}

#[test]
fn restart_applies_new_offset_with_a_single_loop() {
    let mut track = track(&["alpha", "beta", "gamma"]);
    let mut scroller = Scroller::new();
    let t0 = Instant::now();

    scroller.start(&mut track, Direction::Left, 32.0, 3.0, t0);
    scroller.tick(&mut track, t0 + Duration::from_millis(40));

    scroller.start(&mut track, Direction::Left, 32.0, 5.0, t0 + Duration::from_millis(40));
    assert_eq!(scroller.active_loops(), 1);
    // Position reflects only the new offset, not leftover motion.
    assert_eq!(position(&scroller, &track), -5.0);
    assert_eq!(track.transform(), -5.0);
}

#[test]
fn start_on_empty_track_is_a_noop() {
    let mut track = Track::new(TrackId(0), Vec::new(), 24.0);
    let mut scroller = Scroller::new();
    assert!(!scroller.start(&mut track, Direction::Left, 32.0, 0.0, Instant::now()));
    assert_eq!(scroller.active_loops(), 0);
    assert_eq!(track.transform(), 0.0);
}

#[test]
fn start_without_measurable_width_is_skipped() {
    // Items exist but have zero extent, so one span has no width.
    let items = vec![Item::new("", 0), Item::new("", 0)];
    let mut track = Track::new(TrackId(0), items, 24.0);
    let mut scroller = Scroller::new();
    assert!(!scroller.start(&mut track, Direction::Left, 32.0, 0.0, Instant::now()));
    assert!(!track.is_duplicated());
    assert_eq!(scroller.active_loops(), 0);
}

#[test]
fn start_with_non_positive_speed_is_skipped() {
    let mut track = track(&["alpha"]);
    let mut scroller = Scroller::new();
    assert!(!scroller.start(&mut track, Direction::Left, 0.0, 0.0, Instant::now()));
    assert!(!scroller.start(&mut track, Direction::Left, -3.0, 0.0, Instant::now()));
    assert_eq!(scroller.active_loops(), 0);
}

#[test]
fn initial_offset_is_normalized_into_one_span() {
    let mut track = track(&["alpha", "beta", "gamma"]);
    let span = track.span_width();
    let mut scroller = Scroller::new();
    let t0 = Instant::now();

    scroller.start(&mut track, Direction::Left, 32.0, 2.0 * span + 3.0, t0);
    assert_eq!(position(&scroller, &track), -3.0);

    scroller.start(&mut track, Direction::Left, 32.0, -4.0, t0);
    assert_eq!(position(&scroller, &track), -(span - 4.0));
}

#[test]
fn stalled_frame_is_clamped_to_max_step() {
    let mut track = track(&["alpha", "beta"]);
    let mut scroller = Scroller::new();
    let t0 = Instant::now();
    scroller.start(&mut track, Direction::Left, 32.0, 0.0, t0);

    // Five seconds without a frame advances at most 0.05 s worth.
    scroller.tick(&mut track, t0 + Duration::from_secs(5));
    assert_eq!(position(&scroller, &track), -32.0 * 0.05);
}

#[test]
fn interaction_pause_rearms_on_each_interaction() {
    let mut track = track(&["alpha", "beta"]);
    let mut scroller = Scroller::new();
    let t0 = Instant::now();
    scroller.start(&mut track, Direction::Left, 32.0, 0.0, t0);

    scroller.pause_shortly(track.id(), t0);
    scroller.tick(&mut track, t0 + Duration::from_millis(500));
    assert_eq!(position(&scroller, &track), 0.0);

    // A second interaction resets the timer instead of accumulating.
    scroller.pause_shortly(track.id(), t0 + Duration::from_millis(800));
    scroller.tick(&mut track, t0 + Duration::from_millis(1000));
    assert_eq!(position(&scroller, &track), 0.0, "old deadline must not fire");

    scroller.tick(&mut track, t0 + Duration::from_millis(1800));
    assert_ne!(position(&scroller, &track), 0.0, "quiet period over, motion resumes");
}

#[test]
fn visibility_resumes_without_quiet_period() {
    let mut track = track(&["alpha", "beta"]);
    let mut scroller = Scroller::new();
    let t0 = Instant::now();
    scroller.start(&mut track, Direction::Left, 32.0, 0.0, t0);

    scroller.set_visible(track.id(), false);
    scroller.tick(&mut track, t0 + Duration::from_millis(20));
    assert_eq!(position(&scroller, &track), 0.0);

    scroller.set_visible(track.id(), true);
    scroller.tick(&mut track, t0 + Duration::from_millis(40));
    assert_ne!(position(&scroller, &track), 0.0);
}

#[test]
fn direction_controls_sign_of_motion() {
    let t0 = Instant::now();

    let mut left = track(&["alpha", "beta"]);
    let mut scroller = Scroller::new();
    scroller.start(&mut left, Direction::Left, 32.0, 0.0, t0);
    scroller.tick(&mut left, t0 + Duration::from_millis(20));
    assert!(position(&scroller, &left) < 0.0);

    let mut right = track(&["alpha", "beta"]);
    let mut scroller = Scroller::new();
    scroller.start(&mut right, Direction::Right, 32.0, 0.0, t0);
    scroller.tick(&mut right, t0 + Duration::from_millis(20));
    assert!(position(&scroller, &right) > 0.0);
}
