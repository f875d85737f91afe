// End-to-end frame loop behaviour

use std::time::Duration;

use egui::{pos2, vec2};
use glow_life_core::{FADE_MAX, Palette, Simulation};

fn simulation(interval_ms: u64) -> Simulation {
    Simulation::with_palette(10.0, Duration::from_millis(interval_ms), Palette::seeded(2024))
}

#[test]
fn steps_are_rate_limited_while_every_frame_draws() {
    let mut sim = simulation(50);
    sim.resize(vec2(320.0, 240.0));

    let mut draws = 0;
    let mut step_times = Vec::new();
    for frame in 1..=120u64 {
        let now = Duration::from_millis(frame * 16);
        if sim.frame(now, |_| draws += 1) {
            step_times.push(now);
        }
    }

    assert_eq!(draws, 120);
    assert!(!step_times.is_empty());
    assert!(step_times.windows(2).all(|w| w[1] - w[0] >= Duration::from_millis(50)));
    // 1920 ms of frames can hold at most 1920 / 50 steps
    assert!(step_times.len() <= 38);
    assert_eq!(sim.stats().generation, step_times.len() as u64);
}

#[test]
fn resize_reseeds_at_new_dimensions_without_leftover_glow() {
    let mut sim = simulation(50);
    sim.resize(vec2(300.0, 200.0));
    for frame in 1..=10u64 {
        sim.frame(Duration::from_millis(frame * 60), |_| {});
    }
    assert!(sim.grid().iter().any(|(_, _, cell)| cell.fade > 0));
    sim.gesture_start(pos2(15.0, 15.0));

    assert!(sim.resize(vec2(125.0, 95.0)));
    assert_eq!((sim.grid().cols(), sim.grid().rows()), (12, 9));
    assert!(sim.grid().iter().all(|(_, _, cell)| cell.fade == 0));
    assert!(!sim.controller().session().is_active());
    assert_eq!(sim.stats().generation, 0);
}

#[test]
fn edits_show_up_in_the_next_draw() {
    let mut sim = simulation(1000);
    sim.resize(vec2(100.0, 100.0));
    sim.clear();

    sim.gesture_start(pos2(45.0, 45.0));
    sim.gesture_move(pos2(55.0, 45.0));
    sim.gesture_end();

    let mut seen = 0;
    sim.frame(Duration::from_millis(16), |grid| seen = grid.live_count());
    assert_eq!(seen, 2);
}

#[test]
fn erased_cell_glows_for_fade_frames_then_goes_dark() {
    let mut sim = simulation(1000);
    sim.resize(vec2(100.0, 100.0));
    sim.clear();
    sim.gesture_start(pos2(5.0, 5.0));
    sim.gesture_end();
    sim.gesture_start(pos2(5.0, 5.0));
    sim.gesture_end();

    let mut fades = Vec::new();
    for frame in 1..=u64::from(FADE_MAX) + 2 {
        sim.frame(Duration::from_millis(frame), |grid| {
            fades.push(grid.get(0, 0).map_or(0, |cell| cell.fade));
        });
    }
    let expected: Vec<u8> = (1..=FADE_MAX).rev().chain([0, 0]).collect();
    assert_eq!(fades, expected);
}

#[test]
fn degenerate_surface_is_a_no_op() {
    let mut sim = simulation(50);
    sim.resize(vec2(5.0, 400.0));
    assert!(sim.grid().is_empty());
    sim.gesture_start(pos2(2.0, 2.0));
    let mut draws = 0;
    for frame in 1..=10u64 {
        sim.frame(Duration::from_millis(frame * 16), |_| draws += 1);
    }
    assert_eq!(draws, 10);
    assert_eq!(sim.stats().population, 0);
}
