// simulation.rs - One frame of the loop: step on cadence, draw, decay afterglow

use std::time::Duration;

use egui::{Pos2, Vec2};
use tracing::debug;

use crate::clock::StepClock;
use crate::config::{LifeConfig, MIN_CELL_SIZE};
use crate::grid::Grid;
use crate::interaction::InteractionController;
use crate::palette::Palette;
use crate::rules::Generations;

/// Snapshot for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub generation: u64,
    pub population: usize,
    pub cols: usize,
    pub rows: usize,
    pub step_interval: Duration,
    pub is_running: bool,
}

pub struct Simulation {
    generations: Generations,
    palette: Palette,
    controller: InteractionController,
    clock: StepClock,
    cell_size: f32,
    surface: Vec2,
    generation: u64,
}

impl Simulation {
    pub fn new(config: &LifeConfig) -> Self {
        let palette = match config.seed {
            Some(seed) => Palette::seeded(seed),
            None => Palette::from_entropy(),
        };
        Self::with_palette(config.cell_size, config.step_interval(), palette)
    }

    /// Starts with an empty grid; the first [`Simulation::resize`] seeds it.
    pub fn with_palette(cell_size: f32, step_interval: Duration, palette: Palette) -> Self {
        let cell_size = if cell_size.is_finite() { cell_size.max(MIN_CELL_SIZE) } else { MIN_CELL_SIZE };
        Self {
            generations: Generations::default(),
            palette,
            controller: InteractionController::default(),
            clock: StepClock::new(step_interval),
            cell_size,
            surface: Vec2::ZERO,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.generations.current()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Grid dimensions a surface of this size holds.
    pub fn dimensions_for(&self, surface: Vec2) -> (usize, usize) {
        let fit = |px: f32| if px.is_finite() && px > 0.0 { (px / self.cell_size).floor() as usize } else { 0 };
        (fit(surface.x), fit(surface.y))
    }

    /// Reseeds at the new dimensions when the surface size changed. Any
    /// stroke in progress is dropped with the old grid. Returns true if the
    /// grid was replaced.
    pub fn resize(&mut self, surface: Vec2) -> bool {
        if surface == self.surface { return false; }

        let (cols, rows) = self.dimensions_for(surface);
        debug!(width = surface.x, height = surface.y, cols, rows, "surface resized");
        self.surface = surface;
        self.controller.gesture_end();
        self.reseed_at(cols, rows);
        true
    }

    pub fn reseed(&mut self) {
        let (cols, rows) = (self.grid().cols(), self.grid().rows());
        self.reseed_at(cols, rows);
    }

    fn reseed_at(&mut self, cols: usize, rows: usize) {
        let grid = Grid::seeded(cols, rows, &mut self.palette);
        self.generations.replace(grid);
        self.generation = 0;
    }

    pub fn clear(&mut self) {
        self.generations.current_mut().clear();
        self.generation = 0;
        debug!("grid cleared");
    }

    /// One display frame: advance a generation if the step clock says one
    /// is due, hand the grid to `draw`, then decay afterglow by one frame.
    /// Returns whether a generation was stepped.
    pub fn frame(&mut self, now: Duration, draw: impl FnOnce(&Grid)) -> bool {
        let stepped = self.clock.frame(now);
        if stepped {
            self.generations.advance(&mut self.palette);
            self.generation += 1;
        }
        draw(self.generations.current());
        self.generations.current_mut().decay_fade();
        stepped
    }

    pub fn gesture_start(&mut self, point: Pos2) {
        let grid = self.generations.current_mut();
        self.controller.gesture_start(point, self.surface, grid, &mut self.palette);
    }

    pub fn gesture_move(&mut self, point: Pos2) {
        let grid = self.generations.current_mut();
        self.controller.gesture_move(point, self.surface, grid, &mut self.palette);
    }

    pub fn gesture_end(&mut self) {
        self.controller.gesture_end();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running
    }

    pub fn toggle_pause(&mut self, now: Duration) {
        self.clock.is_running = !self.clock.is_running;
        if self.clock.is_running { self.clock.restart(now); }
        debug!(running = self.clock.is_running, "pause toggled");
    }

    pub fn step_interval(&self) -> Duration {
        self.clock.interval()
    }

    pub fn set_step_interval(&mut self, interval: Duration) {
        self.clock.set_interval(interval);
        debug!(interval_ms = self.clock.interval().as_millis() as u64, "step interval changed");
    }

    /// Halve the step interval.
    pub fn faster(&mut self) {
        self.set_step_interval(self.clock.interval() / 2);
    }

    /// Double the step interval.
    pub fn slower(&mut self) {
        self.set_step_interval(self.clock.interval() * 2);
    }

    pub fn stats(&self) -> Stats {
        let grid = self.grid();
        Stats {
            generation: self.generation,
            population: grid.live_count(),
            cols: grid.cols(),
            rows: grid.rows(),
            step_interval: self.clock.interval(),
            is_running: self.clock.is_running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn simulation() -> Simulation {
        Simulation::with_palette(10.0, Duration::from_millis(50), Palette::seeded(8))
    }

    #[test]
    fn dimensions_follow_cell_size() {
        let sim = simulation();
        assert_eq!(sim.dimensions_for(vec2(805.0, 599.0)), (80, 59));
        assert_eq!(sim.dimensions_for(vec2(9.0, 0.0)), (0, 0));
    }

    #[test]
    fn same_size_does_not_reseed() {
        let mut sim = simulation();
        assert!(sim.resize(vec2(100.0, 100.0)));
        assert!(!sim.resize(vec2(100.0, 100.0)));
    }

    #[test]
    fn bad_cell_size_is_clamped() {
        let sim = Simulation::with_palette(0.0, Duration::from_millis(50), Palette::seeded(1));
        assert!((sim.cell_size() - MIN_CELL_SIZE).abs() < f32::EPSILON);
        let sim = Simulation::with_palette(f32::NAN, Duration::from_millis(50), Palette::seeded(1));
        assert!((sim.cell_size() - MIN_CELL_SIZE).abs() < f32::EPSILON);
    }

    #[test]
    fn clear_leaves_no_life_and_no_glow() {
        let mut sim = simulation();
        sim.resize(vec2(200.0, 200.0));
        sim.clear();
        assert_eq!(sim.stats().population, 0);
        assert!(sim.grid().iter().all(|(_, _, cell)| cell.fade == 0));
    }

    #[test]
    fn speed_controls_halve_and_double() {
        let mut sim = simulation();
        sim.faster();
        assert_eq!(sim.step_interval(), Duration::from_millis(25));
        sim.slower();
        sim.slower();
        assert_eq!(sim.step_interval(), Duration::from_millis(100));
    }

    #[test]
    fn paused_frames_still_decay_afterglow() {
        let mut sim = simulation();
        sim.resize(vec2(50.0, 50.0));
        sim.clear();
        sim.gesture_start(egui::pos2(5.0, 5.0));
        sim.gesture_end();
        sim.gesture_start(egui::pos2(5.0, 5.0));
        sim.gesture_end();
        assert_eq!(sim.grid().get(0, 0).map(|c| c.fade), Some(crate::grid::FADE_MAX));

        sim.toggle_pause(Duration::ZERO);
        let mut stepped = false;
        for frame in 1..=4u64 {
            stepped |= sim.frame(Duration::from_millis(frame * 100), |_| {});
        }
        assert!(!stepped);
        assert_eq!(sim.grid().get(0, 0).map(|c| c.fade), Some(crate::grid::FADE_MAX - 4));
        assert_eq!(sim.stats().generation, 0);
    }
}
