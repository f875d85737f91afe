// rules.rs - Birth/survival transition over a toroidal grid, double-buffered

use crate::grid::{Cell, Grid};
use crate::palette::Palette;

/// Live cells among the 8 neighbours of (col, row), wrapping at every edge.
pub fn live_neighbors(grid: &Grid, col: usize, row: usize) -> u8 {
    if grid.is_empty() { return 0; }

    let (cols, rows) = (grid.cols() as isize, grid.rows() as isize);
    let mut count = 0;
    for row_offset in [-1isize, 0, 1] {
        for col_offset in [-1isize, 0, 1] {
            if row_offset == 0 && col_offset == 0 { continue; }

            let neighbor_col = (col as isize + col_offset).rem_euclid(cols) as usize;
            let neighbor_row = (row as isize + row_offset).rem_euclid(rows) as usize;
            if grid.is_alive(neighbor_col, neighbor_row) { count += 1; }
        }
    }
    count
}

/// Next state of a single cell given its live neighbour count.
///
/// Dying cells keep their color for the afterglow; newborn cells draw a new
/// one. Dead cells that stay dead carry their fade over untouched, since
/// fade decays per rendered frame rather than per generation.
pub fn next_cell(cell: &Cell, neighbors: u8, palette: &mut Palette) -> Cell {
    match (cell.alive, neighbors) {
        (true, 2) | (true, 3) => *cell,                        // Survival
        (true, _)             => Cell::dying(cell.color),      // Under/overpopulation
        (false, 3)            => Cell::born(palette.random_color()), // Birth
        (false, _)            => *cell,                        // Stays dead
    }
}

/// Writes the generation after `current` into `next`, resizing `next` if
/// its shape differs. Every cell of `next` is overwritten.
pub fn step_into(current: &Grid, next: &mut Grid, palette: &mut Palette) {
    if next.cols() != current.cols() || next.rows() != current.rows() {
        *next = current.blank_like();
    }
    let cols = current.cols();
    for (index, target) in next.cells_mut().iter_mut().enumerate() {
        let (col, row) = (index % cols, index / cols);
        let cell = &current.cells()[index];
        *target = next_cell(cell, live_neighbors(current, col, row), palette);
    }
}

/// Allocating convenience over [`step_into`].
pub fn step(current: &Grid, palette: &mut Palette) -> Grid {
    let mut next = current.blank_like();
    step_into(current, &mut next, palette);
    next
}

/// Two grid buffers and the index of the one being shown. A transition
/// fills the back buffer from the front one and then flips the index, so
/// the front grid is never seen half-updated.
#[derive(Debug, Clone, Default)]
pub struct Generations {
    buffers: [Grid; 2],
    front: usize,
}

impl Generations {
    pub fn new(grid: Grid) -> Self {
        let back = grid.blank_like();
        Self { buffers: [grid, back], front: 0 }
    }

    pub fn current(&self) -> &Grid {
        &self.buffers[self.front]
    }

    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.front]
    }

    /// Swap in a wholly new generation (reseed, resize).
    pub fn replace(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    pub fn advance(&mut self, palette: &mut Palette) {
        let back = 1 - self.front;
        let [first, second] = &mut self.buffers;
        let (current, next) = if back == 1 { (&*first, second) } else { (&*second, first) };
        step_into(current, next, palette);
        self.front = back;
    }
}
