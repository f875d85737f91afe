// grid.rs - Toroidal cell grid for the glowing Game of Life

use tracing::debug;

use crate::palette::{CellColor, Palette};

pub const FADE_MAX: u8 = 10;                // Afterglow frames owed by a freshly dead cell
pub const SEED_PROBABILITY: f64 = 0.35;     // Chance a cell starts alive

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub alive: bool,
    pub color: CellColor,
    pub fade: u8,
}

impl Cell {
    pub fn born(color: CellColor) -> Self {
        Self { alive: true, color, fade: 0 }
    }

    /// Dead cell that still owes a full afterglow in its last color.
    pub fn dying(color: CellColor) -> Self {
        Self { alive: false, color, fade: FADE_MAX }
    }

    pub fn is_fading(&self) -> bool {
        !self.alive && self.fade > 0
    }
}

/// Row-major `cols x rows` grid, addressed by (col, row).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All cells dead, no afterglow.
    pub fn empty(cols: usize, rows: usize) -> Self {
        Self { cols, rows, cells: vec![Cell::default(); cols * rows] }
    }

    /// Random initial generation: each cell alive with `SEED_PROBABILITY`,
    /// every cell gets its own color, nothing fading.
    pub fn seeded(cols: usize, rows: usize, palette: &mut Palette) -> Self {
        let cells = (0..cols * rows)
            .map(|_| Cell {
                alive: palette.chance(SEED_PROBABILITY),
                color: palette.random_color(),
                fade: 0,
            })
            .collect();
        let grid = Self { cols, rows, cells };
        debug!(cols, rows, live = grid.live_count(), "grid seeded");
        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if !self.contains(col, row) { return None; }
        self.cells.get(self.index(col, row))
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if !self.contains(col, row) { return None; }
        let index = self.index(col, row);
        self.cells.get_mut(index)
    }

    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.get(col, row).is_some_and(|cell| cell.alive)
    }

    /// Cells in row-major order together with their (col, row).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % cols, i / cols, cell))
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// One frame of afterglow decay: every fading cell loses one step.
    pub fn decay_fade(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_fading()) {
            cell.fade -= 1;
        }
    }

    /// Kill everything without leaving an afterglow.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.alive = false;
            cell.fade = 0;
        }
    }

    /// Same-sized copy with every cell reset; used to size the back buffer.
    pub(crate) fn blank_like(&self) -> Self {
        Self::empty(self.cols, self.rows)
    }
}
