// interaction.rs - Pointer/touch paint strokes over the grid

use std::collections::HashSet;

use egui::{Pos2, Vec2};
use tracing::trace;

use crate::grid::{Cell, Grid};
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    Add,
    Remove,
}

/// State of the current gesture. The action is fixed by which variant is
/// live, so there is no way to be active without one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Inactive,
    Painting { visited: HashSet<(usize, usize)> },
    Erasing { visited: HashSet<(usize, usize)> },
}

impl DragSession {
    fn open(action: DragAction) -> Self {
        let visited = HashSet::new();
        match action {
            DragAction::Add => Self::Painting { visited },
            DragAction::Remove => Self::Erasing { visited },
        }
    }

    pub fn action(&self) -> Option<DragAction> {
        match self {
            Self::Inactive => None,
            Self::Painting { .. } => Some(DragAction::Add),
            Self::Erasing { .. } => Some(DragAction::Remove),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Records `cell` as edited; false if this gesture already touched it.
    fn visit(&mut self, cell: (usize, usize)) -> bool {
        match self {
            Self::Inactive => false,
            Self::Painting { visited } | Self::Erasing { visited } => visited.insert(cell),
        }
    }
}

/// Maps a surface-local pixel point to (col, row): `floor(x / width * cols)`,
/// `floor(y / height * rows)`. Points outside the surface map to nothing.
pub fn cell_at(point: Pos2, surface: Vec2, cols: usize, rows: usize) -> Option<(usize, usize)> {
    if cols == 0 || rows == 0 || surface.x <= 0.0 || surface.y <= 0.0 { return None; }
    if !point.x.is_finite() || !point.y.is_finite() { return None; }

    let col = (point.x / surface.x * cols as f32).floor();
    let row = (point.y / surface.y * rows as f32).floor();
    if col < 0.0 || row < 0.0 { return None; }

    let (col, row) = (col as usize, row as usize);
    (col < cols && row < rows).then_some((col, row))
}

/// Add revives with a fresh color; Remove kills with a full afterglow.
pub fn apply_action(grid: &mut Grid, col: usize, row: usize, action: DragAction, palette: &mut Palette) {
    let Some(cell) = grid.get_mut(col, row) else { return };
    *cell = match action {
        DragAction::Add => Cell::born(palette.random_color()),
        DragAction::Remove => Cell::dying(cell.color),
    };
}

#[derive(Debug, Default)]
pub struct InteractionController {
    session: DragSession,
}

impl InteractionController {
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Opens a stroke on the cell under `point`. The stroke paints if that
    /// cell is dead and erases if it is alive.
    pub fn gesture_start(&mut self, point: Pos2, surface: Vec2, grid: &mut Grid, palette: &mut Palette) {
        let Some((col, row)) = cell_at(point, surface, grid.cols(), grid.rows()) else {
            self.session = DragSession::Inactive;
            return;
        };
        let action = if grid.is_alive(col, row) { DragAction::Remove } else { DragAction::Add };
        trace!(col, row, ?action, "gesture started");

        self.session = DragSession::open(action);
        self.edit(col, row, grid, palette);
    }

    pub fn gesture_move(&mut self, point: Pos2, surface: Vec2, grid: &mut Grid, palette: &mut Palette) {
        if !self.session.is_active() { return; }
        if let Some((col, row)) = cell_at(point, surface, grid.cols(), grid.rows()) {
            self.edit(col, row, grid, palette);
        }
    }

    pub fn gesture_end(&mut self) {
        if self.session.is_active() { trace!("gesture ended"); }
        self.session = DragSession::Inactive;
    }

    fn edit(&mut self, col: usize, row: usize, grid: &mut Grid, palette: &mut Palette) {
        let Some(action) = self.session.action() else { return };
        if self.session.visit((col, row)) {
            apply_action(grid, col, row, action, palette);
        }
    }
}
