// render.rs - Paints the grid as glowing discs with a fading afterglow

use egui::{Color32, Painter, Pos2, Rect, pos2};

use crate::grid::Grid;
use crate::palette::{CellColor, fade_alpha};

const GLOW_RINGS: usize = 3;        // Halo rings drawn under each disc
const GLOW_SPREAD: f32 = 0.45;      // Extra radius per ring, as a fraction of the disc radius
const GLOW_STRENGTH: f32 = 0.22;    // Alpha of the innermost ring relative to the disc

/// Where the grid sits on screen and how big a cell is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub origin: Pos2,
    pub cell_size: f32,
}

impl Layout {
    pub fn new(origin: Pos2, cell_size: f32) -> Self {
        Self { origin, cell_size }
    }

    pub fn cell_center(&self, col: usize, row: usize) -> Pos2 {
        pos2(
            self.origin.x + (col as f32 + 0.5) * self.cell_size,
            self.origin.y + (row as f32 + 0.5) * self.cell_size,
        )
    }
}

/// One disc to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub center: Pos2,
    pub radius: f32,
    pub color: CellColor,
    pub alpha: f32,
}

impl Glyph {
    pub fn fill(&self) -> Color32 {
        self.color.with_alpha(self.alpha)
    }

    /// Halo rings from outermost to innermost.
    pub fn halo(&self) -> impl Iterator<Item = (f32, Color32)> + '_ {
        (1..=GLOW_RINGS).rev().map(move |ring| {
            let radius = self.radius * (1.0 + GLOW_SPREAD * ring as f32);
            let alpha = self.alpha * GLOW_STRENGTH / ring as f32;
            (radius, self.color.with_alpha(alpha))
        })
    }
}

pub struct Renderer {
    pub background: Color32,
    pub glow: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { background: Color32::BLACK, glow: true }
    }
}

impl Renderer {
    /// Glyphs for the grid as it stands: live cells opaque, fading cells at
    /// `fade / FADE_MAX`. Cells with nothing to show are skipped.
    pub fn glyphs(&self, grid: &Grid, layout: &Layout) -> Vec<Glyph> {
        let radius = layout.cell_size / 2.0;
        grid.iter()
            .filter_map(|(col, row, cell)| {
                let alpha = if cell.alive {
                    1.0
                } else if cell.fade > 0 {
                    fade_alpha(cell.fade)
                } else {
                    return None;
                };
                Some(Glyph { center: layout.cell_center(col, row), radius, color: cell.color, alpha })
            })
            .collect()
    }

    /// Clears `surface` to the background and paints every glyph. Reads the
    /// grid only; afterglow decay is the caller's `Grid::decay_fade`.
    pub fn draw(&self, painter: &Painter, surface: Rect, grid: &Grid, layout: &Layout) {
        painter.rect_filled(surface, 0.0, self.background);

        let glyphs = self.glyphs(grid, layout);
        if self.glow {
            for glyph in &glyphs {
                for (radius, color) in glyph.halo() {
                    painter.circle_filled(glyph.center, radius, color);
                }
            }
        }
        for glyph in &glyphs {
            painter.circle_filled(glyph.center, glyph.radius, glyph.fill());
        }
    }
}
