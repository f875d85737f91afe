//! Conway's Game of Life on a toroidal grid, drawn as glowing discs that
//! leave a fading afterglow when they die, and editable by dragging.
//!
//! # Modules
//!
//! - [`palette`] -- random bright cell colors and afterglow alpha.
//! - [`grid`] -- the cell grid, seeding, and per-frame fade decay.
//! - [`rules`] -- birth/survival transition with wrap-around neighbours,
//!   double-buffered through [`rules::Generations`].
//! - [`render`] -- paints a grid with an `egui::Painter`.
//! - [`interaction`] -- pointer/touch strokes that paint or erase cells.
//! - [`clock`] -- decides which display frames also advance a generation.
//! - [`simulation`] -- ties the above into a per-frame loop.
//! - [`config`] -- YAML configuration with environment overrides.

pub mod clock;
pub mod config;
pub mod grid;
pub mod interaction;
pub mod palette;
pub mod render;
pub mod rules;
pub mod simulation;

pub use config::{ConfigError, LifeConfig};
pub use grid::{Cell, FADE_MAX, Grid, SEED_PROBABILITY};
pub use interaction::{DragAction, DragSession, InteractionController};
pub use palette::{CellColor, Palette};
pub use render::{Layout, Renderer};
pub use simulation::{Simulation, Stats};
