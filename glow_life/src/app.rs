// app.rs - Window glue: resize reseeds, pointer strokes edit, every frame paints

use std::time::Duration;

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Painter, Pos2, Rect, Stroke};
use glow_life_core::{LifeConfig, Layout, Renderer, Simulation, Stats};

/// Pointer state as seen by one frame.
struct PointerFrame {
    pressed: bool,
    down: bool,
    released: bool,
    pos: Option<Pos2>,
}

pub struct GlowLifeApp {
    simulation: Simulation,
    renderer: Renderer,
    show_hud: bool,
    stroking: bool,
}

impl GlowLifeApp {
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            simulation: Simulation::new(config),
            renderer: Renderer::default(),
            show_hud: config.show_hud,
            stroking: false,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context, now: Duration) {
        let pressed = |key| ctx.input(|i| i.key_pressed(key));

        if pressed(Key::Space) { self.simulation.toggle_pause(now); }
        if pressed(Key::R) { self.simulation.reseed(); }
        if pressed(Key::C) { self.simulation.clear(); }
        if pressed(Key::H) { self.show_hud = !self.show_hud; }
        if pressed(Key::ArrowUp) { self.simulation.faster(); }
        if pressed(Key::ArrowDown) { self.simulation.slower(); }
    }

    /// Feeds the primary pointer (mouse, or the first touch) into the
    /// simulation as gesture start/move/end, in surface-local coordinates.
    fn handle_pointer(&mut self, ctx: &egui::Context, surface: Rect) {
        let pointer = ctx.input(|i| PointerFrame {
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
            pos: i.pointer.interact_pos(),
        });
        let local = pointer.pos.map(|pos| (pos - surface.min).to_pos2());

        if pointer.pressed {
            if let Some(point) = local {
                self.simulation.gesture_start(point);
                self.stroking = true;
            }
        } else if self.stroking && pointer.down {
            if let Some(point) = local {
                self.simulation.gesture_move(point);
            }
        }

        if self.stroking && (pointer.released || !pointer.down) {
            self.simulation.gesture_end();
            self.stroking = false;
        }
    }

    fn draw_hud(&self, painter: &Painter, surface: Rect) {
        let Stats { generation, population, cols, rows, step_interval, is_running } = self.simulation.stats();
        let cells = (cols * rows).max(1);
        let lines = [
            format!("Generation: {generation}{}", if is_running { "" } else { "  (paused)" }),
            format!("Live cells: {population}  ({:.1}%)", population as f32 / cells as f32 * 100.0),
            format!("Grid: {cols} x {rows}   Step: {} ms", step_interval.as_millis()),
            "Drag to paint/erase  Space pause  R random  C clear  Up/Down speed  H hide".to_owned(),
        ];

        let font = FontId::monospace(13.0);
        let origin = surface.min + egui::vec2(8.0, 8.0);
        let line_height = 17.0;
        let backdrop = Rect::from_min_size(
            origin - egui::vec2(4.0, 4.0),
            egui::vec2(560.0, line_height * lines.len() as f32 + 8.0),
        );
        painter.rect(backdrop, 4.0, Color32::from_black_alpha(160), Stroke::new(0.5, Color32::from_gray(60)));

        for (i, line) in lines.iter().enumerate() {
            let pos = origin + egui::vec2(0.0, line_height * i as f32);
            painter.text(pos, Align2::LEFT_TOP, line, font.clone(), Color32::from_gray(210));
        }
    }
}

impl eframe::App for GlowLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        self.handle_keys(ctx, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let surface = ui.max_rect();

                // A new surface size means a new grid
                self.simulation.resize(surface.size());
                self.handle_pointer(ctx, surface);

                let painter = ui.painter_at(surface);
                let layout = Layout::new(surface.min, self.simulation.cell_size());
                let renderer = &self.renderer;
                self.simulation.frame(now, |grid| renderer.draw(&painter, surface, grid, &layout));

                if self.show_hud {
                    self.draw_hud(&painter, surface);
                }
            });

        // Keep animating: the afterglow decays per frame even when paused
        ctx.request_repaint();
    }
}
