//! egui boundary: paints the grid and feeds clicks and timer ticks to
//! the controller.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};

use crate::controller::GridController;
use crate::grid::Grid;
use crate::patterns;

const GRID_COLS: usize = 20;
const GRID_ROWS: usize = 20;
const CANVAS_PX: f32 = 600.0;

pub struct LifeApp {
    controller: GridController,
    live_color: Color32,
    dead_color: Color32,
    line_color: Color32,
    selected_pattern: usize,
    random_runs: u64,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            controller: GridController::new(Grid::new(GRID_COLS, GRID_ROWS), CANVAS_PX),
            live_color: Color32::WHITE,
            dead_color: Color32::from_rgb(0x18, 0x18, 0x18),
            line_color: Color32::GRAY,
            selected_pattern: 0,
            random_runs: 0,
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Start"
                };
                if ui.button(button_text).clicked() {
                    if self.controller.is_running() {
                        self.controller.pause();
                    } else {
                        self.controller.start(Instant::now());
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.controller.pause();
                    self.controller.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.controller.pause();
                    self.random_runs += 1;
                    self.controller.seed_random(self.random_runs);
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.controller.pause();
                    self.controller
                        .seed_pattern(&patterns::PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.controller.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.controller.interval().as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=20.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.controller
                        .set_interval(Duration::from_millis((1000.0 / speed) as u64));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Start runs one generation every step interval.");

            ui.separator();

            // Grid canvas
            let (canvas_w, canvas_h) = self.controller.canvas_size();
            let (response, painter) =
                ui.allocate_painter(Vec2::new(canvas_w, canvas_h), Sense::click());
            let origin = response.rect.min;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let rel = pos - origin;
                    self.controller.handle_click(rel.x, rel.y);
                }
            }

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            let cell_px = self.controller.cell_px();
            let inset = cell_px * 0.06;
            for (x, y, alive) in self.controller.grid().cells() {
                let rect = Rect::from_min_size(
                    egui::pos2(origin.x + x as f32 * cell_px, origin.y + y as f32 * cell_px),
                    Vec2::splat(cell_px),
                );
                if alive {
                    painter.rect_filled(rect.shrink(inset), 0.0, self.live_color);
                }
                painter.rect_stroke(rect, 0.0, Stroke::new(0.5, self.line_color));
            }

            ui.separator();

            // Statistics
            let total = GRID_COLS * GRID_ROWS;
            let live_cells = self.controller.grid().live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });

        // Keep the timer serviced while the simulation runs.
        if self.controller.is_running() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
