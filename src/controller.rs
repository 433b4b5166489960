//! Mediates between the grid and the interactive canvas: pointer
//! coordinates in, cell toggles and timed generation steps out.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::grid::Grid;
use crate::patterns::{self, Pattern};

/// Default period between generations while running.
pub const STEP_INTERVAL: Duration = Duration::from_millis(600);

/// Drives a [`Grid`] from click and timer events.
///
/// The scale factor `cell_px` is fixed at construction from the canvas
/// edge length, matching the canvas the host paints. The evolution loop
/// is a single `running` flag: redundant start requests are ignored so
/// two concurrent cadences can never advance the same grid.
pub struct GridController {
    grid: Grid,
    cell_px: f32,
    running: bool,
    interval: Duration,
    last_step: Instant,
    generation: u64,
}

impl GridController {
    /// # Panics
    ///
    /// Panics if `canvas_px` is not a positive, finite pixel count.
    pub fn new(grid: Grid, canvas_px: f32) -> Self {
        assert!(
            canvas_px.is_finite() && canvas_px > 0.0,
            "canvas size must be positive"
        );
        let cell_px = canvas_px / grid.width() as f32;
        info!(
            width = grid.width(),
            height = grid.height(),
            canvas_px,
            cell_px,
            "grid controller ready"
        );
        Self {
            grid,
            cell_px,
            running: false,
            interval: STEP_INTERVAL,
            last_step: Instant::now(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Pixel edge length of one cell on the canvas.
    pub fn cell_px(&self) -> f32 {
        self.cell_px
    }

    /// Canvas extent in pixels, `(width, height)`.
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.cell_px * self.grid.width() as f32,
            self.cell_px * self.grid.height() as f32,
        )
    }

    /// Maps a canvas-relative pixel position to a cell coordinate.
    /// Positions off the canvas, including clicks exactly on the far
    /// boundary, are rejected rather than clamped.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px / self.cell_px).floor() as usize;
        let y = (py / self.cell_px).floor() as usize;
        if x < self.grid.width() && y < self.grid.height() {
            Some((x, y))
        } else {
            None
        }
    }

    /// Toggles the cell under a click and returns its new status, or
    /// `None` for clicks outside the grid.
    pub fn handle_click(&mut self, px: f32, py: f32) -> Option<bool> {
        let (x, y) = self.cell_at(px, py)?;
        match self.grid.toggle(x, y) {
            Ok(alive) => {
                debug!(px, py, x, y, alive, "cell toggled");
                Some(alive)
            }
            Err(err) => {
                // cell_at pre-validates, so this branch is unreachable in
                // correct operation.
                warn!(%err, "derived cell rejected by grid");
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the evolution loop. Returns `false` (and does nothing) if
    /// it is already running, so repeated triggers cannot stack a second
    /// timer cadence.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_step = now;
        info!("evolution started");
        true
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            info!(generation = self.generation, "evolution paused");
        }
    }

    /// Timer callback: advances one generation if running and the step
    /// interval has elapsed. Returns `true` when the grid changed and a
    /// repaint is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running || now.duration_since(self.last_step) < self.interval {
            return false;
        }
        self.grid.step();
        self.last_step = now;
        self.generation += 1;
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Generations advanced since the last clear or seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Replaces the grid contents with a named pattern.
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        info!(pattern = pattern.name, "pattern applied");
    }

    /// Replaces the grid contents with a pseudo-random fill.
    pub fn seed_random(&mut self, seed: u64) {
        patterns::apply_random(&mut self.grid, seed);
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> GridController {
        // 10x10 grid on a 100px canvas: 10px cells.
        GridController::new(Grid::new(10, 10), 100.0)
    }

    #[test]
    fn pixel_positions_floor_to_cells() {
        let ctrl = controller();
        assert_eq!(ctrl.cell_px(), 10.0);
        assert_eq!(ctrl.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(ctrl.cell_at(9.9, 9.9), Some((0, 0)));
        assert_eq!(ctrl.cell_at(10.0, 0.0), Some((1, 0)));
        assert_eq!(ctrl.cell_at(55.0, 73.0), Some((5, 7)));
        assert_eq!(ctrl.cell_at(99.9, 99.9), Some((9, 9)));
    }

    #[test]
    fn off_canvas_positions_are_rejected() {
        let ctrl = controller();
        // Exactly on the far boundary floors to index 10, out of range.
        assert_eq!(ctrl.cell_at(100.0, 50.0), None);
        assert_eq!(ctrl.cell_at(50.0, 100.0), None);
        assert_eq!(ctrl.cell_at(-0.1, 50.0), None);
        assert_eq!(ctrl.cell_at(50.0, -3.0), None);
    }

    #[test]
    fn click_toggles_exactly_one_cell() {
        let mut ctrl = controller();
        assert_eq!(ctrl.handle_click(25.0, 35.0), Some(true));
        assert_eq!(ctrl.grid().is_alive(2, 3), Ok(true));
        assert_eq!(ctrl.grid().live_count(), 1);
        assert_eq!(ctrl.handle_click(25.0, 35.0), Some(false));
        assert_eq!(ctrl.grid().live_count(), 0);
    }

    #[test]
    fn out_of_range_click_is_discarded() {
        let mut ctrl = controller();
        assert_eq!(ctrl.handle_click(120.0, 10.0), None);
        assert_eq!(ctrl.grid().live_count(), 0);
    }

    #[test]
    fn redundant_start_is_ignored() {
        let mut ctrl = controller();
        let now = Instant::now();
        assert!(!ctrl.is_running());
        assert!(ctrl.start(now));
        assert!(ctrl.is_running());
        assert!(!ctrl.start(now));
        assert!(ctrl.is_running());
    }

    #[test]
    fn tick_respects_the_step_interval() {
        let mut ctrl = controller();
        ctrl.handle_click(15.0, 5.0); // lone cell, dies on first step
        let start = Instant::now();
        ctrl.start(start);
        assert!(!ctrl.tick(start + Duration::from_millis(100)));
        assert_eq!(ctrl.grid().live_count(), 1);
        assert!(ctrl.tick(start + STEP_INTERVAL));
        assert_eq!(ctrl.grid().live_count(), 0);
        assert_eq!(ctrl.generation(), 1);
    }

    #[test]
    fn tick_does_nothing_while_idle() {
        let mut ctrl = controller();
        ctrl.handle_click(15.0, 5.0);
        assert!(!ctrl.tick(Instant::now() + Duration::from_secs(10)));
        assert_eq!(ctrl.grid().live_count(), 1);
        assert_eq!(ctrl.generation(), 0);
    }

    #[test]
    fn pause_holds_the_grid_still() {
        let mut ctrl = controller();
        ctrl.handle_click(15.0, 5.0);
        let start = Instant::now();
        ctrl.start(start);
        ctrl.pause();
        assert!(!ctrl.is_running());
        assert!(!ctrl.tick(start + Duration::from_secs(5)));
        assert_eq!(ctrl.grid().live_count(), 1);
    }

    #[test]
    fn clear_resets_cells_and_generation() {
        let mut ctrl = controller();
        ctrl.handle_click(15.0, 5.0);
        let start = Instant::now();
        ctrl.start(start);
        ctrl.tick(start + STEP_INTERVAL);
        assert_eq!(ctrl.generation(), 1);
        ctrl.clear();
        assert_eq!(ctrl.grid().live_count(), 0);
        assert_eq!(ctrl.generation(), 0);
    }

    #[test]
    fn faster_interval_steps_sooner() {
        let mut ctrl = controller();
        ctrl.set_interval(Duration::from_millis(50));
        let start = Instant::now();
        ctrl.start(start);
        assert!(ctrl.tick(start + Duration::from_millis(50)));
    }
}
