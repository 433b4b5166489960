//! Grid state and the Game of Life evolution rule.
//!
//! The grid is a dense, row-major `Vec<bool>` with fixed dimensions. A
//! spare buffer of the same size is kept so that `step()` always reads
//! neighbor counts from the pre-step generation and writes the next
//! generation elsewhere, then swaps.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Fixed-size field of live/dead cells. Dimensions never change after
/// construction; edges do not wrap.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; width * height],
            next: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Current status of the cell at `(x, y)`.
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Flips the cell at `(x, y)` and returns its new status. No other
    /// cell is affected; nothing is mutated on a bounds error.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Writes the cell at `(x, y)` directly. Used by pattern seeding.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Every cell with its coordinate, row by row. This is the repaint
    /// contract: the host maps each `(x, y, alive)` to pixels.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| (i % self.width, i / self.width, alive))
    }

    /// Live cells among the 8 Moore neighbors of `(x, y)`. Offsets that
    /// fall off the grid are skipped, so edge and corner cells see fewer
    /// candidates.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                    continue;
                }
                if self.cells[self.index(nx as usize, ny as usize)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the whole grid by one generation. Every neighbor count
    /// reads the pre-step snapshot; results land in the spare buffer,
    /// which is swapped in once complete. In-place updates would leak
    /// next-generation cells into later neighbor counts.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[self.index(x, y)];
                let count = self.live_neighbors(x, y);
                let idx = self.index(x, y);
                self.next[idx] = match (alive, count) {
                    (true, 2) | (true, 3) => true, // survival
                    (false, 3) => true,            // birth
                    _ => false,                    // death or stays dead
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }
}
