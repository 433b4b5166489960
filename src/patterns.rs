//! Named seed patterns, sized for the default 20x20 grid.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(9, 10), (10, 10), (11, 10)],
    },
    Pattern {
        name: "Toad",
        cells: &[(9, 9), (10, 9), (11, 9), (8, 10), (9, 10), (10, 10)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (7, 7), (8, 7), (7, 8), (8, 8),
            (9, 9), (10, 9), (9, 10), (10, 10),
        ],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (5, 3), (6, 3), (7, 3), (11, 3), (12, 3), (13, 3),
            (3, 5), (8, 5), (10, 5), (15, 5),
            (3, 6), (8, 6), (10, 6), (15, 6),
            (3, 7), (8, 7), (10, 7), (15, 7),
            (5, 8), (6, 8), (7, 8), (11, 8), (12, 8), (13, 8),
            // Bottom section (mirrored)
            (5, 10), (6, 10), (7, 10), (11, 10), (12, 10), (13, 10),
            (3, 11), (8, 11), (10, 11), (15, 11),
            (3, 12), (8, 12), (10, 12), (15, 12),
            (3, 13), (8, 13), (10, 13), (15, 13),
            (5, 15), (6, 15), (7, 15), (11, 15), (12, 15), (13, 15),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(10, 9), (11, 9), (9, 10), (10, 10), (10, 11)],
    },
];

/// Clears the grid and writes a pattern. Cells falling outside the grid
/// are skipped, so every pattern is safe on any grid size.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    for &(x, y) in pattern.cells {
        let _ = grid.set(x, y, true);
    }
}

/// Clears the grid and fills it pseudo-randomly at roughly one-third
/// live density. Deterministic for a given seed.
pub fn apply_random(grid: &mut Grid, seed_value: u64) {
    grid.clear();

    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let _ = grid.set(x, y, (seed % 3) == 0);
        }
    }
}
