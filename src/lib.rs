//! Interactive Conway's Game of Life on a clickable canvas.
//!
//! [`grid::Grid`] owns the cell state and the evolution rule;
//! [`controller::GridController`] turns pointer clicks and timer ticks
//! into toggles and generation steps. The egui glue in [`ui`] is the
//! only module that touches a display.

pub mod controller;
pub mod grid;
pub mod patterns;
pub mod ui;

pub use controller::{GridController, STEP_INTERVAL};
pub use grid::{Grid, GridError};
