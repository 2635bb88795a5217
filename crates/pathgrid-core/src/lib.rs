//! **pathgrid-core** — Grid and cell types for the pathgrid visualizer.
//!
//! This crate provides the board a search runs on: an integer [`Point`],
//! a [`Cell`] tagged with a [`CellState`], and a square [`Grid`] that owns
//! the cells and their cached adjacency lists.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use geom::Point;
pub use grid::{Grid, GridError};
