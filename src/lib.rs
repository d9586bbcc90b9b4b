//! **prim_mazes** generates walled grid mazes with a randomized Prim's algorithm and maps
//! grid cells to world positions for whatever builds the walls.

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

pub mod builder;
pub mod cells;
pub mod connectivity;
pub mod coordinates;
pub mod errors;
pub mod frontier;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod neighbours;
pub mod renderers;
pub mod units;
pub mod utils;

pub use crate::cells::{CellType, Point};
pub use crate::generators::{prim, Maze};
pub use crate::grid::Grid;
