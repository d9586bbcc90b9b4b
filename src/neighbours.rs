//! The 4-neighbourhood used by maze generation.
//!
//! Neighbours are only ever reported inside the inner area of the grid: the outermost ring
//! of cells is never returned, so it stays wall for the lifetime of a maze.

use smallvec::SmallVec;

use crate::cells::{CellType, Point};
use crate::errors::*;
use crate::grid::Grid;

pub type NeighbourVec = SmallVec<[Point; 4]>;

/// Left, right, up and down neighbours of `coord`, skipping any that would land on the
/// boundary ring. A coordinate outside the grid has no neighbours, and neither does any cell
/// of a grid less than 3 cells wide or high, which has no interior at all.
pub fn neighbours(grid: &Grid, coord: Point) -> NeighbourVec {
    let mut found = NeighbourVec::new();
    if !grid.is_valid_coordinate(coord) {
        return found;
    }

    let (width, height) = (grid.width().0, grid.height().0);
    let (cx, cy) = (coord.x, coord.y);
    let is_inner = |p: Point| {
        p.x >= 1 && p.y >= 1 && (p.x as usize) + 1 < width && (p.y as usize) + 1 < height
    };

    if cx > 1 {
        found.push(Point::new(cx - 1, cy));
    }
    if (cx as usize) + 2 < width {
        found.push(Point::new(cx + 1, cy));
    }
    if cy > 1 {
        found.push(Point::new(cx, cy - 1));
    }
    if (cy as usize) + 2 < height {
        found.push(Point::new(cx, cy + 1));
    }
    // Only matters when `coord` is itself on the ring.
    found.retain(|p| is_inner(*p));

    found
}

/// How many of `coords` are open space.
pub fn count_spaces(grid: &Grid, coords: &[Point]) -> Result<usize> {
    let mut count = 0;
    for &coord in coords {
        if grid.get(coord)? == CellType::Space {
            count += 1;
        }
    }
    Ok(count)
}
