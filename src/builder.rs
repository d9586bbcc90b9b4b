//! The hand-off from a generated maze to whatever places physical walls.
//!
//! A host implements `WallSink`; `build_maze` walks the grid column by column and reports a
//! world position for every wall cell. Floor cells produce nothing.

use log::debug;

use crate::cells::Point;
use crate::coordinates::TileMapping;
use crate::errors::*;
use crate::generators::Maze;
use crate::units::TileSize;

/// Gap left between neighbouring bricks so their edges stay visible.
pub const DEFAULT_BRICK_GAP: f32 = 0.001;

/// Size and height of the brick placed on each wall cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrickLayout {
    pub brick_width: f32,
    pub brick_y: f32,
    pub gap: f32,
}

impl BrickLayout {
    pub fn new(brick_width: f32, brick_y: f32) -> BrickLayout {
        BrickLayout {
            brick_width,
            brick_y,
            gap: DEFAULT_BRICK_GAP,
        }
    }

    pub fn with_gap(self, gap: f32) -> BrickLayout {
        BrickLayout { gap, ..self }
    }

    #[inline]
    pub fn tile_size(&self) -> TileSize {
        TileSize(self.brick_width + self.gap)
    }

    /// The tile mapping centred on `maze`.
    pub fn mapping_for(&self, maze: &Maze) -> Result<TileMapping> {
        let grid = maze.grid();
        TileMapping::centred(grid.width(), grid.height(), self.tile_size())
    }
}

pub trait WallSink {
    /// Called once per wall cell. `position` is `[x, y, z]` with the grid's rows along z.
    fn place_wall(&mut self, cell: Point, position: [f32; 3]) -> Result<()>;
}

/// Collects placements in the order they were made.
#[derive(Debug, Clone, Default)]
pub struct WallPlacements {
    pub placements: Vec<(Point, [f32; 3])>,
}

impl WallSink for WallPlacements {
    fn place_wall(&mut self, cell: Point, position: [f32; 3]) -> Result<()> {
        self.placements.push((cell, position));
        Ok(())
    }
}

/// Report every wall of `maze` to `sink`. Returns the mapping used so the caller can convert
/// positions back to cells later in the same session.
pub fn build_maze<W: WallSink + ?Sized>(maze: &Maze,
                                        layout: &BrickLayout,
                                        sink: &mut W)
                                        -> Result<TileMapping> {
    let mapping = layout.mapping_for(maze)?;
    let grid = maze.grid();
    let mut walls = 0;

    // Grid dimensions are capped at i32::MAX, so cell coordinates fit a column/row index.
    for column in grid.iter_column() {
        for cell in column {
            if grid.get(cell)?.is_wall() {
                let position = [mapping.col_to_x(cell.x as i32),
                                layout.brick_y,
                                mapping.row_to_y(cell.y as i32)];
                sink.place_wall(cell, position)?;
                walls += 1;
            }
        }
    }

    debug!("build: placed {} walls with tile size {}", walls, mapping.tile_size());
    Ok(mapping)
}
