use std::fmt;

use itertools::Itertools;

use crate::cells::{CellType, Point};
use crate::generators::Maze;
use crate::grid::Grid;

/// Decides the character drawn for each cell in a text rendering.
pub trait GridDisplay {
    fn render_cell(&self, _: Point, cell: CellType) -> char {
        cell_glyph(cell)
    }
}

/// `#` for walls, blank for floor, lowercase for keys and uppercase for their doors.
pub fn cell_glyph(cell: CellType) -> char {
    match cell {
        CellType::Space => ' ',
        CellType::Wall => '#',
        CellType::BlueKey => 'b',
        CellType::BlueDoor => 'B',
        CellType::RedKey => 'r',
        CellType::RedDoor => 'R',
        CellType::YellowKey => 'y',
        CellType::YellowDoor => 'Y',
        CellType::GreenKey => 'g',
        CellType::GreenDoor => 'G',
        CellType::PurpleKey => 'p',
        CellType::PurpleDoor => 'P',
    }
}

#[derive(Debug, Copy, Clone)]
pub struct PlainDisplay;
impl GridDisplay for PlainDisplay {}

/// Marks the maze's start cell with an `S`.
#[derive(Debug, Copy, Clone)]
pub struct StartPointDisplay {
    start: Point,
}
impl StartPointDisplay {
    pub fn new(start: Point) -> StartPointDisplay {
        StartPointDisplay { start }
    }
}
impl GridDisplay for StartPointDisplay {
    fn render_cell(&self, coord: Point, cell: CellType) -> char {
        if coord == self.start {
            'S'
        } else {
            cell_glyph(cell)
        }
    }
}

/// One line of text per grid row, top row first.
pub fn render_text(grid: &Grid, display: &dyn GridDisplay) -> String {
    grid.iter_row()
        .map(|row| {
            row.into_iter()
                .map(|coord| {
                    let cell = grid.get(coord).unwrap_or(CellType::Wall);
                    display.render_cell(coord, cell)
                })
                .collect::<String>()
        })
        .join("\n")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, &PlainDisplay))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self.grid(), &StartPointDisplay::new(self.start())))
    }
}
