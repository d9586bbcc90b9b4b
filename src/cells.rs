use std::convert::From;
use std::fmt;

/// The contents of one maze cell.
///
/// Generation only ever produces `Space` and `Wall`. The key/door pairs are tags for
/// placement logic that runs on a finished maze.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellType {
    Space,
    Wall,
    BlueKey,
    BlueDoor,
    RedKey,
    RedDoor,
    YellowKey,
    YellowDoor,
    GreenKey,
    GreenDoor,
    PurpleKey,
    PurpleDoor,
}

impl CellType {
    #[inline]
    pub fn is_space(self) -> bool {
        self == CellType::Space
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellType::Wall
    }
}

impl Default for CellType {
    fn default() -> CellType {
        CellType::Wall
    }
}

/// A grid cell position, `x` is the column and `y` the row.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Point {
        Point { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from(x_y_pair: (u32, u32)) -> Point {
        Point::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_from_pair() {
        assert_eq!(Point::from((3, 7)), Point::new(3, 7));
        assert_eq!(format!("{}", Point::new(3, 7)), "(3, 7)");
    }
}
