use std::fmt;

use error_chain::bail;

use crate::cells::{CellType, Point};
use crate::errors::*;
use crate::grid_iterators::{BatchIter, BatchIterType, CellIter};
use crate::units::{Height, Width};

/// A rectangular array of `CellType` indexed by `Point`, `x` in `[0, width)` and `y` in `[0, height)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellType>,
    width: Width,
    height: Height,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, spaces: {:?}",
               self.width, self.height, self.count(CellType::Space))
    }
}

const MAX_DIMENSION: usize = i32::MAX as usize;

impl Grid {
    /// Allocate a grid with every cell set to `fill`.
    ///
    /// Fails with `InvalidDimension` if either dimension is zero or too large to index
    /// with an `i32` column/row, which is what world-space mapping uses.
    pub fn new(width: Width, height: Height, fill: CellType) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        if w == 0 || h == 0 || w > MAX_DIMENSION || h > MAX_DIMENSION {
            bail!(ErrorKind::InvalidDimension(w, h));
        }
        let size = w.checked_mul(h).ok_or(ErrorKind::InvalidDimension(w, h))?;

        Ok(Grid {
            cells: vec![fill; size],
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the coordinate within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Point) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    pub fn get(&self, coord: Point) -> Result<CellType> {
        let index = self.index_of(coord)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, coord: Point, value: CellType) -> Result<()> {
        let index = self.index_of(coord)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Number of cells holding exactly `value`.
    pub fn count(&self, value: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// All coordinates, row by row.
    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::new(BatchIterType::Row, self.width, self.height)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::new(BatchIterType::Column, self.width, self.height)
    }

    #[inline]
    fn index_of(&self, coord: Point) -> Result<usize> {
        if self.is_valid_coordinate(coord) {
            Ok(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            Err(ErrorKind::IndexOutOfRange(coord.x, coord.y, self.width.0, self.height.0).into())
        }
    }
}
