use std::fmt;

use crate::cells::Point;
use crate::units::{Height, Width};

#[derive(Clone)]
pub struct CellIter {
    width: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(width: Width, height: Height) -> CellIter {
        CellIter {
            width: width.0,
            current_cell_number: 0,
            cells_count: width.0 * height.0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Point;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let index = self.current_cell_number;
            self.current_cell_number += 1;
            Some(Point::new((index % self.width) as u32, (index / self.width) as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BatchIterType {
    Row,
    Column,
}

/// Iterates whole rows (top to bottom) or whole columns (left to right).
#[derive(Debug, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    width: usize,
    height: usize,
    current_index: usize,
}

impl BatchIter {
    pub fn new(iter_type: BatchIterType, width: Width, height: Height) -> BatchIter {
        BatchIter {
            iter_type,
            width: width.0,
            height: height.0,
            current_index: 0,
        }
    }

    fn batch_count(&self) -> usize {
        match self.iter_type {
            BatchIterType::Row => self.height,
            BatchIterType::Column => self.width,
        }
    }
}

impl ExactSizeIterator for BatchIter {}
impl Iterator for BatchIter {
    type Item = Vec<Point>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.batch_count() {
            return None;
        }
        let i = self.current_index as u32;
        self.current_index += 1;

        let batch = match self.iter_type {
            BatchIterType::Row => (0..self.width as u32).map(|x| Point::new(x, i)).collect(),
            BatchIterType::Column => (0..self.height as u32).map(|y| Point::new(i, y)).collect(),
        };
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch_count() - self.current_index;
        (remaining, Some(remaining))
    }
}
