//! Randomized Prim's maze generation.
//!
//! The maze grows outwards from the centre cell. Every wall cell that touches exactly one
//! open cell is a frontier candidate; a candidate picked at random is opened only if it
//! still touches exactly one open cell, so no passage can ever close a loop. The result is
//! a spanning tree of open cells inside a permanently walled boundary ring.

use log::{debug, trace};
use rand::Rng;

use crate::cells::{CellType, Point};
use crate::errors::*;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::neighbours::{count_spaces, neighbours};
use crate::units::{Height, Width};

/// A source of uniformly distributed indices, consulted once per frontier pick.
pub trait IndexSource {
    /// An index in `[0, upper)`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of indices, cycling when it runs out.
///
/// An empty script always picks the first frontier cell.
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedIndices {
    pub fn new(script: Vec<usize>) -> ScriptedIndices {
        ScriptedIndices { script, position: 0 }
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.position % self.script.len()];
        self.position += 1;
        index % upper
    }
}

/// Wraps another source and keeps every index it hands out.
#[derive(Debug, Clone)]
pub struct RecordedIndices<S> {
    source: S,
    drawn: Vec<usize>,
}

impl<S: IndexSource> RecordedIndices<S> {
    pub fn new(source: S) -> RecordedIndices<S> {
        RecordedIndices { source, drawn: Vec::new() }
    }

    pub fn drawn(&self) -> &[usize] {
        &self.drawn
    }

    /// A script that replays exactly what was drawn so far.
    pub fn to_script(&self) -> ScriptedIndices {
        ScriptedIndices::new(self.drawn.clone())
    }
}

impl<S: IndexSource> IndexSource for RecordedIndices<S> {
    fn next_index(&mut self, upper: usize) -> usize {
        let index = self.source.next_index(upper);
        self.drawn.push(index);
        index
    }
}

/// A finished maze: the cell grid and the cell generation started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Point,
}

impl Maze {
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }
}

/// What one generation step did with the cell it took off the frontier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Opened(Point),
    Rejected(Point),
}

/// Prim's generation in progress.
///
/// Construction fills the grid with walls, opens the start cell and seeds the frontier
/// with its neighbours. Each `step` then consumes exactly one frontier cell.
#[derive(Debug, Clone)]
pub struct Prim {
    grid: Grid,
    start: Point,
    frontier: Frontier,
    opened: usize,
    rejected: usize,
}

impl Prim {
    pub fn new(width: Width, height: Height) -> Result<Prim> {
        let mut grid = Grid::new(width, height, CellType::Wall)?;

        // Integer division: for even dimensions the start sits just past the true centre.
        let start = Point::new((width.0 / 2) as u32, (height.0 / 2) as u32);
        grid.set(start, CellType::Space)?;

        let mut frontier = Frontier::with_capacity(width.0 + height.0);
        frontier.extend(neighbours(&grid, start));

        debug!("prim: {} x {} grid, start {}, {} initial frontier cells",
               width.0, height.0, start, frontier.len());

        Ok(Prim {
            grid,
            start,
            frontier,
            opened: 1,
            rejected: 0,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Take one random cell off the frontier and open it if it still touches exactly one
    /// open cell. Returns `None` once the frontier is exhausted.
    ///
    /// Indices from `source` beyond the frontier's length wrap around.
    pub fn step<S: IndexSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<Step>> {
        if self.frontier.is_empty() {
            return Ok(None);
        }

        let pick = source.next_index(self.frontier.len()) % self.frontier.len();
        let node = match self.frontier.remove_at(pick) {
            Some(node) => node,
            None => return Ok(None),
        };

        let node_neighbours = neighbours(&self.grid, node);
        if count_spaces(&self.grid, &node_neighbours)? != 1 {
            // Opening it would join two passages into a loop. Never reconsidered.
            trace!("prim: rejected {}", node);
            self.rejected += 1;
            return Ok(Some(Step::Rejected(node)));
        }

        self.grid.set(node, CellType::Space)?;
        self.opened += 1;

        for &adjacent in node_neighbours.iter() {
            if self.grid.get(adjacent)? == CellType::Space {
                continue;
            }
            let adjacent_neighbours = neighbours(&self.grid, adjacent);
            if count_spaces(&self.grid, &adjacent_neighbours)? == 1 {
                self.frontier.push(adjacent);
            }
        }

        Ok(Some(Step::Opened(node)))
    }

    /// Step until the frontier is empty.
    pub fn finish<S: IndexSource + ?Sized>(mut self, source: &mut S) -> Result<Maze> {
        while self.step(source)?.is_some() {}

        debug!("prim: finished with {} open cells, {} rejected candidates",
               self.opened, self.rejected);

        Ok(Maze {
            grid: self.grid,
            start: self.start,
        })
    }
}

/// Generate a `width` x `height` maze with randomized Prim's algorithm.
///
/// Fails only for a zero dimension. Grids narrower or shorter than 3 cells are degenerate:
/// the start cell is the only open cell.
pub fn prim<S: IndexSource + ?Sized>(width: Width, height: Height, source: &mut S) -> Result<Maze> {
    Prim::new(width, height)?.finish(source)
}
