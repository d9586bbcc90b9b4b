//! Checks on the shape of a finished maze, done over a petgraph graph of its open cells.

use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

use crate::cells::{CellType, Point};
use crate::generators::Maze;
use crate::grid::Grid;
use crate::utils::{fnv_hashmap, FnvHashMap};

/// Open cells as nodes, with an edge between every pair of 4-adjacent open cells.
#[derive(Debug)]
pub struct OpenCellGraph {
    pub graph: UnGraph<Point, ()>,
    pub nodes: FnvHashMap<Point, NodeIndex>,
}

impl OpenCellGraph {
    pub fn new(grid: &Grid) -> OpenCellGraph {
        let is_open = |p: Point| grid.get(p).map(|c| c == CellType::Space).unwrap_or(false);

        let open_count = grid.count(CellType::Space);
        let mut graph = UnGraph::with_capacity(open_count, open_count);
        let mut nodes = fnv_hashmap(open_count);

        for coord in grid.iter().filter(|&p| is_open(p)) {
            nodes.insert(coord, graph.add_node(coord));
        }

        // Only look right and down so every adjacency is added once.
        for (&coord, &index) in nodes.iter() {
            for &adjacent in &[Point::new(coord.x + 1, coord.y), Point::new(coord.x, coord.y + 1)] {
                if let Some(&adjacent_index) = nodes.get(&adjacent) {
                    graph.add_edge(index, adjacent_index, ());
                }
            }
        }

        OpenCellGraph { graph, nodes }
    }

    /// Number of open cells reachable from `from`, including itself. Zero if `from` is not open.
    pub fn reachable_from(&self, from: Point) -> usize {
        let start = match self.nodes.get(&from) {
            Some(&index) => index,
            None => return 0,
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut count = 0;
        while bfs.next(&self.graph).is_some() {
            count += 1;
        }
        count
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MazeSummary {
    pub open_cells: usize,
    pub passages: usize,
    pub components: usize,
    pub reachable_from_start: usize,
    pub cyclic: bool,
}

impl MazeSummary {
    /// Every open cell reachable from the start and exactly one route between any two of them.
    pub fn is_perfect(&self) -> bool {
        self.open_cells > 0 &&
        self.components == 1 &&
        !self.cyclic &&
        self.passages + 1 == self.open_cells &&
        self.reachable_from_start == self.open_cells
    }
}

pub fn summarise(maze: &Maze) -> MazeSummary {
    let open = OpenCellGraph::new(maze.grid());
    MazeSummary {
        open_cells: open.graph.node_count(),
        passages: open.graph.edge_count(),
        components: connected_components(&open.graph),
        reachable_from_start: open.reachable_from(maze.start()),
        cyclic: is_cyclic_undirected(&open.graph),
    }
}
