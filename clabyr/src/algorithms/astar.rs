use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::{Cell, Grid},
};

const EDGE_COST: u32 = 1;

#[derive(Debug, Clone, Copy)]
struct Node {
    is_wall: bool,
    /// Index of the previous node on the best known path, own index if none.
    parent: usize,
    g: u32,
    h: u32,
    f: u32,
}

impl Node {
    fn has_better_path(&self, through: &Node) -> bool {
        through.g + EDGE_COST < self.g
    }
}

/// A* search over a mirror of the grid with the Manhattan distance heuristic.
///
/// Nodes live in an arena, the open set holds `(f, index)` pairs and entries
/// whose `f` no longer matches the arena are skipped when popped.
pub struct AStar {
    nodes: Array2D<Node>,
    start: Option<usize>,
    end: Option<usize>,
    open: BinaryHeap<Reverse<(u32, usize)>>,
    in_open: Vec<bool>,
    closed: Vec<bool>,
}

impl AStar {
    pub fn new(grid: &Grid, start: Dims, end: Dims) -> Self {
        let cells = grid.get_cells();
        let mut idx = 0;
        let nodes = Array2D::from_fn(cells.height(), cells.width(), |pos| {
            let node = Node {
                is_wall: cells[pos].is_wall(),
                parent: idx,
                g: 0,
                h: pos.manhattan(end).unsigned_abs(),
                f: 0,
            };
            idx += 1;
            node
        });

        let len = nodes.len();
        AStar {
            start: nodes.dim_to_idx(start),
            end: nodes.dim_to_idx(end).filter(|&i| !nodes[i].is_wall),
            nodes,
            open: BinaryHeap::new(),
            in_open: vec![false; len],
            closed: vec![false; len],
        }
    }

    /// Returns the shortest path from start to end as escape cells, both ends
    /// included, or an empty vector if there is none.
    pub fn search(mut self) -> Vec<Cell> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::debug!("start or end of the search is not usable");
            return Vec::new();
        };

        let start_node = &mut self.nodes[start];
        start_node.g = 0;
        start_node.f = start_node.h;
        self.push(start);

        while let Some(Reverse((f, cur))) = self.open.pop() {
            if self.closed[cur] || f != self.nodes[cur].f {
                continue;
            }
            self.in_open[cur] = false;

            if cur == end {
                let path = self.reconstruct_path(cur);
                log::debug!("escape found, {} cells long", path.len());
                return path;
            }

            self.closed[cur] = true;
            self.update_neighbors(cur);
        }

        log::debug!("open set exhausted, there is no escape");
        Vec::new()
    }

    fn push(&mut self, idx: usize) {
        self.in_open[idx] = true;
        self.open.push(Reverse((self.nodes[idx].f, idx)));
    }

    fn update_neighbors(&mut self, cur: usize) {
        let Some(pos) = self.nodes.idx_to_dim(cur) else {
            return;
        };
        let cur_node = self.nodes[cur];

        for off in Dims::NEIGHBOR_OFFSETS {
            let Some(next) = self.nodes.dim_to_idx(pos + off) else {
                continue;
            };

            let node = &mut self.nodes[next];
            if node.is_wall || self.closed[next] {
                continue;
            }

            if self.in_open[next] && !node.has_better_path(&cur_node) {
                continue;
            }

            node.parent = cur;
            node.g = cur_node.g + EDGE_COST;
            node.f = node.g + node.h;
            log::trace!("relaxed {:?} to g = {}", pos + off, node.g);
            self.push(next);
        }
    }

    fn reconstruct_path(&self, end: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = end;
        loop {
            if let Some(pos) = self.nodes.idx_to_dim(cur) {
                path.push(Cell::escape(pos));
            }
            let parent = self.nodes[cur].parent;
            if parent == cur {
                break;
            }
            cur = parent;
        }
        path.reverse();
        path
    }
}

/// Convenience wrapper around [`AStar`].
pub fn find_path(grid: &Grid, start: Dims, end: Dims) -> Vec<Cell> {
    AStar::new(grid, start, end).search()
}
