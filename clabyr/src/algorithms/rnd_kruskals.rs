use rand::seq::SliceRandom;

use super::{DisjointSet, PassageGenerator, Random};
use crate::{dims::Dims, gameboard::Cell};

/// Pair of logical cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge(usize, usize);

/// Randomized Kruskal's algorithm over the logical cells.
///
/// A logical cell sits on every odd row and odd column of the real grid, the
/// walls between them are the only cells this generator ever carves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RndKruskals;

impl RndKruskals {
    fn logical_size(height: usize, width: usize) -> (usize, usize) {
        (height.saturating_sub(1) / 2, width.saturating_sub(1) / 2)
    }

    fn edges(lh: usize, lw: usize) -> Vec<Edge> {
        let idx = |row: usize, column: usize| row * lw + column;

        let mut edges = Vec::with_capacity((lh * lw * 2).saturating_sub(lh + lw));
        for row in 0..lh {
            for column in 0..lw {
                if column > 0 {
                    edges.push(Edge(idx(row, column), idx(row, column - 1)));
                }
                if row > 0 {
                    edges.push(Edge(idx(row, column), idx(row - 1, column)));
                }
            }
        }
        edges
    }

    /// Wall cell of the real grid standing between two logical cells.
    fn doorway(Edge(a, b): Edge, lw: usize) -> Cell {
        let (a_row, a_col) = (a / lw, a % lw);
        let (b_row, b_col) = (b / lw, b % lw);
        Cell::passage(Dims::from((a_row + b_row + 1, a_col + b_col + 1)))
    }
}

impl PassageGenerator for RndKruskals {
    fn generate(&self, height: usize, width: usize, rng: &mut Random) -> Vec<Cell> {
        let (lh, lw) = Self::logical_size(height, width);
        if lh == 0 || lw == 0 {
            log::debug!("no logical cells in {}x{} grid, nothing to carve", height, width);
            return Vec::new();
        }

        let mut edges = Self::edges(lh, lw);
        edges.shuffle(rng);

        let mut sets = DisjointSet::new(lh * lw);
        let tree: Vec<Cell> = edges
            .into_iter()
            .filter(|&Edge(a, b)| sets.union(a, b))
            .map(|edge| Self::doorway(edge, lw))
            .collect();

        log::debug!(
            "carved {} doorways between {}x{} logical cells",
            tree.len(),
            lh,
            lw
        );

        tree
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    fn rng(seed: u64) -> Random {
        Random::seed_from_u64(seed)
    }

    #[test]
    fn edge_count() {
        assert_eq!(RndKruskals::edges(1, 1).len(), 0);
        assert_eq!(RndKruskals::edges(1, 4).len(), 3);
        assert_eq!(RndKruskals::edges(3, 3).len(), 12);
        assert_eq!(RndKruskals::edges(2, 5).len(), 13);
    }

    #[test]
    fn spanning_tree_size() {
        for (h, w) in [(5, 5), (7, 11), (10, 10), (21, 8), (3, 3)] {
            let (lh, lw) = RndKruskals::logical_size(h, w);
            let passages = RndKruskals.generate(h, w, &mut rng(h as u64 * 31 + w as u64));
            assert_eq!(passages.len(), lh * lw - 1, "size {}x{}", h, w);
        }
    }

    #[test]
    fn doorways_sit_between_logical_cells() {
        let passages = RndKruskals.generate(15, 9, &mut rng(3));
        for cell in passages {
            let Dims(row, column) = cell.get_pos();
            assert!(row >= 1 && row < 14 && column >= 1 && column < 8);
            // exactly one coordinate is even
            assert!((row % 2 == 0) ^ (column % 2 == 0), "{:?}", cell);
        }
    }

    #[test]
    fn degenerate_sizes_carve_nothing() {
        for (h, w) in [(1, 1), (2, 2), (1, 9), (9, 2), (0, 0)] {
            assert!(RndKruskals.generate(h, w, &mut rng(0)).is_empty());
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = RndKruskals.generate(31, 17, &mut rng(42));
        let b = RndKruskals.generate(31, 17, &mut rng(42));
        let pos = |cells: &[Cell]| cells.iter().map(Cell::get_pos).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
    }
}
