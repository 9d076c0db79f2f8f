pub mod astar;
pub mod disjoint_set;
pub mod rnd_kruskals;

pub use astar::{find_path, AStar};
pub use disjoint_set::DisjointSet;
pub use rnd_kruskals::RndKruskals;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::gameboard::Cell;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a prepared grid skeleton.
///
/// Implementors get the size of the real grid and return the cells to replace,
/// they never see the grid itself nor the entrance and exit.
pub trait PassageGenerator: std::fmt::Debug {
    fn generate(&self, height: usize, width: usize, rng: &mut Random) -> Vec<Cell>;
}

/// Seeds a [`Random`], drawing the seed from the thread rng when none is given.
pub fn random_from_seed(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}
