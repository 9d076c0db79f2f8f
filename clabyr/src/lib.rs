//! Core of labyr.
//!
//! Generates perfect mazes with randomized Kruskal's algorithm and finds the
//! way out of them with A*. The [`Maze`] is the entry point, the rest is
//! public for anyone who wants to drive the algorithms directly.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod gameboard;
pub mod maze;

pub use error::LoadError;
pub use maze::Maze;
