pub mod board;
pub use board::{Grid, RenderStyle};
pub mod cell;
pub use cell::{Cell, CellKind};
