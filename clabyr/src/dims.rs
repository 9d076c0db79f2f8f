use std::ops::{Add, Sub};

/// Position or offset on the grid, stored as `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const UP: Dims = Dims(-1, 0);
    pub const LEFT: Dims = Dims(0, -1);
    pub const RIGHT: Dims = Dims(0, 1);
    pub const DOWN: Dims = Dims(1, 0);

    /// The four axis-aligned unit moves.
    pub const NEIGHBOR_OFFSETS: [Dims; 4] = [Self::UP, Self::LEFT, Self::RIGHT, Self::DOWN];

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn manhattan(self, other: Dims) -> i32 {
        (self - other).abs_sum()
    }

    /// Iterates all positions of a `height × width` rectangle in row-major order.
    pub fn iter_fill(height: i32, width: i32) -> impl Iterator<Item = Dims> {
        (0..height).flat_map(move |row| (0..width).map(move |column| Dims(row, column)))
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(usize, usize)> for Dims {
    fn from(tuple: (usize, usize)) -> Self {
        debug_assert!(tuple.0 <= i32::MAX as usize && tuple.1 <= i32::MAX as usize);
        Dims(tuple.0 as i32, tuple.1 as i32)
    }
}
