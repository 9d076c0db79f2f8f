use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Passage,
    Wall,
    Escape,
}

impl CellKind {
    /// Decodes a value of the text format, `1` is a wall, anything else a passage.
    pub fn from_code(code: i64) -> Self {
        if code == 1 {
            CellKind::Wall
        } else {
            CellKind::Passage
        }
    }

    /// Encodes for the text format, escape markers are exported as plain passages.
    pub fn to_code(self) -> u8 {
        match self {
            CellKind::Wall => 1,
            CellKind::Passage | CellKind::Escape => 0,
        }
    }
}

/// Single grid cell, it knows its own position.
///
/// Cells are values: changing the kind means putting a new cell at the same position.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pos: Dims,
    kind: CellKind,
}

impl Cell {
    pub fn new(pos: Dims, kind: CellKind) -> Cell {
        Cell { pos, kind }
    }

    pub fn wall(pos: Dims) -> Cell {
        Cell::new(pos, CellKind::Wall)
    }

    pub fn passage(pos: Dims) -> Cell {
        Cell::new(pos, CellKind::Passage)
    }

    pub fn escape(pos: Dims) -> Cell {
        Cell::new(pos, CellKind::Escape)
    }

    pub fn get_pos(&self) -> Dims {
        self.pos
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_escape(&self) -> bool {
        self.kind == CellKind::Escape
    }

    pub fn is_walkable(&self) -> bool {
        !self.is_wall()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_positional() {
        let a = Cell::wall(Dims(1, 2));
        let b = Cell::escape(Dims(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, Cell::wall(Dims(2, 1)));
    }

    #[test]
    fn codes() {
        assert_eq!(CellKind::from_code(1), CellKind::Wall);
        assert_eq!(CellKind::from_code(0), CellKind::Passage);
        assert_eq!(CellKind::from_code(7), CellKind::Passage);
        assert_eq!(CellKind::from_code(-1), CellKind::Passage);
        assert_eq!(CellKind::Escape.to_code(), 0);
        assert_eq!(CellKind::Wall.to_code(), 1);
    }
}
