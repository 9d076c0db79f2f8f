use std::fmt::Write as _;

use crate::array::Array2D;
use crate::dims::Dims;
use crate::gameboard::cell::{Cell, CellKind};

/// Glyphs used when rendering the grid as text, each is two characters wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub wall: String,
    pub escape: String,
    pub passage: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            wall: "██".to_string(),
            escape: "//".to_string(),
            passage: "  ".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Grid where every cell is a passage tagged with its own position.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, CellKind::Passage)
    }

    pub fn filled(height: usize, width: usize, kind: CellKind) -> Self {
        Grid {
            cells: Array2D::from_fn(height, width, |pos| Cell::new(pos, kind)),
        }
    }

    pub fn from_cells(cells: Array2D<Cell>) -> Self {
        Grid { cells }
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// Replaces the cell at its own position, cells outside of the grid are ignored.
    pub fn put_cell(&mut self, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(cell.get_pos()) {
            *slot = cell;
        }
    }

    pub fn put_cells(&mut self, cells: impl IntoIterator<Item = Cell>) {
        for cell in cells {
            self.put_cell(cell);
        }
    }

    pub fn set_kind(&mut self, pos: Dims, kind: CellKind) {
        self.put_cell(Cell::new(pos, kind));
    }

    pub fn get_neighbors(&self, pos: Dims) -> impl Iterator<Item = &Cell> + '_ {
        Dims::NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |off| self.get_cell(pos + off))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn render(&self, show_escape: bool, style: &RenderStyle) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2 + self.height());
        for row in self.cells.rows() {
            for cell in row {
                let glyph = match cell.kind() {
                    CellKind::Wall => &style.wall,
                    CellKind::Escape if show_escape => &style.escape,
                    _ => &style.passage,
                };
                out.push_str(glyph);
            }
            out.push('\n');
        }
        out
    }

    /// Serializes to the flat integer format, `<height> <width>` followed by the rows.
    pub fn export(&self) -> String {
        let mut out = String::new();
        // writing into a `String` never fails
        let _ = writeln!(out, "{} {}", self.height(), self.width());
        for row in self.cells.rows() {
            for cell in row {
                let _ = write!(out, "{} ", cell.kind().to_code());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_cells_replaces_by_position() {
        let mut grid = Grid::filled(3, 3, CellKind::Wall);
        grid.put_cells([Cell::passage(Dims(1, 1)), Cell::escape(Dims(0, 2))]);
        grid.put_cell(Cell::passage(Dims(5, 5)));

        assert!(grid.get_cell(Dims(1, 1)).unwrap().is_walkable());
        assert!(grid.get_cell(Dims(0, 2)).unwrap().is_escape());
        assert_eq!(grid.count(CellKind::Wall), 7);
    }

    #[test]
    fn render_glyphs() {
        let mut grid = Grid::filled(2, 2, CellKind::Wall);
        grid.set_kind(Dims(0, 1), CellKind::Passage);
        grid.set_kind(Dims(1, 1), CellKind::Escape);
        let style = RenderStyle::default();

        assert_eq!(grid.render(false, &style), "██  \n██  \n");
        assert_eq!(grid.render(true, &style), "██  \n██//\n");
    }

    #[test]
    fn export_format() {
        let mut grid = Grid::filled(2, 3, CellKind::Wall);
        grid.set_kind(Dims(1, 0), CellKind::Passage);
        grid.set_kind(Dims(1, 2), CellKind::Escape);
        assert_eq!(grid.export(), "2 3\n1 1 1 \n0 1 0 \n");
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.get_neighbors(Dims(0, 0)).count(), 2);
        assert_eq!(grid.get_neighbors(Dims(1, 1)).count(), 4);
        assert_eq!(grid.get_neighbors(Dims(2, 1)).count(), 3);
    }
}
