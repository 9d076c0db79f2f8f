use std::fmt;

use crate::{
    algorithms::{find_path, random_from_seed, PassageGenerator, Random, RndKruskals},
    array::Array2D,
    dims::Dims,
    error::LoadError,
    gameboard::{Cell, CellKind, Grid, RenderStyle},
};

/// Largest height or width a maze can have, positions are stored as `i32`.
pub const MAX_SIDE: usize = i32::MAX as usize;

/// Perfect maze with a fixed entrance in the top row and exit in the bottom row.
///
/// The escape path is computed on the first [`Maze::find_escape`] and kept for
/// the lifetime of the maze.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    solved: bool,
    escape: Vec<Cell>,
}

impl Maze {
    /// Generates a new maze, the layout is different on every call.
    pub fn new(height: usize, width: usize) -> Self {
        let (mut rng, seed) = random_from_seed(None);
        log::debug!("generating {}x{} maze with seed {}", height, width, seed);
        Self::generate(height, width, &RndKruskals, &mut rng)
    }

    pub fn new_square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Generates a maze reproducibly, the same seed always gives the same layout.
    pub fn with_seed(height: usize, width: usize, seed: u64) -> Self {
        let (mut rng, _) = random_from_seed(Some(seed));
        log::debug!("generating {}x{} maze with seed {}", height, width, seed);
        Self::generate(height, width, &RndKruskals, &mut rng)
    }

    pub fn generate(
        height: usize,
        width: usize,
        generator: &dyn PassageGenerator,
        rng: &mut Random,
    ) -> Self {
        debug_assert!(height <= MAX_SIDE && width <= MAX_SIDE);
        let mut maze = Maze::from_grid(Grid::filled(height, width, CellKind::Wall));
        maze.fill_alternately();
        maze.fill_gaps();
        maze.make_entrance_and_exit();
        maze.grid.put_cells(generator.generate(height, width, rng));
        maze
    }

    fn from_grid(grid: Grid) -> Self {
        Maze {
            grid,
            solved: false,
            escape: Vec::new(),
        }
    }

    /// Parses the text format produced by [`Maze::export`].
    pub fn load(text: &str) -> Result<Self, LoadError> {
        let mut lines = text.lines();

        let header = lines.next().ok_or(LoadError::InvalidFormat)?;
        let size = parse_row::<usize>(header, 2)?;
        let (height, width) = (size[0], size[1]);
        if height == 0 || width == 0 || height > MAX_SIDE || width > MAX_SIDE {
            return Err(LoadError::InvalidFormat);
        }
        height.checked_mul(width).ok_or(LoadError::InvalidFormat)?;

        // sized by the rows actually read
        let mut kinds = Vec::new();
        for _ in 0..height {
            let line = lines.next().ok_or(LoadError::InvalidFormat)?;
            kinds.extend(
                parse_row::<i64>(line, width)?
                    .into_iter()
                    .map(CellKind::from_code),
            );
        }

        let cells = Array2D::from_fn(height, width, |pos| {
            Cell::new(pos, kinds[(pos.0 as usize) * width + pos.1 as usize])
        });
        log::debug!("loaded {}x{} maze", height, width);

        Ok(Maze::from_grid(Grid::from_cells(cells)))
    }

    pub fn export(&self) -> String {
        self.grid.export()
    }

    pub fn render(&self, show_escape: bool, style: &RenderStyle) -> String {
        self.grid.render(show_escape, style)
    }

    /// Solves the maze once and renders it with the escape path.
    pub fn find_escape(&mut self) -> String {
        self.find_escape_styled(&RenderStyle::default())
    }

    pub fn find_escape_styled(&mut self, style: &RenderStyle) -> String {
        self.solve();
        self.render(true, style)
    }

    /// Computes the escape path if it wasn't computed yet and marks it in the grid.
    pub fn solve(&mut self) -> &[Cell] {
        if !self.solved {
            self.escape = find_path(&self.grid, self.entrance(), self.exit());
            self.grid.put_cells(self.escape.iter().copied());
            self.solved = true;
        }
        &self.escape
    }

    /// Escape path from the last [`Maze::solve`], empty if not solved or unreachable.
    pub fn escape_path(&self) -> &[Cell] {
        &self.escape
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn has_escape(&self) -> bool {
        !self.escape.is_empty()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entrance(&self) -> Dims {
        Dims(0, 1)
    }

    pub fn exit(&self) -> Dims {
        Dims(self.height() as i32 - 1, self.exit_column())
    }

    fn exit_column(&self) -> i32 {
        let width = self.width() as i32;
        width - 3 + width % 2
    }

    fn fill_alternately(&mut self) {
        for pos in Dims::iter_fill(self.height() as i32, self.width() as i32) {
            let kind = if pos.0 % 2 == 0 || pos.1 % 2 == 0 {
                CellKind::Wall
            } else {
                CellKind::Passage
            };
            self.grid.set_kind(pos, kind);
        }
    }

    fn fill_gaps(&mut self) {
        let (height, width) = (self.height() as i32, self.width() as i32);
        if height % 2 == 0 {
            for column in 0..width {
                self.grid.set_kind(Dims(height - 1, column), CellKind::Wall);
            }
        }
        if width % 2 == 0 {
            for row in 0..height {
                self.grid.set_kind(Dims(row, width - 1), CellKind::Wall);
            }
        }
    }

    // positions outside of tiny grids are silently skipped by `put_cell`
    fn make_entrance_and_exit(&mut self) {
        let height = self.height() as i32;
        let exit = self.exit();

        self.grid.set_kind(self.entrance(), CellKind::Passage);
        self.grid.set_kind(exit, CellKind::Passage);
        if height % 2 == 0 {
            self.grid.set_kind(exit - Dims(1, 0), CellKind::Passage);
        }
    }
}

fn parse_row<T: std::str::FromStr>(line: &str, expected: usize) -> Result<Vec<T>, LoadError> {
    let values = line
        .split_whitespace()
        .map(|token| token.parse::<T>().map_err(|_| LoadError::InvalidFormat))
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != expected {
        return Err(LoadError::InvalidFormat);
    }
    Ok(values)
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false, &RenderStyle::default()))
    }
}
