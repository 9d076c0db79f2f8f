use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

use clabyr::Maze;

use crate::{error::AppError, settings::Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Exit,
    Generate,
    Load,
    Save,
    Display,
    FindEscape,
}

impl MenuItem {
    fn from_choice(choice: &str, maze_available: bool) -> Option<Self> {
        let item = match choice.trim().parse::<i32>().ok()? {
            0 => MenuItem::Exit,
            1 => MenuItem::Generate,
            2 => MenuItem::Load,
            3 => MenuItem::Save,
            4 => MenuItem::Display,
            5 => MenuItem::FindEscape,
            _ => return None,
        };

        (maze_available || !item.needs_maze()).then_some(item)
    }

    fn needs_maze(self) -> bool {
        matches!(self, MenuItem::Save | MenuItem::Display | MenuItem::FindEscape)
    }
}

/// Parses `size`, `height width` or the title of a preset.
pub fn parse_size(line: &str, settings: &Settings) -> Result<(usize, usize), AppError> {
    let parts: Vec<_> = line.split_whitespace().collect();
    let num = |s: &str| match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidSize),
    };

    match parts.as_slice() {
        [single] => match settings.find_preset(single) {
            Some(preset) => Ok((preset.height, preset.width)),
            None => num(*single).map(|size| (size, size)),
        },
        [height, width] => Ok((num(*height)?, num(*width)?)),
        _ => Err(AppError::InvalidSize),
    }
}

pub fn generate(height: usize, width: usize, settings: &Settings) -> Maze {
    match settings.get_seed() {
        Some(seed) => Maze::with_seed(height, width, seed),
        None => Maze::new(height, width),
    }
}

pub fn load_file(path: &Path) -> Result<Maze, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|_| AppError::MissingFile(path.display().to_string()))?;
    Ok(Maze::load(&text)?)
}

pub fn save_file(maze: &Maze, path: &Path) -> Result<(), AppError> {
    fs::write(path, maze.export()).map_err(|_| AppError::Unwritable(path.display().to_string()))
}

/// The interactive text menu, it owns the current maze.
pub struct Menu<R, W> {
    input: R,
    output: W,
    settings: Settings,
    maze: Option<Maze>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            maze: None,
        }
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match MenuItem::from_choice(&line, self.maze.is_some()) {
                Some(MenuItem::Exit) => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                Some(item) => {
                    log::debug!("menu item {:?}", item);
                    if let Err(err) = self.handle(item) {
                        match err {
                            AppError::Io(err) => return Err(err),
                            err => writeln!(self.output, "{}", err)?,
                        }
                    }
                }
                None => writeln!(self.output, "Incorrect option. Please try again")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Menu ===")?;
        writeln!(self.output, "1. Generate a new maze")?;
        writeln!(self.output, "2. Load a maze")?;
        if self.maze.is_some() {
            writeln!(self.output, "3. Save the maze")?;
            writeln!(self.output, "4. Display the maze")?;
            writeln!(self.output, "5. Find the escape")?;
        }
        writeln!(self.output, "0. Exit")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<String, AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn handle(&mut self, item: MenuItem) -> Result<(), AppError> {
        let style = self.settings.render_style();
        match item {
            MenuItem::Exit => {}
            MenuItem::Generate => {
                let line = self.prompt(
                    "Enter the size of the new maze (in the [size] or [height width] format)",
                )?;
                let (height, width) = parse_size(&line, &self.settings)?;
                let maze = generate(height, width, &self.settings);
                write!(self.output, "{}", maze.render(false, &style))?;
                self.maze = Some(maze);
            }
            MenuItem::Load => {
                let name = self.prompt("Enter the filename")?;
                self.maze = Some(load_file(Path::new(&name))?);
                writeln!(self.output, "The maze is loaded")?;
            }
            MenuItem::Save => {
                let name = self.prompt("Enter the filename")?;
                if let Some(maze) = &self.maze {
                    save_file(maze, Path::new(&name))?;
                    writeln!(self.output, "The maze is saved")?;
                }
            }
            MenuItem::Display => {
                if let Some(maze) = &self.maze {
                    write!(self.output, "{}", maze.render(false, &style))?;
                }
            }
            MenuItem::FindEscape => {
                if let Some(maze) = &mut self.maze {
                    let rendered = maze.find_escape_styled(&style);
                    if !maze.has_escape() {
                        log::warn!("no escape from the maze");
                    }
                    write!(self.output, "{}", rendered)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, settings: Settings) -> (String, Option<Maze>) {
        let mut out = Vec::new();
        let mut menu = Menu::new(input.as_bytes(), &mut out, settings);
        menu.run().unwrap();
        let maze = menu.maze().cloned();
        drop(menu);
        (String::from_utf8(out).unwrap(), maze)
    }

    fn seeded() -> Settings {
        Settings {
            seed: Some(11),
            ..Settings::builtin()
        }
    }

    #[test]
    fn choices() {
        assert_eq!(MenuItem::from_choice("1", false), Some(MenuItem::Generate));
        assert_eq!(MenuItem::from_choice(" 0 ", false), Some(MenuItem::Exit));
        assert_eq!(MenuItem::from_choice("4", false), None);
        assert_eq!(MenuItem::from_choice("4", true), Some(MenuItem::Display));
        assert_eq!(MenuItem::from_choice("9", true), None);
        assert_eq!(MenuItem::from_choice("abc", true), None);
    }

    #[test]
    fn sizes() {
        let settings = Settings::builtin();
        assert_eq!(parse_size("7", &settings).unwrap(), (7, 7));
        assert_eq!(parse_size("7 9", &settings).unwrap(), (7, 9));
        assert_eq!(parse_size("small", &settings).unwrap(), (11, 11));
        assert!(parse_size("", &settings).is_err());
        assert!(parse_size("0", &settings).is_err());
        assert!(parse_size("1 2 3", &settings).is_err());
        assert!(parse_size("-4 5", &settings).is_err());
    }

    #[test]
    fn hidden_items_until_maze_exists() {
        let (out, maze) = run("5\n0\n", seeded());
        assert!(maze.is_none());
        assert!(out.contains("Incorrect option. Please try again"));
        assert!(!out.contains("5. Find the escape"));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn generate_and_escape() {
        let (out, maze) = run("1\n9 11\n5\n0\n", seeded());
        let mut maze = maze.unwrap();
        assert_eq!((maze.height(), maze.width()), (9, 11));
        assert!(out.contains("5. Find the escape"));
        assert!(out.contains(&maze.find_escape()));
    }

    #[test]
    fn invalid_size() {
        let (out, maze) = run("1\n3 4 5\n0\n", seeded());
        assert!(maze.is_none());
        assert!(out.contains("Cannot generate a maze. Invalid size"));
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        let name = path.display().to_string();

        let (out, saved) = run(&format!("1\n7\n3\n{}\n0\n", name), seeded());
        assert!(out.contains("The maze is saved"));

        let (out, loaded) = run(&format!("2\n{}\n0\n", name), Settings::builtin());
        assert!(out.contains("The maze is loaded"));
        assert_eq!(loaded.unwrap().export(), saved.unwrap().export());
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let broken = dir.path().join("broken.txt");
        fs::write(&broken, "2 2\n1 1\n").unwrap();

        let input = format!("2\n{}\n2\n{}\n0\n", missing.display(), broken.display());
        let (out, maze) = run(&input, Settings::builtin());
        assert!(maze.is_none());
        assert!(out.contains(&format!("The file {} does not exist", missing.display())));
        assert!(out.contains("Cannot load the maze. It has an invalid format"));
    }

    #[test]
    fn eof_ends_the_loop() {
        let (out, _) = run("", Settings::builtin());
        assert!(out.starts_with("=== Menu ==="));
        assert!(!out.contains("Bye!"));
    }
}
