use std::{io, path::PathBuf};

use tlabyr::{
    logging,
    menu::{self, Menu},
    settings::Settings,
    AppError,
};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, name = "labyr")]
struct Args {
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for even more")]
    verbose: u8,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu, the default
    Menu,
    /// Generate a maze and print it
    Generate {
        height: usize,
        /// Defaults to the height
        width: Option<usize>,
        #[clap(long, help = "Seed for reproducible mazes, overrides the config")]
        seed: Option<u64>,
        #[clap(short, long, help = "Also save the maze to this file")]
        out: Option<PathBuf>,
        #[clap(long, action, help = "Print the maze with the escape path")]
        solve: bool,
    },
    /// Load a maze file and print the way out
    Solve { file: PathBuf },
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings_path = Settings::default_path();

    if args.reset_config {
        return Settings::reset_config(&settings_path);
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    better_panic::install();

    let mut settings = Settings::load(&settings_path);
    let style = settings.render_style();

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout(), settings);
            menu.run()?;
        }
        Command::Generate {
            height,
            width,
            seed,
            out,
            solve,
        } => {
            let width = width.unwrap_or(height);
            if height == 0 || width == 0 {
                return Err(AppError::InvalidSize);
            }
            if seed.is_some() {
                settings.seed = seed;
            }

            let mut maze = menu::generate(height, width, &settings);
            if let Some(path) = out {
                menu::save_file(&maze, &path)?;
            }

            if solve {
                print!("{}", maze.find_escape_styled(&style));
            } else {
                print!("{}", maze.render(false, &style));
            }
        }
        Command::Solve { file } => {
            let mut maze = menu::load_file(&file)?;
            let rendered = maze.find_escape_styled(&style);
            if !maze.has_escape() {
                log::warn!("no escape from {}", file.display());
            }
            print!("{}", rendered);
        }
    }

    Ok(())
}
