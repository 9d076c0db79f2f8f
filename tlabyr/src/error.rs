use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Load(#[from] clabyr::LoadError),
    #[error("Settings error; {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("Cannot generate a maze. Invalid size")]
    InvalidSize,
    #[error("The file {0} does not exist")]
    MissingFile(String),
    #[error("Cannot write to file {0}")]
    Unwritable(String),
}
