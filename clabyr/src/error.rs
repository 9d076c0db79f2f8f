use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Cannot load the maze. It has an invalid format")]
    InvalidFormat,
}
