pub mod error;
pub mod logging;
pub mod menu;
pub mod settings;

pub use error::AppError;
