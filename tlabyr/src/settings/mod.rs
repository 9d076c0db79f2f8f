use std::{
    fs,
    path::{Path, PathBuf},
};

use clabyr::gameboard::RenderStyle;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazePreset {
    pub title: String,
    pub height: usize,
    pub width: usize,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub wall: Option<String>,
    #[serde(default)]
    pub escape: Option<String>,
    #[serde(default)]
    pub mazes: Option<Vec<MazePreset>>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("labyr")
            .join("settings.ron")
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn find_preset(&self, title: &str) -> Option<MazePreset> {
        self.mazes
            .as_ref()?
            .iter()
            .find(|preset| preset.title.eq_ignore_ascii_case(title))
            .cloned()
    }

    pub fn render_style(&self) -> RenderStyle {
        let default = RenderStyle::default();
        RenderStyle {
            wall: self.wall.clone().unwrap_or(default.wall),
            escape: self.escape.clone().unwrap_or(default.escape),
            passage: default.passage,
        }
    }

    pub fn parse(text: &str) -> Result<Self, AppError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(text)?)
    }

    pub fn builtin() -> Self {
        // the embedded file is covered by a test, falling back keeps startup infallible
        Self::parse(DEFAULT_SETTINGS).unwrap_or_default()
    }

    /// Reads the settings, writing the defaults first when the file doesn't exist.
    ///
    /// A file that can't be parsed is reported and the defaults are used instead.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).unwrap_or_else(|err| {
                log::warn!("Error reading settings file ({:?}), {}", path, err);
                Self::builtin()
            }),
            Err(_) => {
                if let Err(err) = Self::reset_config(path) {
                    log::warn!("Cannot write default settings to {:?}, {}", path, err);
                }
                Self::builtin()
            }
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
