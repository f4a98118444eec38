use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Grayscale {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Canny {
    pub input: PathBuf,
    pub output: PathBuf,
    pub low_threshold: f32,
    pub high_threshold: f32,
}

#[derive(Debug, Deserialize)]
pub struct Contours {
    pub input: PathBuf,
    pub output: PathBuf,
    pub thickness: u32,
}

const MEMBER_DIR: &str = "robot-vision";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub grayscale: Grayscale,
    pub canny: Canny,
    pub contours: Contours,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let base_path =
            std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        Self::from_dir(config_dir(&base_path))
    }

    pub fn from_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("grayscale.input", "sample.png")?
            .set_default("grayscale.output", "grayscaled.png")?
            .set_default("canny.input", "grayscaled.png")?
            .set_default("canny.output", "canny_image.png")?
            .set_default("canny.low_threshold", crate::edges::LOW_THRESHOLD as f64)?
            .set_default("canny.high_threshold", crate::edges::HIGH_THRESHOLD as f64)?
            .set_default("contours.input", "canny_image.png")?
            .set_default("contours.output", "contours.png")?
            .set_default("contours.thickness", crate::contours::THICKNESS as i64)?
            .add_source(File::from(config_dir.join("vision.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            .add_source(config::Environment::with_prefix("VISION").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

/// `config/` next to the working directory, or the member's own
/// `robot-vision/config` when started from the workspace root.
pub fn config_dir(base_path: &Path) -> PathBuf {
    let member = base_path.join(MEMBER_DIR).join("config");
    let local = base_path.join("config");
    if !local.is_dir() && member.is_dir() {
        member
    } else {
        local
    }
}
