use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use serde::Deserialize;

pub mod server;
use server::Server;

#[derive(Debug, Deserialize)]
pub struct Storage {
    pub scan_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Relay {
    /// Reply `log_received` to telemetry frames instead of only logging them.
    pub acknowledge_telemetry: bool,
    /// Largest accepted WebSocket frame, in bytes.
    pub max_frame_size: usize,
}

/// Default frame limit, large enough for point clouds of tens of
/// thousands of points.
pub const MAX_FRAME_SIZE: usize = 1 << 20;

const MEMBER_DIR: &str = "robot-data-hub";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub server: Server,
    pub storage: Storage,
    pub relay: Relay,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let base_path =
            std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        Self::from_dir(config_dir(&base_path))
    }

    pub fn from_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("storage.scan_dir", "scans")?
            .set_default("relay.acknowledge_telemetry", false)?
            .set_default("relay.max_frame_size", MAX_FRAME_SIZE as u64)?
            .add_source(File::from(config_dir.join("settings.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            .add_source(config::Environment::with_prefix("HUB").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

/// `config/` next to the working directory, or the member's own
/// `robot-data-hub/config` when started from the workspace root.
pub fn config_dir(base_path: &Path) -> PathBuf {
    let member = base_path.join(MEMBER_DIR).join("config");
    let local = base_path.join("config");
    if !local.is_dir() && member.is_dir() {
        member
    } else {
        local
    }
}
