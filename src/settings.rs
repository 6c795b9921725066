//! Presentation settings
//!
//! Read from `settings.json` in the working directory when present. Only
//! presentation lives here; game rules are fixed in `GameConfig`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Frame-rate ceiling used when none (or zero) is configured
pub const DEFAULT_FPS_CAP: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub window_title: String,
    /// Directory holding the sprites and the font
    pub asset_dir: PathBuf,
    /// Show the FPS counter in the top-left corner
    pub show_fps: bool,
    /// Frame-rate ceiling (0 = default)
    pub fps_cap: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Pong".to_string(),
            asset_dir: PathBuf::from("resources"),
            show_fps: true,
            fps_cap: DEFAULT_FPS_CAP,
        }
    }
}

impl Settings {
    /// Settings file name
    const FILE_NAME: &'static str = "settings.json";

    /// Load from the working directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Couldn't read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded settings ({} FPS cap)", settings.effective_fps_cap());
        Ok(settings)
    }

    pub fn effective_fps_cap(&self) -> u32 {
        if self.fps_cap == 0 {
            DEFAULT_FPS_CAP
        } else {
            self.fps_cap
        }
    }

    /// Minimum time per frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.effective_fps_cap()))
    }
}
