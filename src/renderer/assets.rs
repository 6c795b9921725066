//! Sprite and font files
//!
//! All assets live in one directory. Missing files are reported before any
//! window opens.

use std::path::{Path, PathBuf};

use crate::error::{StartupError, StartupResult};

/// Point size of the HUD font
pub const FONT_SIZE: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Separator,
    LeftPaddle,
    RightPaddle,
    Ball,
    Font,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::Separator,
        Asset::LeftPaddle,
        Asset::RightPaddle,
        Asset::Ball,
        Asset::Font,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Separator => "separator.png",
            Asset::LeftPaddle => "left_pallete.png",
            Asset::RightPaddle => "right_pallete.png",
            Asset::Ball => "ball.png",
            Asset::Font => "LCD_Solid.ttf",
        }
    }

    /// Human-readable name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            Asset::Separator => "separator",
            Asset::LeftPaddle => "left paddle",
            Asset::RightPaddle => "right paddle",
            Asset::Ball => "ball",
            Asset::Font => "FPS font",
        }
    }
}

/// Checked locations of every asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub separator: PathBuf,
    pub left_paddle: PathBuf,
    pub right_paddle: PathBuf,
    pub ball: PathBuf,
    pub font: PathBuf,
}

impl AssetPaths {
    /// Locate every asset under `dir`, failing on the first missing one
    pub fn resolve(dir: &Path) -> StartupResult<Self> {
        let find = |asset: Asset| -> StartupResult<PathBuf> {
            let path = dir.join(asset.file_name());
            if path.is_file() {
                Ok(path)
            } else {
                Err(StartupError::MissingAsset {
                    name: asset.name(),
                    path,
                })
            }
        };

        let paths = Self {
            separator: find(Asset::Separator)?,
            left_paddle: find(Asset::LeftPaddle)?,
            right_paddle: find(Asset::RightPaddle)?,
            ball: find(Asset::Ball)?,
            font: find(Asset::Font)?,
        };
        log::info!("Assets found in {}", dir.display());
        Ok(paths)
    }

    pub fn get(&self, asset: Asset) -> &Path {
        match asset {
            Asset::Separator => &self.separator,
            Asset::LeftPaddle => &self.left_paddle,
            Asset::RightPaddle => &self.right_paddle,
            Asset::Ball => &self.ball,
            Asset::Font => &self.font,
        }
    }
}
