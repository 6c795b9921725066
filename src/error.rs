//! Error types
//!
//! Startup failures end the program before the first frame. Render failures
//! only cost a frame.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("couldn't initialize SDL: {0}")]
    Sdl(String),
    #[error("couldn't initialize SDL image: {0}")]
    Image(String),
    #[error("couldn't initialize SDL TTF: {0}")]
    Ttf(String),
    #[error("couldn't create window: {0}")]
    Window(String),
    #[error("couldn't get window surface: {0}")]
    Surface(String),
    #[error("couldn't create event pump: {0}")]
    EventPump(String),
    #[error("couldn't find {name} at {}", .path.display())]
    MissingAsset { name: &'static str, path: PathBuf },
    #[error("couldn't load {name}: {reason}")]
    AssetLoad { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to blit {what}: {reason}")]
    Blit { what: &'static str, reason: String },
    #[error("failed to render text: {0}")]
    Text(String),
    #[error("failed to present frame: {0}")]
    Present(String),
}

pub type StartupResult<T> = Result<T, StartupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_message_names_file() {
        let err = StartupError::MissingAsset {
            name: "ball",
            path: PathBuf::from("resources/ball.png"),
        };
        assert_eq!(err.to_string(), "couldn't find ball at resources/ball.png");
    }

    #[test]
    fn test_render_error_message() {
        let err = RenderError::Blit {
            what: "left paddle",
            reason: "surface lost".to_string(),
        };
        assert_eq!(err.to_string(), "failed to blit left paddle: surface lost");
    }
}
