//! Blit Pong - two paddles, one ball, one window surface
//!
//! Core modules:
//! - `sim`: Simulation step (kinematics, collisions, scoring, paddle AI)
//! - `platform`: Input latching and frame pacing
//! - `renderer`: Frame layout, asset resolution, SDL2 surface frontend
//! - `app`: The read-input / step / draw / cap loop
//! - `settings`: Presentation preferences

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{Frontend, Game, RunSummary};
pub use error::{RenderError, StartupError};
pub use settings::Settings;

/// Reference build constants
pub mod consts {
    use glam::IVec2;

    /// Minimum frame interval (60 FPS ceiling)
    pub const FRAME_MIN_DELTA: f64 = 1.0 / 60.0;

    pub const SCREEN_SIZE: IVec2 = IVec2::new(640, 400);

    /// Center divider, full screen height
    pub const SEPARATOR_SIZE: IVec2 = IVec2::new(2, 400);
    pub const PADDLE_SIZE: IVec2 = IVec2::new(8, 32);
    pub const BALL_SIZE: IVec2 = IVec2::new(8, 8);

    /// Horizontal distance from a screen edge to a paddle center
    pub const PADDLE_PIXELS_FROM_BOUNDARY: i32 = 20;

    pub const BALL_INITIAL_VELOCITY: IVec2 = IVec2::new(-8, 0);

    /// Scales the spin function's output
    pub const BALL_VERTICAL_SPEED: i32 = 5;
    pub const PADDLE_SPEED: i32 = 3;

    /// Compression factor of the logarithmic spin curve
    pub const LOG_SPIN_GAIN: f64 = 3.33;
}
