//! Paddle controllers
//!
//! A controller decides how far its paddle moves this tick. The paddle then
//! applies the move and clamps itself to the screen.

use super::config::GameConfig;
use super::state::{Ball, Paddle};

/// Strategy driving one paddle
pub trait PaddleController {
    /// Signed vertical move for this tick (positive is down)
    fn steer(&self, paddle: &Paddle, ball: &Ball, config: &GameConfig) -> i32;

    /// Move `paddle` by the steering amount, clamped to the screen
    fn drive(&self, paddle: &mut Paddle, ball: &Ball, config: &GameConfig) {
        let delta = self.steer(paddle, ball, config);
        paddle.shift(delta, config);
    }
}

/// Held direction keys of the human player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl PaddleController for HeldKeys {
    fn steer(&self, _paddle: &Paddle, _ball: &Ball, config: &GameConfig) -> i32 {
        let mut delta = 0;
        if self.down {
            delta += config.paddle_speed;
        }
        if self.up {
            delta -= config.paddle_speed;
        }
        delta
    }
}

/// Follows the ball's height, ignoring it while inside the deadzone.
///
/// Runs every tick whether or not the ball is in play, so the paddle also
/// drifts toward a ball waiting to be served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AiTracker;

impl PaddleController for AiTracker {
    fn steer(&self, paddle: &Paddle, ball: &Ball, config: &GameConfig) -> i32 {
        let target = ball.position.y;
        if target > paddle.position + config.ai_deadzone {
            config.ai_speed
        } else if target < paddle.position - config.ai_deadzone {
            -config.ai_speed
        } else {
            0
        }
    }
}
