//! Rule configuration for a match
//!
//! Built once and passed by reference into every simulation call. The
//! defaults reproduce the reference build; tests shrink the screen or swap
//! the spin model without touching the rules themselves.

use glam::IVec2;

use crate::consts::*;

/// How an off-center paddle hit turns into vertical ball speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinModel {
    /// Proportional to the contact offset
    Linear,
    /// Compressed so edge hits stay playable
    #[default]
    Logarithmic,
}

/// Horizontal direction of the ball after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServeDirection {
    /// Always `serve_velocity` as configured
    #[default]
    Fixed,
    /// `serve_velocity` speed, aimed at the side that just lost the point
    TowardLoser,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_size: IVec2,
    pub paddle_size: IVec2,
    pub ball_size: IVec2,
    pub separator_size: IVec2,
    /// Distance from a side edge to the paddle center
    pub paddle_inset: i32,
    pub serve_velocity: IVec2,
    pub ball_vertical_speed: i32,
    pub paddle_speed: i32,
    pub ai_speed: i32,
    pub ai_deadzone: i32,
    pub spin: SpinModel,
    pub serve_direction: ServeDirection,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_size: SCREEN_SIZE,
            paddle_size: PADDLE_SIZE,
            ball_size: BALL_SIZE,
            separator_size: SEPARATOR_SIZE,
            paddle_inset: PADDLE_PIXELS_FROM_BOUNDARY,
            serve_velocity: BALL_INITIAL_VELOCITY,
            ball_vertical_speed: BALL_VERTICAL_SPEED,
            paddle_speed: PADDLE_SPEED,
            ai_speed: PADDLE_SPEED,
            ai_deadzone: PADDLE_SIZE.y / 3,
            spin: SpinModel::default(),
            serve_direction: ServeDirection::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same rules on a different screen; the divider follows the height
    pub fn with_screen_size(mut self, width: i32, height: i32) -> Self {
        self.screen_size = IVec2::new(width, height);
        self.separator_size = IVec2::new(self.separator_size.x, height);
        self
    }

    pub fn with_spin(mut self, spin: SpinModel) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_serve_direction(mut self, serve_direction: ServeDirection) -> Self {
        self.serve_direction = serve_direction;
        self
    }

    /// Screen center, where the ball is served from
    pub fn ball_spawn(&self) -> IVec2 {
        self.screen_size / 2
    }

    /// Horizontal center of the left (`false`) or right (`true`) paddle
    pub fn paddle_x(&self, right: bool) -> i32 {
        if right {
            self.screen_size.x - self.paddle_inset
        } else {
            self.paddle_inset
        }
    }

    /// Half the paddle height, never zero so spin stays finite
    pub fn paddle_half_height(&self) -> i32 {
        (self.paddle_size.y / 2).max(1)
    }

    /// Clamp a paddle center to the screen
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        y.clamp(0, self.screen_size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_build() {
        let config = GameConfig::new();
        assert_eq!(config.screen_size, IVec2::new(640, 400));
        assert_eq!(config.paddle_size, IVec2::new(8, 32));
        assert_eq!(config.serve_velocity, IVec2::new(-8, 0));
        assert_eq!(config.ai_deadzone, 10, "one third of 32, truncated");
        assert_eq!(config.spin, SpinModel::Logarithmic);
        assert_eq!(config.serve_direction, ServeDirection::Fixed);
    }

    #[test]
    fn test_paddle_x() {
        let config = GameConfig::new();
        assert_eq!(config.paddle_x(false), 20, "Left paddle X position");
        assert_eq!(config.paddle_x(true), 620, "Right paddle X position");
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = GameConfig::new();
        assert_eq!(config.clamp_paddle_y(-5), 0);
        assert_eq!(config.clamp_paddle_y(401), 400);
        assert_eq!(config.clamp_paddle_y(123), 123);
    }

    #[test]
    fn test_with_screen_size_resizes_separator() {
        let config = GameConfig::new().with_screen_size(160, 100);
        assert_eq!(config.ball_spawn(), IVec2::new(80, 50));
        assert_eq!(config.separator_size, IVec2::new(2, 100));
        assert_eq!(config.paddle_x(true), 140);
    }

    #[test]
    fn test_half_height_never_zero() {
        let mut config = GameConfig::new();
        config.paddle_size = IVec2::new(8, 1);
        assert_eq!(config.paddle_half_height(), 1);
    }
}
