//! Collision detection and response
//!
//! The ball is treated as a point at its center. Walls reflect it without
//! pushing it back in, and paddles redirect it with spin.

use super::config::{GameConfig, SpinModel};
use super::geometry::point_in_rect;
use super::state::{Ball, Paddle, Side};
use crate::consts::LOG_SPIN_GAIN;

/// Vertical speed after a paddle hit `offset` pixels below (positive) or
/// above (negative) the paddle center
pub fn spin(offset: i32, config: &GameConfig) -> i32 {
    let half = f64::from(config.paddle_half_height());
    let speed = f64::from(config.ball_vertical_speed);

    match config.spin {
        SpinModel::Linear => (f64::from(offset) / half * speed) as i32,
        SpinModel::Logarithmic => {
            let ratio = f64::from(offset.unsigned_abs()) / half;
            let magnitude = ((ratio + 1.0).ln() * LOG_SPIN_GAIN * speed).floor() as i32;
            if offset >= 0 { magnitude } else { -magnitude }
        }
    }
}

/// Reflect off the top or bottom edge. Returns true on a bounce.
///
/// Only the vertical velocity flips; the ball may sit past the edge for a
/// tick.
pub fn bounce_off_walls(ball: &mut Ball, config: &GameConfig) -> bool {
    if ball.position.y < 0 || ball.position.y > config.screen_size.y {
        ball.velocity.y = -ball.velocity.y;
        true
    } else {
        false
    }
}

/// Bounce the ball off `paddle` if it is inside the paddle and heading
/// toward it. Returns true on a hit.
///
/// The direction check means a ball that lingers inside the paddle after
/// the bounce is not turned around again.
pub fn paddle_contact(ball: &mut Ball, paddle: &Paddle, config: &GameConfig) -> bool {
    let approaching = match paddle.side {
        Side::Left => ball.velocity.x < 0,
        Side::Right => ball.velocity.x > 0,
    };
    if !approaching || !point_in_rect(ball.position, paddle.rect(config)) {
        return false;
    }

    ball.velocity.x = -ball.velocity.x;
    ball.velocity.y = spin(ball.position.y - paddle.position, config);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallState;
    use glam::IVec2;

    fn moving_ball(position: IVec2, velocity: IVec2) -> Ball {
        Ball {
            position,
            velocity,
            state: BallState::Moving,
        }
    }

    #[test]
    fn test_spin_zero_offset() {
        let linear = GameConfig::new().with_spin(SpinModel::Linear);
        let log = GameConfig::new().with_spin(SpinModel::Logarithmic);
        assert_eq!(spin(0, &linear), 0);
        assert_eq!(spin(0, &log), 0);
    }

    #[test]
    fn test_spin_linear_truncates() {
        let config = GameConfig::new().with_spin(SpinModel::Linear);
        // 16 / 16 * 5
        assert_eq!(spin(16, &config), 5);
        // 5 / 16 * 5 = 1.5625
        assert_eq!(spin(5, &config), 1);
        assert_eq!(spin(-5, &config), -1, "truncates toward zero");
        assert_eq!(spin(-16, &config), -5);
    }

    #[test]
    fn test_spin_logarithmic_values() {
        let config = GameConfig::new();
        // ln(2) * 3.33 * 5 = 11.54
        assert_eq!(spin(16, &config), 11);
        assert_eq!(spin(-16, &config), -11);
        // ln(1.5) * 3.33 * 5 = 6.75
        assert_eq!(spin(8, &config), 6);
        // ln(1.0625) * 3.33 * 5 = 1.009
        assert_eq!(spin(1, &config), 1);
        assert_eq!(spin(-1, &config), -1);
    }

    #[test]
    fn test_spin_logarithmic_compresses_edge_hits() {
        let log = GameConfig::new();
        let linear = GameConfig::new().with_spin(SpinModel::Linear);
        // Far outside the paddle the log curve grows much slower
        assert!(spin(64, &log) < 3 * spin(16, &log));
        assert_eq!(spin(64, &linear), 4 * spin(16, &linear));
    }

    #[test]
    fn test_wall_bounce_top() {
        let config = GameConfig::new();
        let mut ball = moving_ball(IVec2::new(100, -2), IVec2::new(-8, -6));
        assert!(bounce_off_walls(&mut ball, &config));
        assert_eq!(ball.velocity, IVec2::new(-8, 6));
        assert_eq!(ball.position, IVec2::new(100, -2), "no position correction");
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let config = GameConfig::new();
        let mut ball = moving_ball(IVec2::new(100, 401), IVec2::new(8, 3));
        assert!(bounce_off_walls(&mut ball, &config));
        assert_eq!(ball.velocity, IVec2::new(8, -3));
    }

    #[test]
    fn test_wall_edges_are_in_bounds() {
        let config = GameConfig::new();
        let mut ball = moving_ball(IVec2::new(100, 0), IVec2::new(8, -3));
        assert!(!bounce_off_walls(&mut ball, &config));
        ball.position.y = 400;
        assert!(!bounce_off_walls(&mut ball, &config));
        assert_eq!(ball.velocity, IVec2::new(8, -3));
    }

    #[test]
    fn test_left_paddle_hit() {
        let config = GameConfig::new();
        let paddle = Paddle {
            side: Side::Left,
            position: 200,
        };
        let mut ball = moving_ball(IVec2::new(22, 208), IVec2::new(-8, 0));

        assert!(paddle_contact(&mut ball, &paddle, &config));
        assert_eq!(ball.velocity.x, 8);
        assert_eq!(ball.velocity.y, spin(8, &config));
        assert!(ball.velocity.y > 0);
    }

    #[test]
    fn test_right_paddle_hit_above_center() {
        let config = GameConfig::new();
        let paddle = Paddle {
            side: Side::Right,
            position: 200,
        };
        let mut ball = moving_ball(IVec2::new(618, 190), IVec2::new(8, 2));

        assert!(paddle_contact(&mut ball, &paddle, &config));
        assert_eq!(ball.velocity.x, -8);
        assert!(ball.velocity.y < 0);
    }

    #[test]
    fn test_no_hit_when_moving_away() {
        let config = GameConfig::new();
        let paddle = Paddle {
            side: Side::Left,
            position: 200,
        };
        let mut ball = moving_ball(IVec2::new(20, 200), IVec2::new(8, 1));

        assert!(!paddle_contact(&mut ball, &paddle, &config));
        assert_eq!(ball.velocity, IVec2::new(8, 1));
    }

    #[test]
    fn test_no_hit_outside_paddle() {
        let config = GameConfig::new();
        let paddle = Paddle {
            side: Side::Left,
            position: 200,
        };
        let mut ball = moving_ball(IVec2::new(20, 217), IVec2::new(-8, 0));
        assert!(!paddle_contact(&mut ball, &paddle, &config));
    }

    #[test]
    fn test_contact_registers_once() {
        let config = GameConfig::new();
        let paddle = Paddle {
            side: Side::Left,
            position: 200,
        };
        let mut ball = moving_ball(IVec2::new(20, 200), IVec2::new(-8, 0));

        let hits: usize = (0..3)
            .filter(|_| paddle_contact(&mut ball, &paddle, &config))
            .count();

        assert_eq!(hits, 1);
        assert_eq!(ball.velocity.x, 8);
    }
}
