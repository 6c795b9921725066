//! Game state and core simulation types
//!
//! Everything the loop used to keep as loose locals lives in `GameState`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::config::{GameConfig, ServeDirection};
use super::geometry::{Rect, sprite_rect};

/// Which half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Ball state - waiting for a serve or in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Frozen at its spawn point until served
    Paused,
    Moving,
}

/// The ball, anchored at its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub position: IVec2,
    pub velocity: IVec2,
    pub state: BallState,
}

impl Ball {
    /// A paused ball at the screen center with the serve velocity
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.ball_spawn(),
            velocity: config.serve_velocity,
            state: BallState::Paused,
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == BallState::Paused
    }

    /// Start moving; returns false if already in play
    pub fn launch(&mut self) -> bool {
        if self.is_paused() {
            self.state = BallState::Moving;
            true
        } else {
            false
        }
    }

    /// Put the ball back on the spot after `loser` conceded a point
    pub fn reset(&mut self, config: &GameConfig, loser: Side) {
        self.position = config.ball_spawn();
        self.velocity = match config.serve_direction {
            ServeDirection::Fixed => config.serve_velocity,
            ServeDirection::TowardLoser => {
                let speed = config.serve_velocity.x.abs();
                let x = match loser {
                    Side::Left => -speed,
                    Side::Right => speed,
                };
                IVec2::new(x, config.serve_velocity.y)
            }
        };
        self.state = BallState::Paused;
    }

    pub fn rect(&self, config: &GameConfig) -> Rect {
        sprite_rect(self.position, config.ball_size)
    }
}

/// A paddle, anchored at its vertical center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Vertical center, always within [0, screen height]
    pub position: i32,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        Self {
            side,
            position: config.screen_size.y / 2,
        }
    }

    /// Shift by `delta` and clamp to the screen
    pub fn shift(&mut self, delta: i32, config: &GameConfig) {
        self.position = config.clamp_paddle_y(self.position.saturating_add(delta));
    }

    pub fn center(&self, config: &GameConfig) -> IVec2 {
        IVec2::new(config.paddle_x(self.side == Side::Right), self.position)
    }

    /// Sprite rectangle, also the hit box
    pub fn rect(&self, config: &GameConfig) -> Rect {
        sprite_rect(self.center(config), config.paddle_size)
    }
}

/// Points per side; never reset during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Served,
    WallBounce,
    PaddleHit(Side),
    PointScored { scorer: Side },
}

/// Complete match state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh match: paddles centered, ball paused at center
    pub fn new(config: GameConfig) -> Self {
        Self {
            ball: Ball::new(&config),
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            score: Score::new(),
            time_ticks: 0,
            config,
        }
    }

    /// Request a serve. Only a paused ball starts moving.
    pub fn serve(&mut self) -> bool {
        self.ball.launch()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Credit `scorer` and reset the ball toward the next serve
    pub(crate) fn award_point(&mut self, scorer: Side) {
        self.score.award(scorer);
        self.ball.reset(&self.config, scorer.opponent());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
