//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module renders, sleeps or
//! touches the platform:
//! - One tick advances the ball by exactly one velocity step
//! - Integer positions and velocities only
//! - Every rule reads its numbers from a `GameConfig`

pub mod collision;
pub mod config;
pub mod control;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_walls, paddle_contact, spin};
pub use config::{GameConfig, ServeDirection, SpinModel};
pub use control::{AiTracker, HeldKeys, PaddleController};
pub use geometry::{Rect, Vector2i, point_in_rect, sprite_rect};
pub use state::{Ball, BallState, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
