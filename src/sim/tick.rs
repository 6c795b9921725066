//! Per-frame simulation tick
//!
//! One call is one frame of game time. The ball moves by its whole velocity
//! each tick; nothing here is scaled by wall-clock time.

use super::collision::{bounce_off_walls, paddle_contact};
use super::control::{AiTracker, HeldKeys, PaddleController};
use super::state::{BallState, GameEvent, GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-up key held
    pub up: bool,
    /// Move-down key held
    pub down: bool,
    /// Serve requested since the last tick
    pub serve: bool,
}

impl TickInput {
    pub fn held_keys(&self) -> HeldKeys {
        HeldKeys {
            up: self.up,
            down: self.down,
        }
    }
}

/// Advance the match by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if input.serve && state.serve() {
        events.push(GameEvent::Served);
    }

    // Paddles first, against the ball as it stood at the start of the tick
    input
        .held_keys()
        .drive(&mut state.left, &state.ball, &state.config);
    AiTracker.drive(&mut state.right, &state.ball, &state.config);

    if state.ball.state == BallState::Moving {
        step_ball(state, &mut events);
    }

    events
}

fn step_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let config = &state.config;
    let ball = &mut state.ball;

    ball.position += ball.velocity;

    if bounce_off_walls(ball, config) {
        events.push(GameEvent::WallBounce);
    }

    for paddle in [&state.left, &state.right] {
        if paddle_contact(ball, paddle, config) {
            events.push(GameEvent::PaddleHit(paddle.side));
        }
    }

    let scorer = if ball.position.x < 0 {
        Some(Side::Right)
    } else if ball.position.x > config.screen_size.x {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        state.award_point(scorer);
        events.push(GameEvent::PointScored { scorer });
    }
}
