//! Frame layout
//!
//! The simulation hands the renderer rectangles and numbers, never pixels.
//! A frontend composites the layout back to front: clear, divider, paddles,
//! ball, text.

use glam::IVec2;

use crate::platform::FrameTiming;
use crate::sim::{GameState, Rect, sprite_rect};

/// Top-left corner of the FPS counter
pub const FPS_TEXT_ORIGIN: IVec2 = IVec2::new(5, 5);

/// Distance of the score line from the top edge
pub const SCORE_TEXT_TOP: i32 = 8;

pub const BACKGROUND: [u8; 3] = [0, 0, 0];
pub const TEXT_COLOR: [u8; 3] = [255, 255, 255];

/// Where a text item's origin sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// Origin is the middle of the top edge
    TopCenter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
    pub origin: IVec2,
    pub anchor: Anchor,
}

impl TextItem {
    /// Top-left corner for text rendered `width` pixels wide
    pub fn top_left(&self, width: i32) -> IVec2 {
        match self.anchor {
            Anchor::TopLeft => self.origin,
            Anchor::TopCenter => IVec2::new(self.origin.x - width / 2, self.origin.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    pub background: [u8; 3],
    pub separator: Rect,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score: TextItem,
    pub fps: Option<TextItem>,
}

impl FrameLayout {
    /// Lay out `state`; pass the last frame timing to show the FPS counter
    pub fn build(state: &GameState, fps: Option<&FrameTiming>) -> Self {
        let config = &state.config;
        let score = state.score();

        Self {
            background: BACKGROUND,
            separator: sprite_rect(config.ball_spawn(), config.separator_size),
            left_paddle: state.left.rect(config),
            right_paddle: state.right.rect(config),
            ball: sprite_rect(state.ball.position, config.ball_size),
            score: TextItem {
                text: score_text(score.left, score.right),
                origin: IVec2::new(config.screen_size.x / 2, SCORE_TEXT_TOP),
                anchor: Anchor::TopCenter,
            },
            fps: fps.map(|timing| TextItem {
                text: fps_text(timing),
                origin: FPS_TEXT_ORIGIN,
                anchor: Anchor::TopLeft,
            }),
        }
    }
}

/// Scores either side of the divider
pub fn score_text(left: u32, right: u32) -> String {
    format!("{left}   {right}")
}

/// Frames per second and frame time, e.g. `60.0 (16.7ms)`
pub fn fps_text(timing: &FrameTiming) -> String {
    let secs = timing.delta.as_secs_f64();
    format!("{:.1} ({:.1}ms)", timing.fps(), secs * 1000.0)
}
