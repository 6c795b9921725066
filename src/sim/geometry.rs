//! Integer screen geometry
//!
//! Sprites are positioned by their center; rectangles are anchored at the
//! top-left corner like the blitting surface expects.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer (x, y) pair for positions and velocities
pub type Vector2i = IVec2;

/// Axis-aligned rectangle, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Whether `point` lies in `rect`, counting both far edges as inside.
///
/// A rect of width 8 at x = 16 therefore accepts x in 16..=24 (nine
/// columns). Paddle hits rely on this.
#[inline]
pub fn point_in_rect(point: Vector2i, rect: Rect) -> bool {
    point.x >= rect.x && point.x <= rect.right() && point.y >= rect.y && point.y <= rect.bottom()
}

/// Convert a center-anchored sprite into its top-left rectangle
///
/// Halves truncate toward zero, so odd sizes lean one pixel to the bottom
/// right of the center.
#[inline]
pub fn sprite_rect(center: Vector2i, size: Vector2i) -> Rect {
    Rect::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
}
