//! Platform abstraction layer
//!
//! Everything between the frontend and the simulation that depends on the
//! outside world:
//! - Input events (edge-triggered keys latched into held state)
//! - Time (frame pacing against a wall-clock budget)

pub mod input;
pub mod pacer;

pub use input::{Action, InputEvent, InputState};
pub use pacer::{FramePacer, FrameTiming, compute_cap_sleep, pace};
