//! Keyboard input latching
//!
//! Frontends report key edges; the latch turns them into the held-key
//! state the simulation reads once per tick.

use crate::sim::TickInput;

/// Game commands a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Serve,
}

/// One edge-triggered event from the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
    /// Window closed or quit requested
    Quit,
}

/// Latched input between frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    /// One-shot, cleared by `take_tick_input`
    pub serve: bool,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(Action::MoveUp) => self.up = true,
            InputEvent::Released(Action::MoveUp) => self.up = false,
            InputEvent::Pressed(Action::MoveDown) => self.down = true,
            InputEvent::Released(Action::MoveDown) => self.down = false,
            InputEvent::Pressed(Action::Serve) => self.serve = true,
            InputEvent::Released(Action::Serve) => {}
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn apply_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event);
        }
    }

    /// Snapshot for the next tick; consumes a pending serve
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            up: self.up,
            down: self.down,
            serve: self.serve,
        };
        self.serve = false;
        input
    }
}
