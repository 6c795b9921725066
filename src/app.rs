//! The game loop
//!
//! Each frame: mark the start, drain frontend events into the input latch,
//! tick the simulation, present the layout, then sleep off the remaining
//! frame budget. Everything runs on the caller's thread.

use crate::error::RenderError;
use crate::platform::{FramePacer, InputEvent, InputState};
use crate::renderer::FrameLayout;
use crate::settings::Settings;
use crate::sim::{GameConfig, GameEvent, GameState, Score, tick};

/// Window, input and drawing for the loop
pub trait Frontend {
    /// Append every event received since the last call
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);

    /// Draw one frame
    fn present(&mut self, frame: &FrameLayout) -> Result<(), RenderError>;
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: Score,
}

pub struct Game {
    state: GameState,
    input: InputState,
    pacer: FramePacer,
    show_fps: bool,
    frames: u64,
    events: Vec<InputEvent>,
}

impl Game {
    pub fn new(config: GameConfig, settings: &Settings) -> Self {
        Self {
            state: GameState::new(config),
            input: InputState::new(),
            pacer: FramePacer::new(settings.frame_interval()),
            show_fps: settings.show_fps,
            frames: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run until the frontend reports quit
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> RunSummary {
        log::info!("Waiting for serve");
        while self.frame(frontend) {}

        let summary = RunSummary {
            frames: self.frames,
            score: self.state.score(),
        };
        log::info!(
            "Quit after {} frames, final score {} - {}",
            summary.frames,
            summary.score.left,
            summary.score.right
        );
        summary
    }

    /// One loop iteration. Returns false once quit was requested.
    pub fn frame<F: Frontend>(&mut self, frontend: &mut F) -> bool {
        self.pacer.begin();

        frontend.poll_events(&mut self.events);
        self.input.apply_all(self.events.drain(..));
        if self.input.quit {
            return false;
        }

        let input = self.input.take_tick_input();
        for event in tick(&mut self.state, &input) {
            self.log_event(event);
        }

        let timing = self.pacer.last();
        let fps = self.show_fps.then_some(&timing);
        let layout = FrameLayout::build(&self.state, fps);
        if let Err(e) = frontend.present(&layout) {
            log::warn!("Render error: {}", e);
        }

        self.pacer.finish();
        self.frames += 1;
        true
    }

    fn log_event(&self, event: GameEvent) {
        match event {
            GameEvent::Served => log::debug!("Served at tick {}", self.state.time_ticks),
            GameEvent::WallBounce => log::trace!("Wall bounce"),
            GameEvent::PaddleHit(side) => log::debug!(
                "{} paddle hit, ball velocity now {}",
                side.as_str(),
                self.state.ball.velocity
            ),
            GameEvent::PointScored { scorer } => {
                let score = self.state.score();
                log::info!(
                    "Point to {} ({} - {})",
                    scorer.as_str(),
                    score.left,
                    score.right
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Action;
    use std::collections::VecDeque;

    /// Replays one batch of events per frame and records what it drew
    #[derive(Default)]
    struct Scripted {
        frames: VecDeque<Vec<InputEvent>>,
        presented: Vec<FrameLayout>,
        fail_present: bool,
    }

    impl Frontend for Scripted {
        fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
            match self.frames.pop_front() {
                Some(events) => out.extend(events),
                None => out.push(InputEvent::Quit),
            }
        }

        fn present(&mut self, frame: &FrameLayout) -> Result<(), RenderError> {
            self.presented.push(frame.clone());
            if self.fail_present {
                Err(RenderError::Present("lost".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn fast_settings() -> Settings {
        Settings {
            fps_cap: 1000,
            ..Settings::default()
        }
    }

    #[test]
    fn test_quit_stops_before_first_frame() {
        let mut game = Game::new(GameConfig::new(), &fast_settings());
        let mut frontend = Scripted::default();

        let summary = game.run(&mut frontend);

        assert_eq!(summary.frames, 0);
        assert!(frontend.presented.is_empty());
    }

    #[test]
    fn test_serve_and_hold_down() {
        let mut game = Game::new(GameConfig::new(), &fast_settings());
        let mut frontend = Scripted {
            frames: VecDeque::from(vec![
                vec![
                    InputEvent::Pressed(Action::Serve),
                    InputEvent::Pressed(Action::MoveDown),
                ],
                vec![InputEvent::Released(Action::Serve)],
                vec![InputEvent::Released(Action::MoveDown)],
            ]),
            ..Default::default()
        };

        let summary = game.run(&mut frontend);

        assert_eq!(summary.frames, 3);
        assert_eq!(frontend.presented.len(), 3);
        // Down held for two frames, released before the third tick
        assert_eq!(game.state().left.position, 206);
        // Served on the first frame, moved three times since
        assert_eq!(game.state().ball.position.x, 320 - 3 * 8);
    }

    #[test]
    fn test_render_errors_do_not_stop_the_loop() {
        let mut game = Game::new(GameConfig::new(), &fast_settings());
        let mut frontend = Scripted {
            frames: VecDeque::from(vec![Vec::new(), Vec::new()]),
            fail_present: true,
            ..Default::default()
        };

        let summary = game.run(&mut frontend);
        assert_eq!(summary.frames, 2);
    }

    #[test]
    fn test_fps_counter_follows_settings() {
        let hidden = Settings {
            show_fps: false,
            ..fast_settings()
        };
        let mut game = Game::new(GameConfig::new(), &hidden);
        let mut frontend = Scripted {
            frames: VecDeque::from(vec![Vec::new()]),
            ..Default::default()
        };
        game.run(&mut frontend);
        assert!(frontend.presented[0].fps.is_none());

        let mut game = Game::new(GameConfig::new(), &fast_settings());
        let mut frontend = Scripted {
            frames: VecDeque::from(vec![Vec::new()]),
            ..Default::default()
        };
        game.run(&mut frontend);
        assert!(frontend.presented[0].fps.is_some());
    }
}
