//! SDL2 frontend
//!
//! Software blitting onto the window surface: every frame clears the
//! surface, blits the sprites at their layout rectangles, renders the HUD
//! text and pushes the surface to the window.

use sdl2::event::Event;
use sdl2::image::{InitFlag, LoadSurface, Sdl2ImageContext};
use sdl2::keyboard::Scancode;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::surface::{Surface, SurfaceRef};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use super::assets::{Asset, AssetPaths, FONT_SIZE};
use super::layout::{FrameLayout, TEXT_COLOR};
use crate::app::Frontend;
use crate::error::{RenderError, StartupError, StartupResult};
use crate::platform::{Action, InputEvent};
use crate::settings::Settings;
use crate::sim::{GameConfig, Rect};

/// Start SDL_ttf. The context must outlive the frontend's font.
pub fn init_ttf() -> StartupResult<Sdl2TtfContext> {
    sdl2::ttf::init().map_err(|e| StartupError::Ttf(e.to_string()))
}

struct Sprites {
    separator: Surface<'static>,
    left_paddle: Surface<'static>,
    right_paddle: Surface<'static>,
    ball: Surface<'static>,
}

impl Sprites {
    fn load(paths: &AssetPaths) -> StartupResult<Self> {
        Ok(Self {
            separator: load_sprite(paths, Asset::Separator)?,
            left_paddle: load_sprite(paths, Asset::LeftPaddle)?,
            right_paddle: load_sprite(paths, Asset::RightPaddle)?,
            ball: load_sprite(paths, Asset::Ball)?,
        })
    }
}

fn load_sprite(paths: &AssetPaths, asset: Asset) -> StartupResult<Surface<'static>> {
    log::debug!("Loading {}", paths.get(asset).display());
    Surface::from_file(paths.get(asset)).map_err(|reason| StartupError::AssetLoad {
        name: asset.name(),
        reason,
    })
}

pub struct SdlFrontend<'ttf> {
    _sdl: Sdl,
    _image: Sdl2ImageContext,
    window: Window,
    event_pump: EventPump,
    sprites: Sprites,
    font: Font<'ttf, 'static>,
}

impl<'ttf> SdlFrontend<'ttf> {
    /// Open the window and load every asset
    ///
    /// # Errors
    ///
    /// Returns `StartupError` if any SDL subsystem, the window, its surface
    /// or an asset fails to initialize or load.
    pub fn new(
        ttf: &'ttf Sdl2TtfContext,
        settings: &Settings,
        config: &GameConfig,
        paths: &AssetPaths,
    ) -> StartupResult<Self> {
        let sdl = sdl2::init().map_err(StartupError::Sdl)?;
        let video = sdl.video().map_err(StartupError::Sdl)?;
        let image = sdl2::image::init(InitFlag::PNG).map_err(StartupError::Image)?;

        let width = u32::try_from(config.screen_size.x)
            .map_err(|_| StartupError::Window(format!("bad width {}", config.screen_size.x)))?;
        let height = u32::try_from(config.screen_size.y)
            .map_err(|_| StartupError::Window(format!("bad height {}", config.screen_size.y)))?;
        let window = video
            .window(&settings.window_title, width, height)
            .position_centered()
            .build()
            .map_err(|e| StartupError::Window(e.to_string()))?;

        let event_pump = sdl.event_pump().map_err(StartupError::EventPump)?;
        window
            .surface(&event_pump)
            .map_err(StartupError::Surface)?;
        log::info!("Opened {}x{} window", width, height);

        let sprites = Sprites::load(paths)?;
        let font = ttf
            .load_font(paths.get(Asset::Font), FONT_SIZE)
            .map_err(|reason| StartupError::AssetLoad {
                name: Asset::Font.name(),
                reason,
            })?;

        Ok(Self {
            _sdl: sdl,
            _image: image,
            window,
            event_pump,
            sprites,
            font,
        })
    }
}

fn action_for(code: Scancode) -> Option<Action> {
    match code {
        Scancode::Up => Some(Action::MoveUp),
        Scancode::Down => Some(Action::MoveDown),
        Scancode::Space => Some(Action::Serve),
        _ => None,
    }
}

fn sdl_rect(rect: Rect) -> SdlRect {
    SdlRect::new(
        rect.x,
        rect.y,
        rect.width.max(0) as u32,
        rect.height.max(0) as u32,
    )
}

fn blit(
    sprite: &SurfaceRef,
    screen: &mut SurfaceRef,
    rect: Rect,
    what: &'static str,
) -> Result<(), RenderError> {
    sprite
        .blit(None, screen, sdl_rect(rect))
        .map(|_| ())
        .map_err(|reason| RenderError::Blit { what, reason })
}

impl Frontend for SdlFrontend<'_> {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => out.push(InputEvent::Quit),
                Event::KeyDown {
                    scancode: Some(code),
                    ..
                } => {
                    if let Some(action) = action_for(code) {
                        out.push(InputEvent::Pressed(action));
                    }
                }
                Event::KeyUp {
                    scancode: Some(code),
                    ..
                } => {
                    if let Some(action) = action_for(code) {
                        out.push(InputEvent::Released(action));
                    }
                }
                _ => {}
            }
        }
    }

    fn present(&mut self, frame: &FrameLayout) -> Result<(), RenderError> {
        let mut screen = self
            .window
            .surface(&self.event_pump)
            .map_err(RenderError::Present)?;

        let [r, g, b] = frame.background;
        screen
            .fill_rect(None, Color::RGB(r, g, b))
            .map_err(RenderError::Present)?;

        blit(&self.sprites.separator, &mut screen, frame.separator, "separator")?;
        blit(&self.sprites.left_paddle, &mut screen, frame.left_paddle, "left paddle")?;
        blit(&self.sprites.right_paddle, &mut screen, frame.right_paddle, "right paddle")?;
        blit(&self.sprites.ball, &mut screen, frame.ball, "ball")?;

        let [r, g, b] = TEXT_COLOR;
        for item in std::iter::once(&frame.score).chain(frame.fps.as_ref()) {
            let text = self
                .font
                .render(&item.text)
                .solid(Color::RGB(r, g, b))
                .map_err(|e| RenderError::Text(e.to_string()))?;
            let at = item.top_left(text.width() as i32);
            let rect = SdlRect::new(at.x, at.y, text.width(), text.height());
            text.blit(None, &mut screen, rect)
                .map_err(|reason| RenderError::Blit {
                    what: "text",
                    reason,
                })?;
        }

        screen.update_window().map_err(RenderError::Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for(Scancode::Up), Some(Action::MoveUp));
        assert_eq!(action_for(Scancode::Down), Some(Action::MoveDown));
        assert_eq!(action_for(Scancode::Space), Some(Action::Serve));
        assert_eq!(action_for(Scancode::A), None);
    }

    #[test]
    fn test_sdl_rect_conversion() {
        let rect = sdl_rect(Rect::new(-4, 10, 8, 32));
        assert_eq!(rect, SdlRect::new(-4, 10, 8, 32));
    }
}
