//! Blit Pong entry point
//!
//! Sets up logging and settings, opens the SDL frontend and runs the loop.
//! Any startup failure is fatal and exits with status 1.

use std::process::ExitCode;

#[cfg(feature = "sdl")]
fn run() -> Result<blit_pong::RunSummary, blit_pong::StartupError> {
    use blit_pong::renderer::{AssetPaths, SdlFrontend, sdl};
    use blit_pong::sim::GameConfig;
    use blit_pong::{Game, Settings};

    let settings = Settings::load();
    let config = GameConfig::default();

    let paths = AssetPaths::resolve(&settings.asset_dir)?;
    let ttf = sdl::init_ttf()?;
    let mut frontend = SdlFrontend::new(&ttf, &settings, &config, &paths)?;

    let mut game = Game::new(config, &settings);
    Ok(game.run(&mut frontend))
}

#[cfg(feature = "sdl")]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Blit Pong starting...");

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "sdl"))]
fn main() -> ExitCode {
    env_logger::init();
    log::error!("Built without a frontend - rebuild with `--features sdl` to play");
    ExitCode::FAILURE
}
