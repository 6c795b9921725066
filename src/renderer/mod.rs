//! Rendering module
//!
//! `layout` turns game state into rectangles and text. The SDL frontend
//! (feature `sdl`) blits sprites onto the window surface at those
//! rectangles.

pub mod assets;
pub mod layout;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use assets::{Asset, AssetPaths};
pub use layout::{Anchor, FrameLayout, TextItem};
#[cfg(feature = "sdl")]
pub use sdl::SdlFrontend;
