//! Error types shared by the game and the starfield demo.
//!
//! SDL2 reports failures as plain `String`s, so those are wrapped in
//! [`GameError::Sdl`]. Everything else gets its own typed variant.

use crate::config::ConfigError;
use crate::save::ScoreError;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Window, renderer, texture or event pump failure
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Score error: {0}")]
    Scores(#[from] ScoreError),
}

impl From<String> for GameError {
    fn from(msg: String) -> Self {
        GameError::Sdl(msg)
    }
}

impl From<sdl2::video::WindowBuildError> for GameError {
    fn from(err: sdl2::video::WindowBuildError) -> Self {
        GameError::Sdl(err.to_string())
    }
}

impl From<sdl2::IntegerOrSdlError> for GameError {
    fn from(err: sdl2::IntegerOrSdlError) -> Self {
        GameError::Sdl(err.to_string())
    }
}

impl From<sdl2::render::TextureValueError> for GameError {
    fn from(err: sdl2::render::TextureValueError) -> Self {
        GameError::Sdl(err.to_string())
    }
}

impl From<sdl2::render::UpdateTextureError> for GameError {
    fn from(err: sdl2::render::UpdateTextureError) -> Self {
        GameError::Sdl(err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;
