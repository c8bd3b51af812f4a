//! Window title status lines.
//!
//! There's no font rendering, so score and status live in the title bar.

use crate::game::{GameState, GameWorld};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub fn game_title(world: &GameWorld) -> String {
    let mut title = format!(
        "{} | Score {} | Lives {} | Wave {}",
        world.config().window.title,
        world.score,
        world.player.lives,
        world.wave
    );

    match world.state {
        GameState::Playing => {}
        GameState::Paused => title.push_str(" | PAUSED"),
        GameState::GameOver => title.push_str(" | GAME OVER"),
    }

    title
}

/// Title for the starfield demo: name, wall clock and mouse position
pub fn debug_title<Tz>(name: &str, now: &DateTime<Tz>, cursor: (i32, i32)) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} | {} | MX={} | MY={}",
        name,
        now.format("%Y-%m-%d %H:%M:%S"),
        cursor.0,
        cursor.1
    )
}
