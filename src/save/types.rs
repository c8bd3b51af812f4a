//! Score board data types
//!
//! This module defines the data structures stored in the score file. Serde
//! handles conversion to and from JSON.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Current score file version
pub const CURRENT_SCORE_VERSION: u32 = 1;

/// The root score file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub version: u32,
    /// Best scores first
    pub entries: Vec<ScoreEntry>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        ScoreBoard {
            version: CURRENT_SCORE_VERSION,
            entries: Vec::new(),
        }
    }
}

impl ScoreBoard {
    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }
}

/// A single finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Wave the game ended on
    pub wave: u32,
    pub recorded_at: DateTime<Local>,
}

/// Error types for score persistence
#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported score file version: {0}")]
    InvalidVersion(u32),
}
