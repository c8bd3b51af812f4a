//! Score store for loading and saving the high score table
//!
//! This module provides the ScoreStore struct which handles:
//! - Locating the score file
//! - Loading it (a missing file is an empty table)
//! - Recording finished games, keeping only the best few
//! - Writing it back as pretty JSON

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the score file inside the score directory
pub const SCORE_FILENAME: &str = "scores.json";

pub struct ScoreStore {
    directory: PathBuf,
    capacity: usize,
}

impl ScoreStore {
    /// Creates a store in the given directory, creating it if needed
    pub fn new(directory: impl AsRef<Path>, capacity: usize) -> Result<Self, ScoreError> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        Ok(ScoreStore {
            directory,
            capacity: capacity.max(1),
        })
    }

    /// Per-user data directory, or `./saves` when the platform has none
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join("invaders"))
            .unwrap_or_else(|| PathBuf::from("./saves"))
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(SCORE_FILENAME)
    }

    /// Loads the score table. A missing file gives an empty table.
    pub fn load(&self) -> Result<ScoreBoard, ScoreError> {
        let path = self.path();
        if !path.exists() {
            log::debug!("No score file at {}, starting fresh", path.display());
            return Ok(ScoreBoard::default());
        }

        let json = fs::read_to_string(&path)?;
        let board: ScoreBoard = serde_json::from_str(&json)?;

        if board.version > CURRENT_SCORE_VERSION {
            return Err(ScoreError::InvalidVersion(board.version));
        }

        Ok(board)
    }

    /// Records a finished game.
    ///
    /// Returns the entry's rank (0 is best) when it made the table. Ties rank
    /// below existing entries with the same score.
    pub fn record(&self, board: &mut ScoreBoard, score: u32, wave: u32) -> Option<usize> {
        let rank = board
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(board.entries.len());

        if rank >= self.capacity {
            return None;
        }

        board.entries.insert(
            rank,
            ScoreEntry {
                score,
                wave,
                recorded_at: chrono::Local::now(),
            },
        );
        board.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn save(&self, board: &ScoreBoard) -> Result<PathBuf, ScoreError> {
        let path = self.path();
        let json = serde_json::to_string_pretty(board)?;
        fs::write(&path, json)?;

        log::info!("Scores saved to {}", path.display());
        Ok(path)
    }
}
