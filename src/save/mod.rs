//! High score persistence
//!
//! Scores are kept in a single JSON file (human-readable, debuggable):
//! - `types`: score board structures and error types
//! - `manager`: ScoreStore for loading, recording and saving
//!
//! # Example Usage
//!
//! ```ignore
//! let store = ScoreStore::new(ScoreStore::default_directory(), 10)?;
//! let mut board = store.load()?;
//! if let Some(rank) = store.record(&mut board, 1200, 3) {
//!     println!("New high score, rank {}", rank + 1);
//! }
//! store.save(&board)?;
//! ```

pub mod manager;
pub mod types;

// Re-export commonly used types
pub use manager::ScoreStore;
pub use types::*;
