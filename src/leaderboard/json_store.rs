// src/leaderboard/json_store.rs

use super::{Leaderboard, LeaderboardEntry, LeaderboardStore};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// `leaderboard.json`: array JSON con las entradas, ya ordenadas.
pub struct JsonFileStore {
    path: PathBuf,
    capacity: usize,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Result<Leaderboard> {
        if !self.path.exists() {
            return Ok(Leaderboard::new(self.capacity));
        }
        let json = std::fs::read_to_string(&self.path)?;
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(&json)?;
        Ok(Leaderboard::from_entries(entries, self.capacity))
    }

    fn save(&mut self, board: &Leaderboard) -> Result<()> {
        let json = serde_json::to_string_pretty(board.entries())?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
