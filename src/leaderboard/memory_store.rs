// src/leaderboard/memory_store.rs

use super::{Leaderboard, LeaderboardStore};
use crate::error::Result;

/// Tabla de sesión. `QuizApp` la vuelca al almacenamiento de eframe al
/// guardar y la recupera con `with_board` al arrancar.
pub struct MemoryStore {
    board: Leaderboard,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            board: Leaderboard::new(capacity),
        }
    }

    pub fn with_board(board: Leaderboard) -> Self {
        Self { board }
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Result<Leaderboard> {
        Ok(self.board.clone())
    }

    fn save(&mut self, board: &Leaderboard) -> Result<()> {
        self.board = board.clone();
        Ok(())
    }
}
