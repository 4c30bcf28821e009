// src/leaderboard/mod.rs

mod html_store;
mod json_store;
mod memory_store;

pub use html_store::HtmlTableStore;
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;

use crate::config::{LeaderboardBackend, QuizConfig};
use crate::error::Result;
use crate::model::Difficulty;
use crate::session::{QuizOutcome, round2};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    #[serde(default)]
    pub total: usize,
    /// Segundos, 2 decimales.
    pub time: f64,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl LeaderboardEntry {
    pub fn new(name: &str, score: u32, total: usize, time: f64) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() { ANONYMOUS.to_string() } else { name.to_string() },
            score,
            total,
            time: round2(time),
            difficulty: None,
            timestamp: None,
        }
    }

    pub fn from_outcome(name: &str, outcome: &QuizOutcome) -> Self {
        Self {
            difficulty: Some(outcome.difficulty),
            timestamp: Some(outcome.finished_at),
            ..Self::new(name, outcome.score, outcome.total, outcome.elapsed)
        }
    }
}

/// Más puntos primero; a igualdad, menos tiempo.
fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Construye a partir de entradas ya guardadas, reordenando y recortando.
    pub fn from_entries(entries: Vec<LeaderboardEntry>, capacity: usize) -> Self {
        let mut board = Self { entries, capacity: capacity.max(1) };
        board.normalize();
        board
    }

    fn normalize(&mut self) {
        self.entries.sort_by(rank_order);
        self.entries.truncate(self.capacity);
    }

    pub fn insert(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        self.normalize();
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Puesto (1-based) de una entrada concreta, si sigue en la tabla.
    pub fn rank_of(&self, entry: &LeaderboardEntry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry).map(|i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub trait LeaderboardStore {
    fn load(&self) -> Result<Leaderboard>;
    fn save(&mut self, board: &Leaderboard) -> Result<()>;
}

pub fn store_from_config(config: &QuizConfig) -> Box<dyn LeaderboardStore> {
    let size = config.leaderboard_size;
    match config.leaderboard_backend {
        LeaderboardBackend::Json => Box::new(JsonFileStore::new(&config.leaderboard_path, size)),
        LeaderboardBackend::Memory => Box::new(MemoryStore::new(size)),
        LeaderboardBackend::Html => {
            Box::new(HtmlTableStore::new(&config.leaderboard_html_path, size))
        }
    }
}

/// Carga, añade, guarda y devuelve la tabla. Si no se puede cargar, se empieza vacía.
pub fn update_leaderboard(
    store: &mut dyn LeaderboardStore,
    entry: LeaderboardEntry,
    capacity: usize,
) -> Result<Leaderboard> {
    let mut board = load_or_empty(store, capacity);
    board.insert(entry);
    store.save(&board)?;
    log::info!("Leaderboard guardado ({} entradas)", board.len());
    Ok(board)
}

pub fn load_or_empty(store: &dyn LeaderboardStore, capacity: usize) -> Leaderboard {
    match store.load() {
        Ok(board) => board,
        Err(err) => {
            log::warn!("No se pudo cargar el leaderboard: {err}. Se empieza vacío");
            Leaderboard::new(capacity)
        }
    }
}
