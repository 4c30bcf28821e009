use crate::config::{LeaderboardBackend, QuizConfig};
use crate::data::read_protocols_embedded;
use crate::leaderboard::{
    Leaderboard, LeaderboardEntry, LeaderboardStore, MemoryStore, load_or_empty, store_from_config,
};
use crate::model::{AppState, Difficulty, ProtocolFact};
use crate::session::{QuizOutcome, QuizSession};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

/// Clave de eframe para la tabla de sesión (backend `memory`).
pub const LEADERBOARD_KEY: &str = "session_leaderboard";

// Re-export de view models
pub use crate::view_models::{LeaderboardRow, ResultRow};

/// Lo único que se guarda entre ejecuciones (almacenamiento de eframe).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub timer_enabled: bool,
    pub player_name: String,
}

impl Preferences {
    pub fn from_config(config: &QuizConfig) -> Self {
        Self {
            difficulty: config.default_difficulty,
            question_count: config.default_question_count,
            timer_enabled: config.timer_enabled_by_default && config.timer_seconds().is_some(),
            player_name: String::new(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

pub struct QuizApp {
    pub prefs: Preferences,
    pub config: QuizConfig,
    pub facts: Vec<ProtocolFact>,
    pub state: AppState,
    pub session: Option<QuizSession>,
    pub outcome: Option<QuizOutcome>,
    /// Respuesta que se está escribiendo/seleccionando para la pregunta actual.
    pub input: String,
    pub leaderboard: Option<Leaderboard>,
    pub submitted_entry: Option<LeaderboardEntry>,
    pub store: Box<dyn LeaderboardStore>,
    pub message: String,
    pub confirm_reset: bool,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        let mut message = String::new();
        let facts = match read_protocols_embedded() {
            Ok(facts) => facts,
            Err(err) => {
                log::error!("No se pudo cargar la tabla de protocolos: {err}");
                message = format!("⚠ {err}");
                Vec::new()
            }
        };

        Self {
            prefs: Preferences::from_config(&config),
            store: store_from_config(&config),
            config,
            facts,
            state: AppState::Setup,
            session: None,
            outcome: None,
            input: String::new(),
            leaderboard: None,
            submitted_entry: None,
            message,
            confirm_reset: false,
        }
    }

    /// Punto de entrada de eframe: config + preferencias guardadas.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::new(QuizConfig::load_or_default());
        if let Some(storage) = cc.storage {
            app.restore(storage);
        }
        app
    }

    /// Recupera preferencias y, con el backend `memory`, la tabla de sesión.
    pub fn restore(&mut self, storage: &dyn eframe::Storage) {
        if let Some(prefs) = eframe::get_value::<Preferences>(storage, eframe::APP_KEY) {
            self.prefs = prefs;
            self.prefs.question_count = self
                .prefs
                .question_count
                .clamp(1, self.config.max_question_count);
            self.prefs.timer_enabled &= self.config.timer_seconds().is_some();
        }

        if self.config.leaderboard_backend == LeaderboardBackend::Memory {
            if let Some(entries) = eframe::get_value::<Vec<LeaderboardEntry>>(storage, LEADERBOARD_KEY) {
                log::debug!("Recuperadas {} entradas del leaderboard de sesión", entries.len());
                let board = Leaderboard::from_entries(entries, self.config.leaderboard_size);
                self.store = Box::new(MemoryStore::with_board(board));
            }
        }
    }

    pub fn persist(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
        if self.config.leaderboard_backend == LeaderboardBackend::Memory {
            let board = load_or_empty(self.store.as_ref(), self.config.leaderboard_size);
            eframe::set_value(storage, LEADERBOARD_KEY, &board.entries());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::update_leaderboard;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStorage(HashMap<String, String>);

    impl eframe::Storage for MapStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn flush(&mut self) {}
    }

    fn memory_app() -> QuizApp {
        QuizApp::new(QuizConfig {
            leaderboard_backend: LeaderboardBackend::Memory,
            ..QuizConfig::default()
        })
    }

    #[test]
    fn session_leaderboard_survives_a_reload() {
        let mut app = memory_app();
        app.prefs.player_name = "lola".into();
        update_leaderboard(app.store.as_mut(), LeaderboardEntry::new("lola", 4, 5, 33.3), 10).unwrap();

        let mut storage = MapStorage::default();
        app.persist(&mut storage);
        assert!(storage.0.contains_key(LEADERBOARD_KEY));

        let mut reloaded = memory_app();
        reloaded.restore(&storage);
        assert_eq!(reloaded.prefs.player_name, "lola");
        let board = reloaded.store.load().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].name, "lola");
        assert_eq!(board.entries()[0].score, 4);
    }

    #[test]
    fn file_backends_do_not_write_the_board_to_storage() {
        let app = QuizApp::new(QuizConfig::default());
        let mut storage = MapStorage::default();
        app.persist(&mut storage);
        assert!(!storage.0.contains_key(LEADERBOARD_KEY));
        assert!(storage.0.contains_key(eframe::APP_KEY));
    }
}
