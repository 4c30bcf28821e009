// src/config.rs

use crate::error::Result;
use crate::model::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "quiz_config.yaml";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardBackend {
    #[default]
    Json,
    Memory,
    Html,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub default_difficulty: Difficulty,
    pub default_question_count: usize,
    pub max_question_count: usize,
    /// 0 desactiva la cuenta atrás.
    pub seconds_per_question: u32,
    pub timer_enabled_by_default: bool,
    pub leaderboard_backend: LeaderboardBackend,
    pub leaderboard_path: PathBuf,
    pub leaderboard_html_path: PathBuf,
    pub leaderboard_size: usize,
    pub report_path: PathBuf,
    pub filter_pool_by_difficulty: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Easy,
            default_question_count: 5,
            max_question_count: 20,
            seconds_per_question: 15,
            timer_enabled_by_default: false,
            leaderboard_backend: LeaderboardBackend::Json,
            leaderboard_path: PathBuf::from("leaderboard.json"),
            leaderboard_html_path: PathBuf::from("leaderboard.html"),
            leaderboard_size: 10,
            report_path: PathBuf::from("quiz_results.pdf"),
            filter_pool_by_difficulty: false,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let mut config: QuizConfig = serde_yaml::from_str(text)?;
        config.leaderboard_size = config.leaderboard_size.max(1);
        config.max_question_count = config.max_question_count.max(1);
        config.default_question_count = config
            .default_question_count
            .clamp(1, config.max_question_count);
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Lee `quiz_config.yaml` si existe; si no, o si está mal, usa los valores por defecto.
    pub fn load_or_default() -> Self {
        // En el navegador no hay disco: leaderboard de sesión
        if cfg!(target_arch = "wasm32") {
            return Self {
                leaderboard_backend: LeaderboardBackend::Memory,
                ..Self::default()
            };
        }

        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("Configuración cargada de {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("No se pudo leer {}: {err}. Uso valores por defecto", path.display());
                Self::default()
            }
        }
    }

    pub fn timer_seconds(&self) -> Option<f64> {
        (self.seconds_per_question > 0).then_some(self.seconds_per_question as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = QuizConfig::from_yaml("default_difficulty: Hard\nleaderboard_backend: html\n").unwrap();
        assert_eq!(config.default_difficulty, Difficulty::Hard);
        assert_eq!(config.leaderboard_backend, LeaderboardBackend::Html);
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.leaderboard_path, PathBuf::from("leaderboard.json"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = QuizConfig::from_yaml(
            "leaderboard_size: 0\nmax_question_count: 8\ndefault_question_count: 50\n",
        )
        .unwrap();
        assert_eq!(config.leaderboard_size, 1);
        assert_eq!(config.default_question_count, 8);
    }

    #[test]
    fn zero_seconds_disables_timer() {
        let config = QuizConfig::from_yaml("seconds_per_question: 0\n").unwrap();
        assert_eq!(config.timer_seconds(), None);
        assert_eq!(QuizConfig::default().timer_seconds(), Some(15.0));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(QuizConfig::from_yaml("leaderboard_size: [1, 2").is_err());
    }
}
