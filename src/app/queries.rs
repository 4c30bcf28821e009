use super::*;
use crate::view_models::{leaderboard_rows, result_rows};

impl QuizApp {
    pub fn is_quiz_running(&self) -> bool {
        self.session.as_ref().map(|s| s.current().is_some()).unwrap_or(false)
    }

    pub fn has_timer(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.countdown().is_some())
            .unwrap_or(false)
    }

    pub fn already_submitted(&self) -> bool {
        self.submitted_entry.is_some()
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.outcome
            .as_ref()
            .map(|o| result_rows(&o.results))
            .unwrap_or_default()
    }

    pub fn leaderboard_rows(&self) -> Vec<LeaderboardRow> {
        self.leaderboard
            .as_ref()
            .map(|b| leaderboard_rows(b, self.submitted_entry.as_ref()))
            .unwrap_or_default()
    }
}
