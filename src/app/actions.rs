use super::*;
use crate::generator::generate_questions;
use crate::leaderboard::{load_or_empty, update_leaderboard};
use crate::report::export_report;
use crate::session::QuizSettings;
use rand::Rng;

impl QuizApp {
    pub fn empezar_quiz(&mut self, now: f64) {
        let mut rng = rand::thread_rng();
        self.empezar_quiz_con(&mut rng, now);
    }

    pub fn empezar_quiz_con<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) {
        let settings = QuizSettings {
            difficulty: self.prefs.difficulty,
            count: self.prefs.question_count,
            seconds_per_question: if self.prefs.timer_enabled {
                self.config.timer_seconds()
            } else {
                None
            },
        };

        let questions = generate_questions(
            &self.facts,
            settings.difficulty,
            settings.count,
            self.config.filter_pool_by_difficulty,
            rng,
        );
        if questions.is_empty() {
            self.message = "⚠ No hay preguntas disponibles para esta configuración.".into();
            return;
        }

        self.session = Some(QuizSession::start(settings, questions, now));
        self.outcome = None;
        self.submitted_entry = None;
        self.input.clear();
        self.message.clear();
        self.state = AppState::Quiz;
    }

    pub fn enviar_respuesta(&mut self, now: f64) {
        let Some(session) = self.session.as_mut() else {
            self.message = "Error interno: no hay partida en curso.".into();
            return;
        };

        if let Err(err) = session.submit(&self.input, now) {
            self.message = format!("⚠ {err}");
            return;
        }
        self.input.clear();
        self.message.clear();

        if session.is_complete() {
            self.terminar_quiz();
        }
    }

    /// Llamar en cada frame mientras haya partida: caduca la pregunta si se acabó el tiempo.
    pub fn comprobar_tiempo(&mut self, now: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.tick(now) {
            self.input.clear();
            self.message = "⏰ Se acabó el tiempo para la pregunta anterior.".into();
            if session.is_complete() {
                self.terminar_quiz();
            }
        }
    }

    fn terminar_quiz(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        match session.finish() {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.state = AppState::Review;
                // El diálogo de reinicio pertenecía a la partida que acaba de cerrarse.
                self.confirm_reset = false;
            }
            Err(err) => {
                log::error!("No se pudo cerrar la partida: {err}");
                self.message = format!("⚠ {err}");
                self.session = Some(session);
            }
        }
    }

    pub fn enviar_a_leaderboard(&mut self) {
        if self.already_submitted() {
            self.message = "Ya has enviado esta puntuación.".into();
            return;
        }
        let Some(outcome) = self.outcome.as_ref() else {
            return;
        };

        let entry = LeaderboardEntry::from_outcome(&self.prefs.player_name, outcome);
        match update_leaderboard(self.store.as_mut(), entry.clone(), self.config.leaderboard_size) {
            Ok(board) => {
                self.leaderboard = Some(board);
                self.submitted_entry = Some(entry);
                self.message = "✅ ¡Puntuación enviada!".into();
                self.state = AppState::Leaderboard;
            }
            Err(err) => {
                log::error!("No se pudo guardar el leaderboard: {err}");
                self.message = format!("⚠ No se pudo guardar el leaderboard: {err}");
            }
        }
    }

    pub fn ver_leaderboard(&mut self) {
        self.leaderboard = Some(load_or_empty(self.store.as_ref(), self.config.leaderboard_size));
        self.state = AppState::Leaderboard;
    }

    /// Desde el leaderboard: a la revisión si hay resultado, si no al inicio.
    pub fn volver(&mut self) {
        self.state = if self.outcome.is_some() {
            AppState::Review
        } else {
            AppState::Setup
        };
    }

    pub fn exportar_pdf(&mut self) {
        let Some(outcome) = self.outcome.as_ref() else {
            return;
        };
        self.message = match export_report(outcome, &self.prefs.player_name, &self.config.report_path) {
            Ok(path) => format!("📄 Informe guardado en {}", path.display()),
            Err(err) => {
                log::error!("Fallo al exportar el PDF: {err}");
                format!("⚠ No se pudo exportar el PDF: {err}")
            }
        };
    }
}
