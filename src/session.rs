// src/session.rs
//
// Máquina de estados de una partida: en curso -> completada -> cerrada.
// Todas las transiciones se comprueban; las inválidas devuelven error.

use crate::error::{QuizError, Result};
use crate::grading::{self, NO_ANSWER, QuestionResult};
use crate::model::{Difficulty, Question};
use crate::timer::Countdown;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct QuizSettings {
    pub difficulty: Difficulty,
    pub count: usize,
    /// `None` desactiva la cuenta atrás.
    pub seconds_per_question: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    /// Todas las preguntas contestadas; falta recoger el resultado.
    Completed,
    Closed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub difficulty: Difficulty,
    pub score: u32,
    pub total: usize,
    /// Segundos totales, redondeados a 2 decimales.
    pub elapsed: f64,
    pub results: Vec<QuestionResult>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    questions: Vec<Question>,
    answers: Vec<Option<String>>,
    current: usize,
    started_at: f64,
    ended_at: Option<f64>,
    countdown: Option<Countdown>,
    phase: Phase,
}

impl QuizSession {
    pub fn start(settings: QuizSettings, questions: Vec<Question>, now: f64) -> Self {
        let countdown = settings
            .seconds_per_question
            .filter(|s| *s > 0.0)
            .map(|s| Countdown::new(now, s));
        let answers = vec![None; questions.len()];
        let empty = questions.is_empty();

        Self {
            settings,
            questions,
            answers,
            current: 0,
            started_at: now,
            ended_at: if empty { Some(now) } else { None },
            countdown,
            phase: if empty { Phase::Completed } else { Phase::InProgress },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.questions.get(self.current),
            _ => None,
        }
    }

    /// (número 1-based, total)
    pub fn position(&self) -> (usize, usize) {
        ((self.current + 1).min(self.questions.len()), self.questions.len())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.countdown.map(|c| c.remaining(now))
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        self.ended_at.unwrap_or(now) - self.started_at
    }

    /// Registra la respuesta de la pregunta actual y avanza.
    pub fn submit(&mut self, raw_answer: &str, now: f64) -> Result<()> {
        if self.phase != Phase::InProgress {
            return Err(QuizError::InvalidTransition("no hay ninguna pregunta en curso"));
        }
        self.answers[self.current] = Some(grading::record_answer(raw_answer));
        self.advance(now);
        Ok(())
    }

    /// Caduca la pregunta actual si se acabó su tiempo. Devuelve `true` si caducó.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        let expired = self.countdown.map(|c| c.is_expired(now)).unwrap_or(false);
        if expired {
            log::info!("Tiempo agotado en la pregunta {}", self.current + 1);
            self.answers[self.current] = Some(NO_ANSWER.to_string());
            self.advance(now);
        }
        expired
    }

    fn advance(&mut self, now: f64) {
        self.current += 1;
        if self.current >= self.questions.len() {
            self.phase = Phase::Completed;
            self.ended_at = Some(now);
        } else if let Some(c) = self.countdown.as_mut() {
            c.restart(now);
        }
    }

    /// Cierra la partida y devuelve el resultado corregido. Solo una vez.
    pub fn finish(&mut self) -> Result<QuizOutcome> {
        match self.phase {
            Phase::InProgress => {
                return Err(QuizError::InvalidTransition("quedan preguntas por contestar"));
            }
            Phase::Closed => return Err(QuizError::InvalidTransition("la partida ya terminó")),
            Phase::Completed => {}
        }
        self.phase = Phase::Closed;

        let results = grading::grade(&self.questions, &self.answers);
        let score = grading::score(&results);
        let elapsed = round2(self.ended_at.unwrap_or(self.started_at) - self.started_at);
        log::info!(
            "Partida terminada: {}/{} en {:.2}s",
            score,
            results.len(),
            elapsed
        );

        Ok(QuizOutcome {
            difficulty: self.settings.difficulty,
            score,
            total: results.len(),
            elapsed,
            results,
            finished_at: Utc::now(),
        })
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
