// src/grading.rs

use crate::model::{Explanation, Question, QuestionKind};
use serde::{Deserialize, Serialize};

/// Centinela para preguntas sin respuesta (vacía o por tiempo agotado).
pub const NO_ANSWER: &str = "No answer";

pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Comparación exacta, sin mayúsculas y sin espacios en los extremos.
pub fn is_correct(question: &Question, user_answer: &str) -> bool {
    normalize_answer(user_answer) == normalize_answer(&question.answer)
}

pub fn record_answer(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NO_ANSWER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionResult {
    pub kind: QuestionKind,
    pub question: String,
    pub user_answer: String,
    pub answer: String,
    pub correct: bool,
    pub explanation: Explanation,
}

/// Corrige todas las preguntas. Las que no tienen respuesta cuentan como `NO_ANSWER`.
pub fn grade(questions: &[Question], answers: &[Option<String>]) -> Vec<QuestionResult> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let user_answer = answers
                .get(i)
                .and_then(|a| a.clone())
                .unwrap_or_else(|| NO_ANSWER.to_string());
            QuestionResult {
                kind: q.kind,
                question: q.prompt.clone(),
                correct: is_correct(q, &user_answer),
                user_answer,
                answer: q.answer.clone(),
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

pub fn score(results: &[QuestionResult]) -> u32 {
    results.iter().filter(|r| r.correct).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question {
            kind: QuestionKind::AcronymLookup,
            fact_name: "DNS".into(),
            prompt: "What does the acronym DNS stand for?".into(),
            answer: answer.into(),
            options: Vec::new(),
            explanation: Explanation::Single("DNS stands for Domain Name System.".into()),
        }
    }

    #[test]
    fn grading_ignores_case_and_outer_whitespace() {
        let q = question("Domain Name System");
        assert!(is_correct(&q, "domain name system"));
        assert!(is_correct(&q, "  DOMAIN NAME SYSTEM \n"));
        assert!(!is_correct(&q, "Domain  Name System"));
        assert!(!is_correct(&q, "Domain Name"));
    }

    #[test]
    fn blank_answers_become_sentinel() {
        assert_eq!(record_answer(""), NO_ANSWER);
        assert_eq!(record_answer("   "), NO_ANSWER);
        assert_eq!(record_answer(" TCP "), "TCP");
    }

    #[test]
    fn missing_answers_are_graded_as_wrong() {
        let qs = vec![question("Domain Name System"), question("Secure Shell")];
        let answers = vec![Some("domain name system".to_string())];
        let results = grade(&qs, &answers);
        assert_eq!(results.len(), 2);
        assert!(results[0].correct);
        assert!(!results[1].correct);
        assert_eq!(results[1].user_answer, NO_ANSWER);
        assert_eq!(score(&results), 1);
    }

    #[test]
    fn sentinel_never_matches_a_real_answer() {
        let q = question("False");
        assert!(!is_correct(&q, NO_ANSWER));
    }
}
