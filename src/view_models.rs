// src/view_models.rs

use crate::grading::QuestionResult;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::model::Explanation;

#[derive(Clone, Debug)]
pub struct ResultRow {
    pub number: usize, // número "humano" (1,2,3…)
    pub question: String,
    pub user_answer: String,
    pub answer: String,
    pub correct: bool,
    /// (opción, explicación); para preguntas de texto la opción va vacía.
    pub explanations: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: String,
    pub time: String,
    pub difficulty: String,
    pub date: String,
    pub highlight: bool, // la entrada recién enviada
}

impl ResultRow {
    pub fn status_label(&self) -> &'static str {
        if self.correct { "✅ Correcta" } else { "❌ Incorrecta" }
    }
}

pub fn result_rows(results: &[QuestionResult]) -> Vec<ResultRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultRow {
            number: i + 1,
            question: r.question.clone(),
            user_answer: r.user_answer.clone(),
            answer: r.answer.clone(),
            correct: r.correct,
            explanations: match &r.explanation {
                Explanation::PerOption(list) => list
                    .iter()
                    .map(|e| (e.option.clone(), e.text.clone()))
                    .collect(),
                Explanation::Single(text) => vec![(String::new(), text.clone())],
            },
        })
        .collect()
}

pub fn leaderboard_rows(
    board: &Leaderboard,
    submitted: Option<&LeaderboardEntry>,
) -> Vec<LeaderboardRow> {
    board
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| LeaderboardRow {
            rank: i + 1,
            name: e.name.clone(),
            score: if e.total > 0 {
                format!("{}/{}", e.score, e.total)
            } else {
                e.score.to_string()
            },
            time: format!("{:.2}s", e.time),
            difficulty: e.difficulty.map(|d| d.label().to_string()).unwrap_or_else(|| "-".into()),
            date: e
                .timestamp
                .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
                .unwrap_or_else(|| "-".into()),
            highlight: submitted == Some(e),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, OptionExplanation, QuestionKind};

    #[test]
    fn rows_flatten_explanations() {
        let results = vec![
            QuestionResult {
                kind: QuestionKind::MultipleChoice,
                question: "q1".into(),
                user_answer: "TCP".into(),
                answer: "UDP".into(),
                correct: false,
                explanation: Explanation::PerOption(vec![OptionExplanation {
                    option: "TCP".into(),
                    text: "Ensures reliable delivery of data.".into(),
                }]),
            },
            QuestionResult {
                kind: QuestionKind::TrueFalse,
                question: "q2".into(),
                user_answer: "true".into(),
                answer: "True".into(),
                correct: true,
                explanation: Explanation::Single("ok".into()),
            },
        ];
        let rows = result_rows(&results);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].explanations[0].0, "TCP");
        assert_eq!(rows[0].status_label(), "❌ Incorrecta");
        assert_eq!(rows[1].explanations, vec![(String::new(), "ok".to_string())]);
    }

    #[test]
    fn leaderboard_rows_mark_submitted_entry() {
        let mine = LeaderboardEntry {
            difficulty: Some(Difficulty::Hard),
            ..LeaderboardEntry::new("me", 4, 5, 20.0)
        };
        let mut board = Leaderboard::new(10);
        board.insert(LeaderboardEntry::new("other", 5, 5, 30.0));
        board.insert(mine.clone());

        let rows = leaderboard_rows(&board, Some(&mine));
        assert_eq!(rows[0].rank, 1);
        assert!(!rows[0].highlight);
        assert!(rows[1].highlight);
        assert_eq!(rows[1].score, "4/5");
        assert_eq!(rows[1].time, "20.00s");
        assert_eq!(rows[1].difficulty, "Hard");
        assert_eq!(rows[1].date, "-");
    }
}
