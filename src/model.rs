use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Tipos de pregunta que puede producir cada dificultad.
    pub fn question_kinds(self) -> &'static [QuestionKind] {
        match self {
            Difficulty::Easy => &[QuestionKind::MultipleChoice],
            Difficulty::Medium => &[QuestionKind::MultipleChoice, QuestionKind::PortLookup],
            Difficulty::Hard => &[
                QuestionKind::PortLookup,
                QuestionKind::TrueFalse,
                QuestionKind::LayerLookup,
                QuestionKind::AcronymLookup,
            ],
        }
    }
}

/// Fila de la tabla de protocolos. Se carga una vez y nunca se muta.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProtocolFact {
    pub name: String,
    pub acronym: String,
    pub port: String,
    pub layer: String,
    pub osi_layer: u8,
    pub reliable: bool,
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    MultipleChoice,
    PortLookup,
    LayerLookup,
    AcronymLookup,
    TrueFalse,
}

impl QuestionKind {
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Opción múltiple",
            QuestionKind::PortLookup => "Puerto",
            QuestionKind::LayerLookup => "Capa",
            QuestionKind::AcronymLookup => "Acrónimo",
            QuestionKind::TrueFalse => "Verdadero/Falso",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OptionExplanation {
    pub option: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Explanation {
    PerOption(Vec<OptionExplanation>),
    Single(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub kind: QuestionKind,
    pub fact_name: String,
    pub prompt: String,
    pub answer: String,
    /// Vacío para las preguntas de texto libre.
    #[serde(default)]
    pub options: Vec<String>,
    pub explanation: Explanation,
}

impl Question {
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice | QuestionKind::TrueFalse)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Setup,
    Quiz,
    Review,
    Leaderboard,
}
