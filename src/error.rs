// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no se pudo generar el PDF: {0}")]
    Pdf(String),

    #[error("la tabla de protocolos está vacía")]
    EmptyFactTable,

    /// Transición de sesión no permitida (p.ej. terminar dos veces).
    #[error("transición inválida: {0}")]
    InvalidTransition(&'static str),

    #[cfg(target_arch = "wasm32")]
    #[error("error del navegador: {0}")]
    Browser(String),
}

impl From<printpdf::Error> for QuizError {
    fn from(err: printpdf::Error) -> Self {
        QuizError::Pdf(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
