pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod grading;
pub mod leaderboard;
pub mod model;
pub mod report;
pub mod session;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::{QuizError, Result};
