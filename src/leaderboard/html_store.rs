// src/leaderboard/html_store.rs

use super::{JsonFileStore, Leaderboard, LeaderboardStore};
use crate::error::Result;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Escribe `leaderboard.html` como tabla. Los datos van en `<ruta>.json`
/// al lado, porque el HTML solo es una vista.
pub struct HtmlTableStore {
    html_path: PathBuf,
    data: JsonFileStore,
}

impl HtmlTableStore {
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> Self {
        let html_path = path.as_ref().to_path_buf();
        let mut sidecar = html_path.clone().into_os_string();
        sidecar.push(".json");
        Self {
            html_path,
            data: JsonFileStore::new(PathBuf::from(sidecar), capacity),
        }
    }
}

impl LeaderboardStore for HtmlTableStore {
    fn load(&self) -> Result<Leaderboard> {
        self.data.load()
    }

    fn save(&mut self, board: &Leaderboard) -> Result<()> {
        self.data.save(board)?;
        std::fs::write(&self.html_path, render_html_table(board))?;
        Ok(())
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html_table(board: &Leaderboard) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Leaderboard</title></head>\n<body>\n<table border=\"1\">\n",
    );
    html.push_str(
        "<thead><tr><th>#</th><th>Name</th><th>Score</th><th>Time (s)</th><th>Difficulty</th><th>Date</th></tr></thead>\n<tbody>\n",
    );
    for (i, e) in board.entries().iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}/{}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>",
            i + 1,
            escape_html(&e.name),
            e.score,
            e.total,
            e.time,
            e.difficulty.map(|d| d.label()).unwrap_or("-"),
            e.timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
