mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIAR (solo durante el quiz y la revisión)
        if matches!(self.state, AppState::Quiz | AppState::Review) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // La cuenta atrás avanza aunque no haya eventos
        if self.state == AppState::Quiz {
            let now = ctx.input(|i| i.time);
            self.comprobar_tiempo(now);
            if self.has_timer() {
                ctx.request_repaint_after(Duration::from_millis(200));
            }
        }

        // Dispatch por estado
        match self.state {
            AppState::Setup => views::setup::ui_setup(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Review => views::review::ui_review(self, ctx),
            AppState::Leaderboard => views::leaderboard::ui_leaderboard(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }
}
