use crate::QuizApp;
use crate::ui::helpers::status_message;
use crate::ui::layout::{action_row, card};
use egui::{Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_leaderboard(app: &mut QuizApp, ctx: &Context) {
    let rows = app.leaderboard_rows();

    card(ctx, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("📊 Leaderboard");
            ui.add_space(10.0);

            if rows.is_empty() {
                ui.label("Todavía no hay puntuaciones.");
            } else {
                ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                    Grid::new("leaderboard_grid")
                        .striped(true)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for header in ["#", "Nombre", "Puntos", "Tiempo", "Dificultad", "Fecha"] {
                                ui.label(RichText::new(header).strong());
                            }
                            ui.end_row();

                            for r in &rows {
                                let cell = |text: &str| {
                                    let rt = RichText::new(text);
                                    if r.highlight { rt.color(Color32::YELLOW).strong() } else { rt }
                                };
                                ui.label(cell(&r.rank.to_string()));
                                ui.label(cell(&r.name));
                                ui.label(cell(&r.score));
                                ui.label(cell(&r.time));
                                ui.label(cell(&r.difficulty));
                                ui.label(cell(&r.date));
                                ui.end_row();
                            }
                        });
                });
            }

            ui.add_space(12.0);
            match action_row(ui, &["Volver", "🔄 Empezar de nuevo"]) {
                Some(0) => app.volver(),
                Some(_) => app.reiniciar(),
                None => {}
            }

            status_message(ui, &app.message);
        });
    });
}
