use crate::QuizApp;
use crate::ui::helpers::{status_message, verdict_color};
use crate::ui::layout::action_row;
use egui::{Button, CentralPanel, Context, RichText, ScrollArea, TextEdit};

pub fn ui_review(app: &mut QuizApp, ctx: &Context) {
    let Some((score, total, elapsed)) = app.outcome.as_ref().map(|o| (o.score, o.total, o.elapsed)) else {
        app.volver();
        return;
    };
    let rows = app.result_rows();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 700.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);
            ui.heading(format!("✅ Has acertado {score} de {total} en {elapsed:.2} segundos"));
            ui.add_space(10.0);

            ScrollArea::vertical()
                .max_height((ui.available_height() - 170.0).max(150.0))
                .show(ui, |ui| {
                    for r in &rows {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.label(RichText::new(format!("P{}: {}", r.number, r.question)).strong());
                            ui.label(
                                RichText::new(format!("Tu respuesta: {}  {}", r.user_answer, r.status_label()))
                                    .color(verdict_color(r.correct)),
                            );
                            ui.label(format!("Respuesta correcta: {}", r.answer));
                            for (option, text) in &r.explanations {
                                if option.is_empty() {
                                    ui.label(format!("💡 {text}"));
                                } else {
                                    ui.label(format!("   • {option}: {text}"));
                                }
                            }
                        });
                        ui.separator();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("🏅 Nombre para el leaderboard:");
                ui.add(
                    TextEdit::singleline(&mut app.prefs.player_name)
                        .hint_text("Anonymous")
                        .desired_width(200.0),
                );
                let enabled = !app.already_submitted();
                if ui.add_enabled(enabled, Button::new("Enviar al leaderboard")).clicked() {
                    app.enviar_a_leaderboard();
                }
            });

            ui.add_space(6.0);
            match action_row(ui, &["📄 Exportar PDF", "🏆 Ver leaderboard"]) {
                Some(0) => app.exportar_pdf(),
                Some(_) => app.ver_leaderboard(),
                None => {}
            }

            status_message(ui, &app.message);
        });
    });
}
