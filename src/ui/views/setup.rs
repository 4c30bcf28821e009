use crate::QuizApp;
use crate::model::Difficulty;
use crate::ui::helpers::{big_button, status_message};
use crate::ui::layout::card;
use egui::{Align, ComboBox, Context, Slider};

pub fn ui_setup(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    card(ctx, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🌐 Quiz de protocolos de red");
            ui.add_space(6.0);
            ui.label(format!("{} protocolos en la tabla", app.facts.len()));
            ui.add_space(18.0);

            egui::Grid::new("setup_grid")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Dificultad");
                    ComboBox::from_id_salt("difficulty")
                        .selected_text(app.prefs.difficulty.label())
                        .show_ui(ui, |ui| {
                            for d in Difficulty::ALL {
                                ui.selectable_value(&mut app.prefs.difficulty, d, d.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Preguntas");
                    ui.add(Slider::new(
                        &mut app.prefs.question_count,
                        1..=app.config.max_question_count,
                    ));
                    ui.end_row();

                    ui.label("Cuenta atrás");
                    match app.config.timer_seconds() {
                        Some(secs) => {
                            ui.checkbox(
                                &mut app.prefs.timer_enabled,
                                format!("{secs:.0} s por pregunta"),
                            );
                        }
                        None => {
                            ui.label("desactivada en la configuración");
                        }
                    }
                    ui.end_row();
                });

            ui.add_space(18.0);
            let btn_w = (ui.available_width() * 0.8).clamp(120.0, 360.0);
            let can_start = !app.facts.is_empty();
            if big_button(ui, "▶ Empezar", btn_w, 40.0, can_start) {
                app.empezar_quiz(now);
            }
            ui.add_space(5.0);
            if big_button(ui, "🏆 Ver leaderboard", btn_w, 40.0, true) {
                app.ver_leaderboard();
            }

            status_message(ui, &app.message);
        });
    });
}
