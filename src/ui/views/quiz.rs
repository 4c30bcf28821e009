use crate::QuizApp;
use crate::ui::helpers::status_message;
use crate::ui::layout::card;
use egui::{Align, Context, Key, ProgressBar, RichText, ScrollArea, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    // Copiamos lo necesario para no tener la sesión prestada mientras se edita `input`
    let Some((number, total, question)) = app.session.as_ref().and_then(|s| {
        let (n, t) = s.position();
        s.current().map(|q| (n, t, q.clone()))
    }) else {
        return;
    };
    let countdown = app
        .session
        .as_ref()
        .and_then(|s| s.countdown().copied());

    card(ctx, 650.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(format!("Pregunta {number} de {total}"));
            ui.label(RichText::new(question.kind.label()).weak());
            ui.add_space(8.0);

            if let Some(c) = countdown {
                let left = c.remaining(now);
                ui.add(
                    ProgressBar::new(c.fraction_left(now))
                        .text(format!("⏳ {left:.0} s"))
                        .desired_width(ui.available_width() * 0.9),
                );
                ui.add_space(8.0);
            }

            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                ui.label(RichText::new(&question.prompt).size(18.0));
            });
            ui.add_space(12.0);

            let mut enter = false;
            if question.is_choice() {
                ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                    for opt in &question.options {
                        ui.radio_value(&mut app.input, opt.clone(), opt.as_str());
                    }
                });
            } else {
                let resp = ui.add(
                    TextEdit::singleline(&mut app.input)
                        .hint_text("Escribe tu respuesta")
                        .desired_width(ui.available_width() * 0.8),
                );
                resp.request_focus();
                enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            }

            ui.add_space(12.0);
            let label = if number == total { "Terminar" } else { "Enviar" };
            if ui.add_sized([200.0, 36.0], egui::Button::new(label)).clicked() || enter {
                app.enviar_respuesta(now);
            }

            status_message(ui, &app.message);
        });
    });
}
