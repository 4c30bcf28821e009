use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, Margin, RichText, Ui, Visuals};

/// Alto de los botones de `action_row`.
const ACTION_HEIGHT: f32 = 36.0;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Empezar de nuevo").clicked() {
                // En plena partida se pide confirmación; en la revisión no hace falta
                if app.state == AppState::Quiz {
                    app.confirm_reset = true;
                } else {
                    app.reiniciar();
                }
            }
        });
    });
}

/// Barra inferior: versión a la izquierda, cambio de tema a la derecha.
pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(concat!("v", env!("CARGO_PKG_VERSION"))).weak().small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Modo claro" } else { "🌙 Modo oscuro" };
                if ui.button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Tarjeta en el panel central, centrada en horizontal y con un hueco
/// arriba proporcional a la altura de la ventana.
pub fn card(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ui.add_space((ui.available_height() * 0.1).min(60.0));
        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .fill(ui.visuals().window_fill())
                .inner_margin(Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(max_width));
                    inner(ui);
                });
        });
    });
}

/// Fila de botones del mismo ancho que ocupa todo el ancho disponible.
/// Devuelve el índice del botón pulsado, si alguno.
pub fn action_row(ui: &mut Ui, labels: &[&str]) -> Option<usize> {
    if labels.is_empty() {
        return None;
    }
    let mut clicked = None;
    ui.columns(labels.len(), |cols| {
        for (i, (col, label)) in cols.iter_mut().zip(labels).enumerate() {
            let width = col.available_width();
            if col.add_sized([width, ACTION_HEIGHT], Button::new(*label)).clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}
