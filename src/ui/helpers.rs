// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Mensaje de estado en amarillo, si hay alguno.
pub fn status_message(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(10.0);
        ui.label(RichText::new(message).color(Color32::YELLOW).strong());
    }
}

/// Color para una respuesta acertada o fallada.
pub fn verdict_color(correct: bool) -> Color32 {
    if correct {
        Color32::from_rgb(80, 200, 120)
    } else {
        Color32::from_rgb(230, 90, 90)
    }
}
