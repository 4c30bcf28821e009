use super::*;

impl QuizApp {
    /// Vuelve a la pantalla inicial borrando todo lo de la partida (sesión,
    /// respuestas, cuenta atrás y resultado). Las preferencias se mantienen.
    pub fn reiniciar(&mut self) {
        self.session = None;
        self.outcome = None;
        self.input.clear();
        self.submitted_entry = None;
        self.message.clear();
        self.confirm_reset = false;
        self.state = AppState::Setup;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres abandonar esta partida? Se perderán las respuestas.");
                ui.horizontal(|ui| {
                    if ui.button("Sí, reiniciar").clicked() {
                        self.reiniciar();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
