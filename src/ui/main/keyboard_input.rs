use crate::app::FlagshipApp;

const DIGIT_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

impl FlagshipApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Handle escape key globally to close dialogs
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.show_settings_dialog {
                self.show_settings_dialog = false;
                return;
            }
            if self.is_fullscreen {
                self.set_fullscreen(ctx, false);
                return;
            }
            if self.carousel.is_paused() {
                self.toggle_pause();
                return;
            }
        }

        if ctx.wants_keyboard_input() {
            return;
        }

        let event_count = self.catalog.len();
        let mut toggle_fullscreen = false;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                self.pending_navigate_next = true;
            }
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                self.pending_navigate_prev = true;
            }
            for (index, key) in DIGIT_KEYS.iter().enumerate().take(event_count) {
                if i.key_pressed(*key) {
                    self.pending_jump = Some(index);
                }
            }
            if i.key_pressed(egui::Key::Home) {
                self.pending_jump = Some(0);
            }
            if i.key_pressed(egui::Key::End) {
                self.pending_jump = Some(event_count - 1);
            }

            if i.key_pressed(egui::Key::Space) {
                self.toggle_pause();
            }

            // Toggle panels
            if i.key_pressed(egui::Key::I) {
                self.settings.show_details = !self.settings.show_details;
            }
            if i.key_pressed(egui::Key::Comma) && i.modifiers.command {
                self.show_settings_dialog = !self.show_settings_dialog;
            }

            if i.key_pressed(egui::Key::F11) || i.key_pressed(egui::Key::F) {
                toggle_fullscreen = true;
            }
        });

        if toggle_fullscreen {
            self.set_fullscreen(ctx, !self.is_fullscreen);
        }
    }

    fn set_fullscreen(&mut self, ctx: &egui::Context, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
    }
}
