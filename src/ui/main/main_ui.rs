use crate::app::FlagshipApp;
use std::time::Duration;

/// How long a status message stays in the status bar.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);
/// Refresh rate of the auto-advance progress bar.
const PROGRESS_REFRESH: Duration = Duration::from_millis(100);

impl eframe::App for FlagshipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ctx = Some(ctx.clone());

        // Process async messages
        self.process_loader_messages(ctx);

        // Slide animation and auto-advance, before input touches the carousel
        let dt = ctx.input(|i| i.stable_dt);
        self.update_carousel(dt);

        // Handle keyboard input
        self.handle_keyboard(ctx);
        self.apply_pending_navigation();

        crate::ui::main::theme::apply_theme(ctx, &self.settings);

        // Remember the window size for the next launch
        if !self.is_fullscreen {
            if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
                self.settings.window_size = (rect.width(), rect.height());
            }
        }

        self.render_settings_dialog(ctx);
        if self.settings.show_statusbar {
            self.render_statusbar(ctx);
        }
        if self.settings.show_details {
            self.render_details_panel(ctx);
        }
        self.render_carousel_view(ctx);

        // Dot clicks land here; apply them before the next tick
        self.apply_pending_navigation();

        self.schedule_repaint(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}

impl FlagshipApp {
    fn schedule_repaint(&mut self, ctx: &egui::Context) {
        let mut wakeup = self.carousel.next_wakeup();
        if self.settings.show_statusbar && self.carousel.auto_progress().is_some() {
            wakeup = wakeup.map(|w| w.min(PROGRESS_REFRESH));
        }

        let message_age = self.status_message.as_ref().map(|(_, shown_at)| shown_at.elapsed());
        if let Some(elapsed) = message_age {
            if elapsed >= STATUS_MESSAGE_TTL {
                self.status_message = None;
            } else {
                let remaining = STATUS_MESSAGE_TTL - elapsed;
                wakeup = Some(wakeup.map_or(remaining, |w| w.min(remaining)));
            }
        }

        match wakeup {
            Some(delay) if delay.is_zero() => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}
