use super::FlagshipApp;
use crate::carousel::CarouselEvent;
use crate::events::FlagshipEvent;
use std::time::Duration;

/// Longest step the carousel advances in one frame. Frames that arrive after
/// an idle period (paused, hovered, minimised) never skip a slide.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Carousel step for a frame with egui's `stable_dt`.
pub fn frame_step(stable_dt: f32) -> Duration {
    if !stable_dt.is_finite() || stable_dt <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f32(stable_dt).min(MAX_FRAME_STEP)
}

impl FlagshipApp {
    pub fn active_event(&self) -> Option<&FlagshipEvent> {
        self.catalog.get(self.carousel.active_index())
    }

    pub fn next_event(&mut self) {
        if !self.carousel.move_to_next() {
            tracing::trace!("next ignored, transition in flight");
        }
    }

    pub fn previous_event(&mut self) {
        if !self.carousel.move_to_previous() {
            tracing::trace!("previous ignored, transition in flight");
        }
    }

    pub fn go_to_event(&mut self, index: usize) {
        match self.carousel.jump_to_index(index) {
            Ok(true) => tracing::debug!("jumping to event {}", index),
            Ok(false) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.carousel.toggle_paused();
        let msg = if self.carousel.is_paused() {
            "Auto-advance paused"
        } else {
            "Auto-advance resumed"
        };
        self.set_status_message(msg.to_string());
    }

    /// Push edited settings into the running carousel.
    pub fn apply_settings(&mut self) {
        self.carousel.set_timing(self.settings.timing());
        if !self.settings.pause_on_hover {
            self.carousel.set_hovered(false);
        }
    }

    /// Pointer entered or left the carousel widget.
    pub fn set_pointer_over_carousel(&mut self, over: bool) {
        self.carousel.set_hovered(over && self.settings.pause_on_hover);
    }

    pub fn apply_pending_navigation(&mut self) {
        if self.pending_navigate_prev {
            self.previous_event();
        }
        if self.pending_navigate_next {
            self.next_event();
        }
        if let Some(index) = self.pending_jump.take() {
            self.go_to_event(index);
        }

        self.pending_navigate_prev = false;
        self.pending_navigate_next = false;
    }

    /// Advance the carousel by one frame. Runs before this frame's input is
    /// applied, so a state change always starts from a fresh timer.
    pub fn update_carousel(&mut self, stable_dt: f32) -> Vec<CarouselEvent> {
        let events = self.carousel.tick(frame_step(stable_dt));
        for event in &events {
            match *event {
                CarouselEvent::AutoAdvanced => tracing::debug!("auto-advance"),
                CarouselEvent::Arrived { slot } => tracing::debug!(slot, "slide finished"),
                CarouselEvent::Wrapped { from, to } => tracing::debug!(from, to, "track wrapped"),
            }
        }
        events
    }
}
