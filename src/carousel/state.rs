use super::easing::CubicBezier;
use crate::errors::{CarouselError, Result};
use std::time::Duration;

pub const AUTO_DELAY: Duration = Duration::from_secs(5);
pub const TRANSITION_DURATION: Duration = Duration::from_millis(400);
/// Pause between landing past the middle copy and snapping back into it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);
/// Number of copies of the event list laid end to end on the track.
pub const TRACK_COPIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    /// Zero disables automatic advancement.
    pub auto_delay: Duration,
    pub transition: Duration,
    pub settle_delay: Duration,
    pub easing: CubicBezier,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            auto_delay: AUTO_DELAY,
            transition: TRANSITION_DURATION,
            settle_delay: SETTLE_DELAY,
            easing: CubicBezier::SMOOTH,
        }
    }
}

/// Things that happened during a [`Carousel::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The auto-advance timer fired and a slide started.
    AutoAdvanced,
    /// A slide finished on `slot`.
    Arrived { slot: usize },
    /// The track snapped from a slot outside the middle copy to its twin inside it.
    Wrapped { from: usize, to: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Sliding {
        from: usize,
        to: usize,
        elapsed: Duration,
    },
    Settling {
        remaining: Duration,
        at: usize,
        snap_to: usize,
    },
}

/// Looping carousel position over `len` events.
///
/// The events are laid out three times on a track of `3 * len` slots and the
/// carousel always rests somewhere in the middle copy (`len..2 * len`). Sliding
/// off either end of the middle copy lands on an identical-looking slot in an
/// outer copy, after which the track snaps back to the twin slot in the middle
/// copy without animation.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    timing: CarouselTiming,
    current: usize,
    offset: f32,
    motion: Motion,
    hovered: bool,
    paused: bool,
    auto_elapsed: Duration,
}

impl Carousel {
    pub fn new(len: usize, timing: CarouselTiming) -> Result<Self> {
        if len == 0 {
            return Err(CarouselError::EmptyCatalog);
        }

        Ok(Self {
            len,
            timing,
            current: len,
            offset: len as f32,
            motion: Motion::Idle,
            hovered: false,
            paused: false,
            auto_elapsed: Duration::ZERO,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn track_len(&self) -> usize {
        self.len * TRACK_COPIES
    }

    pub fn middle_start(&self) -> usize {
        self.len
    }

    pub fn middle_end(&self) -> usize {
        self.len * 2
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    pub fn set_timing(&mut self, timing: CarouselTiming) {
        self.timing = timing;
    }

    /// The settled slot. Only changes once a slide has fully landed.
    pub fn current_slot(&self) -> usize {
        self.current
    }

    /// Rendered track position in slots; fractional while sliding.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Event shown on `slot`.
    pub fn event_at(&self, slot: usize) -> usize {
        slot % self.len
    }

    pub fn is_active_slot(&self, slot: usize) -> bool {
        slot == self.current
    }

    /// Event highlighted by the navigation dots.
    pub fn active_index(&self) -> usize {
        (self.current + self.len - self.middle_start()) % self.len
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.auto_elapsed = Duration::ZERO;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            self.auto_elapsed = Duration::ZERO;
        }
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    fn auto_armed(&self) -> bool {
        !self.hovered
            && !self.paused
            && !self.timing.auto_delay.is_zero()
            && matches!(self.motion, Motion::Idle)
    }

    /// Fraction of the auto-advance delay that has elapsed, if the timer is running.
    pub fn auto_progress(&self) -> Option<f32> {
        if !self.auto_armed() {
            return None;
        }
        let progress = self.auto_elapsed.as_secs_f32() / self.timing.auto_delay.as_secs_f32();
        Some(progress.clamp(0.0, 1.0))
    }

    /// Slide one slot forward. Returns `false` if a transition is already running.
    pub fn move_to_next(&mut self) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.start_slide(self.current + 1);
        true
    }

    /// Slide one slot back. Returns `false` if a transition is already running.
    pub fn move_to_previous(&mut self) -> bool {
        if self.is_transitioning() {
            return false;
        }
        // current never drops below len, which is at least 1
        self.start_slide(self.current - 1);
        true
    }

    /// Slide straight to event `target` in the middle copy.
    ///
    /// Returns `Ok(false)` when busy or already showing `target`.
    pub fn jump_to_index(&mut self, target: usize) -> Result<bool> {
        if target >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index: target,
                len: self.len,
            });
        }
        if self.is_transitioning() {
            return Ok(false);
        }

        let slot = self.middle_start() + target;
        if slot == self.current {
            self.auto_elapsed = Duration::ZERO;
            return Ok(false);
        }
        self.start_slide(slot);
        Ok(true)
    }

    fn start_slide(&mut self, to: usize) {
        self.motion = Motion::Sliding {
            from: self.current,
            to,
            elapsed: Duration::ZERO,
        };
        self.auto_elapsed = Duration::ZERO;
    }

    /// Twin of `slot` inside the middle copy, if `slot` lies outside it.
    fn wrap_target(&self, slot: usize) -> Option<usize> {
        if slot >= self.middle_end() {
            Some(slot - self.len)
        } else if slot < self.middle_start() {
            Some(slot + self.len)
        } else {
            None
        }
    }

    fn settle(&mut self, slot: usize) {
        self.current = slot;
        self.offset = slot as f32;
        self.motion = Motion::Idle;
        self.auto_elapsed = Duration::ZERO;
    }

    /// Advance animations and the auto-advance timer by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Vec<CarouselEvent> {
        let mut events = Vec::new();

        match self.motion {
            Motion::Idle => {
                if self.auto_armed() {
                    self.auto_elapsed += dt;
                    if self.auto_elapsed >= self.timing.auto_delay && self.move_to_next() {
                        events.push(CarouselEvent::AutoAdvanced);
                    }
                }
            }
            Motion::Sliding { from, to, elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.timing.transition {
                    events.push(CarouselEvent::Arrived { slot: to });
                    match self.wrap_target(to) {
                        Some(snap_to) => {
                            self.offset = to as f32;
                            self.motion = Motion::Settling {
                                remaining: self.timing.settle_delay,
                                at: to,
                                snap_to,
                            };
                        }
                        None => self.settle(to),
                    }
                } else {
                    let progress =
                        elapsed.as_secs_f32() / self.timing.transition.as_secs_f32();
                    let eased = self.timing.easing.ease(progress);
                    self.offset = from as f32 + (to as f32 - from as f32) * eased;
                    self.motion = Motion::Sliding { from, to, elapsed };
                }
            }
            Motion::Settling {
                remaining,
                at,
                snap_to,
            } => {
                if dt >= remaining {
                    events.push(CarouselEvent::Wrapped {
                        from: at,
                        to: snap_to,
                    });
                    self.settle(snap_to);
                } else {
                    self.motion = Motion::Settling {
                        remaining: remaining - dt,
                        at,
                        snap_to,
                    };
                }
            }
        }

        events
    }

    /// How long the caller may wait before the next tick changes anything.
    pub fn next_wakeup(&self) -> Option<Duration> {
        match self.motion {
            Motion::Sliding { .. } => Some(Duration::ZERO),
            Motion::Settling { remaining, .. } => Some(remaining),
            Motion::Idle if self.auto_armed() => {
                Some(self.timing.auto_delay.saturating_sub(self.auto_elapsed))
            }
            Motion::Idle => None,
        }
    }
}
