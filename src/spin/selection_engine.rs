//! Selection Engine
//!
//! Idle/Spinning state machine. While spinning, every timer period draws
//! one active item uniformly at random. The active subset is read from the
//! menu at each draw, so edits made mid-spin take effect on the next tick.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::repeating_timer::RepeatingTimer;
use crate::menu::MenuStore;
use crate::sound::{SoundEvent, SoundService};

/// Draw cadence while spinning
pub const SPIN_PERIOD: Duration = Duration::from_millis(50);

/// Shown before the first spin
pub const IDLE_PLACEHOLDER: &str = "今天吃啥呀";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Idle,
    Spinning,
}

/// Result of a start/stop/toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped,
    /// Start refused because no item is active
    Rejected,
    /// Already in the requested state
    Unchanged,
}

pub struct SelectionEngine<R = StdRng> {
    state: SpinState,
    current: String,
    timer: RepeatingTimer,
    rng: R,
}

impl SelectionEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for SelectionEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SelectionEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SpinState::Idle,
            current: IDLE_PLACEHOLDER.to_string(),
            timer: RepeatingTimer::new(SPIN_PERIOD),
            rng,
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state == SpinState::Spinning
    }

    pub fn current_selection(&self) -> &str {
        &self.current
    }

    /// When the next draw is due, if spinning
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    pub fn is_tick_scheduled(&self) -> bool {
        self.timer.is_scheduled()
    }

    /// Begin spinning
    ///
    /// Refused without side effects when the menu has no active item.
    pub fn start(&mut self, menu: &MenuStore, now: Instant) -> Transition {
        if self.is_spinning() {
            return Transition::Unchanged;
        }
        if menu.active_count() == 0 {
            log::debug!("Spin start rejected: no active items");
            return Transition::Rejected;
        }

        self.timer.start(now);
        self.state = SpinState::Spinning;
        Transition::Started
    }

    /// Stop on the last drawn item and play the completion chime
    pub fn stop(&mut self, sound: &mut SoundService) -> Transition {
        if !self.is_spinning() {
            return Transition::Unchanged;
        }

        self.timer.cancel();
        self.state = SpinState::Idle;
        sound.play(SoundEvent::Completion);
        log::debug!("Spin stopped on {}", self.current);
        Transition::Stopped
    }

    pub fn toggle(&mut self, menu: &MenuStore, sound: &mut SoundService, now: Instant) -> Transition {
        if self.is_spinning() {
            self.stop(sound)
        } else {
            self.start(menu, now)
        }
    }

    /// Advance the timer and draw if a period has elapsed
    ///
    /// Returns true when a draw happened.
    pub fn poll(&mut self, menu: &MenuStore, sound: &mut SoundService, now: Instant) -> bool {
        if !self.is_spinning() || !self.timer.fire_if_due(now) {
            return false;
        }
        self.draw(menu, sound)
    }

    /// Draw once from the current active subset
    ///
    /// Does nothing when idle. An active subset emptied mid-spin keeps the
    /// last value on screen until items are enabled again or the spin stops.
    pub fn draw(&mut self, menu: &MenuStore, sound: &mut SoundService) -> bool {
        if !self.is_spinning() {
            return false;
        }

        let active = menu.active_count();
        if active == 0 {
            return false;
        }

        let index = self.rng.gen_range(0..active);
        if let Some(item) = menu.active_items().nth(index) {
            self.current.clone_from(&item.name);
        }
        sound.play(SoundEvent::Tick);
        true
    }

    /// Show an externally chosen dish, e.g. an accepted AI suggestion
    ///
    /// Ignored while spinning.
    pub fn set_result(&mut self, name: &str) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.current = name.to_string();
        true
    }
}

#[cfg(test)]
#[path = "selection_engine_tests.rs"]
mod selection_engine_tests;
