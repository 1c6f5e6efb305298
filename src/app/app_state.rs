use std::time::{Duration, Instant};

use crate::ai::{AiState, DEFAULT_NEW_DISH_COUNT};
use crate::menu::{MenuStore, split_bulk_text};
use crate::menu_editor::MenuEditorState;
use crate::notification::NotificationState;
use crate::sound::{SoundEvent, SoundService};
use crate::spin::{SelectionEngine, Transition};

pub const NO_ACTIVE_WARNING: &str = "没有选中的菜品哦，请在菜单中启用一些！";

/// Longest the event loop waits for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Poll interval while an AI request is outstanding
const AI_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub menu: MenuStore,
    pub engine: SelectionEngine,
    pub sound: SoundService,
    pub ai: AiState,
    pub editor: MenuEditorState,
    pub notification: NotificationState,
    should_quit: bool,
}

impl App {
    pub fn new(menu: MenuStore, sound: SoundService, ai: AiState) -> Self {
        Self {
            menu,
            engine: SelectionEngine::new(),
            sound,
            ai,
            editor: MenuEditorState::new(),
            notification: NotificationState::new(),
            should_quit: false,
        }
    }

    /// Replace the selection engine, e.g. with a seeded one
    pub fn with_engine(mut self, engine: SelectionEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn add_item(&mut self, name: &str) -> bool {
        let added = self.menu.add(name);
        if added {
            self.sound.play(SoundEvent::Click);
        }
        added
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let removed = self.menu.remove(id);
        if removed {
            self.sound.play(SoundEvent::Click);
            self.editor.clamp_selection(self.menu.len());
        }
        removed
    }

    pub fn toggle_item(&mut self, id: &str) -> bool {
        let toggled = self.menu.toggle_active(id);
        if toggled {
            self.sound.play(SoundEvent::Click);
        }
        toggled
    }

    pub fn reset_menu(&mut self, confirmed: bool) -> bool {
        let reset = self.menu.reset_to_default(confirmed);
        if reset {
            self.sound.play(SoundEvent::Click);
            self.editor.clamp_selection(self.menu.len());
        }
        reset
    }

    /// Replace the menu from free text split on spaces and commas
    pub fn bulk_replace_text(&mut self, raw: &str) {
        let names = split_bulk_text(raw);
        self.menu.bulk_replace(&names);
        self.sound.play(SoundEvent::Click);
        self.editor.clamp_selection(self.menu.len());
    }

    /// Start or stop the spinner
    ///
    /// A rejected start warns and opens the menu editor so items can be enabled.
    pub fn toggle_spin(&mut self, now: Instant) -> Transition {
        let transition = self.engine.toggle(&self.menu, &mut self.sound, now);
        match transition {
            Transition::Started => self.sound.start_ambience(),
            Transition::Rejected => {
                self.notification.warn(NO_ACTIVE_WARNING, now);
                self.editor.open();
            }
            Transition::Stopped | Transition::Unchanged => {}
        }
        transition
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.sound.toggle_mute();
        self.sound.play(SoundEvent::Click);
        muted
    }

    pub fn open_menu_editor(&mut self) {
        self.sound.play(SoundEvent::Click);
        self.editor.open();
    }

    pub fn open_ai_panel(&mut self) {
        self.sound.play(SoundEvent::Click);
        self.ai.open();
    }

    /// Ask the AI chef, offering the enabled dishes (or the whole menu if none are)
    pub fn ask_ai(&mut self) {
        let mut names: Vec<String> = self.menu.active_items().map(|i| i.name.clone()).collect();
        if names.is_empty() {
            names = self.menu.names();
        }
        self.ai.request_recommendation(names);
    }

    /// Put the accepted AI dish on the stage
    pub fn accept_suggestion(&mut self, name: &str) {
        self.sound.play(SoundEvent::Click);
        if !self.engine.set_result(name) {
            log::debug!("Ignoring accepted suggestion while spinning");
        }
    }

    pub fn request_new_dishes(&mut self) {
        if self
            .ai
            .request_new_dishes(self.menu.names(), DEFAULT_NEW_DISH_COUNT)
        {
            self.sound.play(SoundEvent::Click);
        }
    }

    /// Advance timers and drain background results
    pub fn on_frame(&mut self, now: Instant) {
        self.engine.poll(&self.menu, &mut self.sound, now);
        self.ai.poll_responses();

        if let Some(names) = self.ai.take_new_dishes() {
            let mut added = 0;
            for name in &names {
                if self.menu.add(name) {
                    added += 1;
                }
            }
            if added > 0 {
                self.sound.play(SoundEvent::Click);
                self.notification
                    .info(format!("AI 帮你添加了 {} 道新菜", added), now);
            } else {
                self.notification.info("没有新的菜品可添加", now);
            }
        }

        self.notification.expire(now);
    }

    /// How long the event loop may block before the next `on_frame`
    pub fn next_timeout(&self, now: Instant) -> Duration {
        let mut timeout = IDLE_POLL;
        if let Some(tick) = self.engine.time_until_tick(now) {
            timeout = timeout.min(tick);
        }
        if let Some(expiry) = self.notification.time_until_expiry(now) {
            timeout = timeout.min(expiry);
        }
        if self.ai.loading || self.ai.generating {
            timeout = timeout.min(AI_POLL);
        }
        timeout
    }

    /// Release resources before exit
    pub fn shutdown(&mut self) {
        self.sound.dispose();
        self.engine.stop(&mut self.sound);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
