use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::ai::{AiAction, ai_events};
use crate::menu_editor::editor_events;

impl App {
    /// Wait up to `timeout` for one terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event, Instant::now());
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // First input unlocks sound output
        self.sound.init();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.editor.is_visible() {
            editor_events::handle_menu_editor_key(self, key);
            return;
        }

        if self.ai.visible {
            self.handle_ai_panel_key(key);
            return;
        }

        self.handle_stage_key(key, now);
    }

    fn handle_stage_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') => {
                self.toggle_spin(now);
            }
            KeyCode::Char('s') => self.open_menu_editor(),
            KeyCode::Char('a') => self.open_ai_panel(),
            KeyCode::Char('m') => {
                self.toggle_mute();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_ai_panel_key(&mut self, key: KeyEvent) {
        match ai_events::handle_key(&mut self.ai, key) {
            AiAction::Ask => self.ask_ai(),
            AiAction::Accept(name) => self.accept_suggestion(&name),
            AiAction::Closed | AiAction::None => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
