//! Key handling for the AI chef panel
//!
//! The panel only edits its own state; anything that touches the menu or the
//! stage is returned as an [`AiAction`] for the app to apply.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::ai_state::AiState;

/// What the app must do after a panel key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiAction {
    /// Nothing beyond the panel itself
    None,
    /// Ask for a recommendation from the active menu
    Ask,
    /// The user picked the suggested dish
    Accept(String),
    /// The panel was closed
    Closed,
}

/// Handle a key while the panel is open
pub fn handle_key(ai_state: &mut AiState, key: KeyEvent) -> AiAction {
    match key.code {
        KeyCode::Esc => {
            ai_state.close();
            AiAction::Closed
        }
        KeyCode::Enter => {
            if ai_state.loading {
                return AiAction::None;
            }
            if ai_state.suggestion.is_some() {
                return ai_state.accept().map_or(AiAction::None, AiAction::Accept);
            }
            AiAction::Ask
        }
        KeyCode::Char('r') if ai_state.suggestion.is_some() && !ai_state.loading => {
            ai_state.clear_suggestion();
            AiAction::None
        }
        _ => {
            if !ai_state.loading && ai_state.suggestion.is_none() && is_text_input(&key) {
                ai_state.preference.input(key);
            }
            AiAction::None
        }
    }
}

fn is_text_input(key: &KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
    )
}

#[cfg(test)]
#[path = "ai_events_tests.rs"]
mod ai_events_tests;
