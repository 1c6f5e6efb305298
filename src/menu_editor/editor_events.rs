use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use super::{EditorFocus, EditorMode};
use crate::app::App;

pub fn handle_menu_editor_key(app: &mut App, key: KeyEvent) {
    if app.editor.is_confirming_reset() {
        handle_reset_confirm_key(app, key);
        return;
    }

    match app.editor.mode() {
        EditorMode::Bulk => handle_bulk_key(app, key),
        EditorMode::Tags => match app.editor.focus() {
            EditorFocus::Input => handle_input_key(app, key),
            EditorFocus::List => handle_list_key(app, key),
        },
    }
}

fn handle_reset_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.editor.dismiss_reset();
            app.reset_menu(true);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.editor.dismiss_reset();
            app.reset_menu(false);
        }
        _ => {}
    }
}

fn handle_bulk_key(app: &mut App, key: KeyEvent) {
    let save = key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL));
    if save {
        let text = app.editor.leave_bulk();
        app.bulk_replace_text(&text);
        return;
    }
    app.editor.bulk_mut().input(Input::from(key));
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.editor.close(),
        KeyCode::Tab => app.editor.toggle_focus(),
        KeyCode::Down => app.editor.set_focus(EditorFocus::List),
        KeyCode::Enter => {
            let name = app.editor.input_text();
            if !name.is_empty() {
                app.add_item(&name);
                app.editor.clear_input();
            }
        }
        _ => {
            app.editor.input_mut().input(Input::from(key));
        }
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let selected_id = app
        .menu
        .items()
        .get(app.editor.selected_index())
        .map(|item| item.id.clone());

    match key.code {
        KeyCode::Esc => app.editor.close(),
        KeyCode::Tab => app.editor.toggle_focus(),
        KeyCode::Char('i') => app.editor.set_focus(EditorFocus::Input),
        KeyCode::Up | KeyCode::Char('k') => app.editor.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.editor.select_next(app.menu.len()),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = selected_id {
                app.toggle_item(&id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = selected_id {
                app.remove_item(&id);
            }
        }
        KeyCode::Char('r') => app.editor.ask_reset(),
        KeyCode::Char('b') => {
            let names = app.menu.names();
            app.editor.enter_bulk(&names);
        }
        KeyCode::Char('g') => app.request_new_dishes(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "editor_events_tests.rs"]
mod editor_events_tests;
