//! Tests for app_render

use std::time::Instant;

use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::ai::AiSuggestion;
use crate::sound::SoundEvent;
use crate::test_utils::test_helpers::{test_app, test_app_with_menu};

fn render_to_string(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_idle_stage_shows_title_placeholder_and_start() {
    let (app, _log) = test_app();
    let output = render_to_string(&app);

    assert!(output.contains(TITLE));
    assert!(output.contains(SUBTITLE));
    assert!(output.contains("开 始"));
    assert!(output.contains(IDLE_STATUS));
    assert!(!output.contains(SPINNING_STATUS));
}

#[test]
fn test_spinning_stage_shows_stop_and_status() {
    let (mut app, _log) = test_app();
    app.toggle_spin(Instant::now());

    let output = render_to_string(&app);

    assert!(output.contains("停 止"));
    assert!(output.contains(SPINNING_STATUS));
}

#[test]
fn test_selected_dish_is_on_stage() {
    let (mut app, _log) = test_app_with_menu(r#"["螺蛳粉"]"#);
    let start = Instant::now();
    app.toggle_spin(start);
    app.on_frame(start + crate::spin::SPIN_PERIOD);
    app.toggle_spin(start + crate::spin::SPIN_PERIOD);

    let output = render_to_string(&app);

    assert!(output.contains("螺蛳粉"));
    assert!(output.contains("开 始"));
}

#[test]
fn test_footer_text_has_year() {
    assert_eq!(footer_text(2025), "© 2025 今天吃啥呀 • 吃饱了才有力气减肥");
}

#[test]
fn test_footer_is_rendered() {
    let (app, _log) = test_app();
    let output = render_to_string(&app);
    assert!(output.contains("吃饱了才有力气减肥"));
}

#[test]
fn test_muted_indicator() {
    let (mut app, _log) = test_app();
    let output = render_to_string(&app);
    assert!(!output.contains("🔇"));

    app.toggle_mute();
    let output = render_to_string(&app);
    assert!(output.contains("🔇 静音"));
}

fn header_row(app: &App) -> String {
    render_to_string(app).lines().next().unwrap_or_default().to_string()
}

#[test]
fn test_header_shows_tick_glyph_after_spin_frame() {
    let (mut app, _log) = test_app();
    let start = Instant::now();
    app.toggle_spin(start);
    let before = header_row(&app);
    assert!(!before.contains(event_glyph(SoundEvent::Tick)));

    app.on_frame(start + crate::spin::SPIN_PERIOD);
    let after = header_row(&app);

    assert_ne!(before, after);
    assert!(after.contains(event_glyph(SoundEvent::Tick)));
}

#[test]
fn test_header_shows_click_glyph_after_menu_change() {
    let (mut app, _log) = test_app();
    let before = header_row(&app);

    assert!(app.add_item("肠粉"));
    let after = header_row(&app);

    assert_ne!(before, after);
    assert!(after.contains(event_glyph(SoundEvent::Click)));
}

#[test]
fn test_header_shows_bell_after_spin_stops() {
    let (mut app, _log) = test_app();
    let start = Instant::now();
    app.toggle_spin(start);
    app.on_frame(start + crate::spin::SPIN_PERIOD);
    app.toggle_spin(start + crate::spin::SPIN_PERIOD);

    assert!(header_row(&app).contains(event_glyph(SoundEvent::Completion)));
}

#[test]
fn test_header_hides_event_glyph_while_muted() {
    let (mut app, _log) = test_app();
    app.add_item("肠粉");
    app.toggle_mute();

    let header = header_row(&app);
    assert!(header.contains("🔇"));
    assert!(!header.contains(event_glyph(SoundEvent::Click)));
}

#[test]
fn test_active_counts_in_status() {
    let (app, _log) = test_app_with_menu(
        r#"[{"id":"a","name":"火锅","active":true},{"id":"b","name":"烧烤","active":false}]"#,
    );
    let output = render_to_string(&app);
    assert!(output.contains("已启用 1 / 2"));
}

#[test]
fn test_menu_editor_popup_is_drawn() {
    let (mut app, _log) = test_app();
    app.open_menu_editor();

    let output = render_to_string(&app);
    assert!(output.contains("菜单设置"));
}

#[test]
fn test_ai_panel_is_drawn() {
    let (mut app, _log) = test_app();
    app.open_ai_panel();
    app.ai.suggestion = Some(AiSuggestion {
        name: "煲仔饭".to_string(),
        reason: "锅巴香".to_string(),
    });

    let output = render_to_string(&app);
    assert!(output.contains("煲仔饭"));
    assert!(output.contains("就吃这个"));
}

#[test]
fn test_warning_toast_is_drawn_over_editor() {
    let (mut app, _log) = test_app_with_menu(r#"[{"id":"a","name":"火锅","active":false}]"#);
    app.toggle_spin(Instant::now());

    let output = render_to_string(&app);
    assert!(output.contains(crate::app::NO_ACTIVE_WARNING));
    assert!(output.contains("菜单设置"));
}
