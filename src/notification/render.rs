use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::widgets::popup;

/// Draw the current toast centered near the top of the frame
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let width = (notification.message.width() as u16 + 4).min(frame_area.width);
    let height = 3u16.min(frame_area.height);
    if width < 5 || height < 3 {
        return;
    }

    let area = Rect {
        x: frame_area.x + (frame_area.width - width) / 2,
        y: frame_area.y + 1u16.min(frame_area.height - height),
        width,
        height,
    };
    popup::clear_area(frame, area);

    let color = notification.level.color();
    let toast = Paragraph::new(notification.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(toast, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(state: &NotificationState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_notification(f, state))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_renders_message() {
        let mut state = NotificationState::new();
        state.warn("没有选中的菜品哦，请在菜单中启用一些！", Instant::now());

        let output = render(&state, 80, 10);
        assert!(output.contains("没有选中的菜品哦，请在菜单中启用一些！"));
    }

    #[test]
    fn test_renders_nothing_without_toast() {
        let state = NotificationState::new();
        let output = render(&state, 40, 5);
        assert!(!output.contains('─'));
    }

    #[test]
    fn test_long_message_is_clamped_to_frame() {
        let mut state = NotificationState::new();
        state.info("x".repeat(200), Instant::now());

        let output = render(&state, 30, 5);
        assert!(output.contains("xxxx"));
    }
}
