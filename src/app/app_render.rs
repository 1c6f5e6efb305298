use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::sound::SoundEvent;
use crate::widgets::popup;

pub const TITLE: &str = "今天吃啥呀";
pub const SUBTITLE: &str = "解决你的选择困难症";
pub const SPINNING_STATUS: &str = "快速翻动中...";
pub const IDLE_STATUS: &str = "按下空格键也可以开始/停止";

const ACCENT: Color = Color::LightRed;
const INDICATOR_WIDTH: u16 = 12;

/// Header glyph for the most recent sound cue
pub fn event_glyph(event: SoundEvent) -> &'static str {
    match event {
        SoundEvent::Click => "♩",
        SoundEvent::Tick => "♫",
        SoundEvent::Completion => "🔔",
    }
}

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let [header_area, stage_area, status_area, footer_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        self.render_stage(frame, stage_area);
        self.render_status(frame, status_area);
        render_footer(frame, footer_area, chrono::Local::now().year());
        render_help_line(frame, help_area);

        if self.editor.is_visible() {
            crate::menu_editor::editor_render::render_popup(self, frame);
        } else if self.ai.visible {
            crate::ai::ai_render::render_popup(&self.ai, frame);
        }

        render_notification(frame, &self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut indicator = if self.sound.is_muted() {
            vec![Span::styled("🔇 静音", Style::default().fg(Color::DarkGray))]
        } else if self.sound.ambience_playing() {
            vec![Span::styled("🔊 ♪", Style::default().fg(Color::Green))]
        } else {
            vec![Span::styled("🔊", Style::default().fg(Color::Gray))]
        };
        let last_event = self.sound.last_event().filter(|_| !self.sound.is_muted());
        if let Some(event) = last_event {
            indicator.push(Span::raw(" "));
            indicator.push(Span::styled(
                event_glyph(event),
                Style::default().fg(Color::Yellow),
            ));
        }

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);

        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(INDICATOR_WIDTH),
            y: area.y,
            width: area.width.min(INDICATOR_WIDTH),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(indicator)).alignment(Alignment::Right),
            indicator_area,
        );
    }

    fn render_stage(&self, frame: &mut Frame, area: Rect) {
        let stage = popup::inset_rect(area, 2, 0);
        let spinning = self.engine.is_spinning();
        let border_color = if spinning { ACCENT } else { Color::Yellow };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(stage);
        frame.render_widget(block, stage);

        let [_, selection_area, _, button_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let selection = popup::truncate_to_width(
            self.engine.current_selection(),
            inner.width as usize,
        );
        let selection_style = if spinning {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(selection, selection_style)))
                .alignment(Alignment::Center),
            selection_area,
        );

        let button = if spinning {
            Span::styled(
                "[ 停 止 ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                "[ 开 始 ]",
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(
            Paragraph::new(Line::from(button)).alignment(Alignment::Center),
            button_area,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.engine.is_spinning() {
            (SPINNING_STATUS, Style::default().fg(ACCENT))
        } else {
            (IDLE_STATUS, Style::default().fg(Color::DarkGray))
        };
        let status = format!(
            "{}    已启用 {} / {}",
            text,
            self.menu.active_count(),
            self.menu.len()
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(status, style))).alignment(Alignment::Center),
            area,
        );
    }
}

pub fn footer_text(year: i32) -> String {
    format!("© {} {} • 吃饱了才有力气减肥", year, TITLE)
}

fn render_footer(frame: &mut Frame, area: Rect, year: i32) {
    frame.render_widget(
        Paragraph::new(footer_text(year))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc)) in [
        ("Space", "开始/停止"),
        ("s", "菜单"),
        ("a", "AI 参谋"),
        ("m", "静音"),
        ("q", "退出"),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
