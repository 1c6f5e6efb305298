//! AI chef panel rendering
//!
//! A centered modal: preference input while asking, then the suggested dish
//! with its reason and the two follow-up choices.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ai_state::AiState;
use crate::widgets::popup;

pub const AI_POPUP_WIDTH: u16 = 60;
pub const AI_POPUP_HEIGHT: u16 = 16;

const ACCENT: Color = Color::Magenta;

/// Render the AI panel over the whole frame
pub fn render_popup(ai_state: &AiState, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let popup_area = popup::centered_popup(frame_area, AI_POPUP_WIDTH, AI_POPUP_HEIGHT);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI 智能参谋 ")
        .title_bottom(Line::from(" Esc 关闭 ").right_aligned())
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [subtitle_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

    let mut subtitle = vec![Line::from(Span::styled(
        "告诉 Gemini 你的口味，拯救选择困难",
        Style::default().fg(Color::Gray),
    ))];
    if !ai_state.configured {
        subtitle.push(Line::from(Span::styled(
            "未配置 API Key，将给出兜底建议",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(subtitle), subtitle_area);

    match &ai_state.suggestion {
        Some(suggestion) => render_suggestion(frame, body_area, &suggestion.name, &suggestion.reason),
        None => render_question(ai_state, frame, body_area),
    }
}

fn render_question(ai_state: &AiState, frame: &mut Frame, area: Rect) {
    let [input_area, _, button_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(&ai_state.preference, input_area);

    let button = if ai_state.loading {
        Span::styled(
            "✨ AI 正在分析味蕾...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "✨ 生成推荐 [Enter]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(button)).alignment(Alignment::Center),
        button_area,
    );
}

fn render_suggestion(frame: &mut Frame, area: Rect, name: &str, reason: &str) {
    let [header_area, reason_area, actions_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = vec![
        Line::from(Span::styled(
            "Gemini 的建议",
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        header_area,
    );

    frame.render_widget(
        Paragraph::new(format!("“{}”", reason))
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray))),
        reason_area,
    );

    let actions = Line::from(vec![
        Span::styled("[r] ", Style::default().fg(Color::Yellow)),
        Span::raw("再换一个    "),
        Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
        Span::styled("就吃这个 →", Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(
        Paragraph::new(actions).alignment(Alignment::Center),
        actions_area,
    );
}

#[cfg(test)]
#[path = "ai_render_tests.rs"]
mod ai_render_tests;
