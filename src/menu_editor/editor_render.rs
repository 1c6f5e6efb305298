use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{EditorFocus, EditorMode};
use crate::app::App;
use crate::widgets::popup;

pub const EDITOR_POPUP_WIDTH: u16 = 64;
pub const EDITOR_POPUP_HEIGHT: u16 = 24;
pub const EMPTY_MENU_TEXT: &str = "菜单空空如也，快去添加点好吃的吧！";
pub const RESET_CONFIRM_TEXT: &str = "确定要重置菜单到默认状态吗？";

const ACCENT: Color = Color::LightRed;

pub fn render_popup(app: &App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let popup_area = popup::centered_popup(frame_area, EDITOR_POPUP_WIDTH, EDITOR_POPUP_HEIGHT);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 菜单设置 ")
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    match app.editor.mode() {
        EditorMode::Tags => render_tags(app, frame, inner),
        EditorMode::Bulk => render_bulk(app, frame, inner),
    }

    if app.editor.is_confirming_reset() {
        render_reset_confirm(frame, popup_area);
    }
}

fn render_tags(app: &App, frame: &mut Frame, area: Rect) {
    let [input_area, summary_area, list_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(app.editor.input(), input_area);

    let summary = Line::from(vec![
        Span::styled(
            format!("共 {} 道，已启用 {} 道", app.menu.len(), app.menu.active_count()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            "  · 空格可暂时屏蔽，不参与随机",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary), summary_area);

    if app.menu.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("🍽️"),
            Line::from(EMPTY_MENU_TEXT),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
    } else {
        render_item_list(app, frame, list_area);
    }

    let hints = if app.ai.generating {
        vec![Line::from(Span::styled(
            "AI 正在想新菜...",
            Style::default().fg(Color::Magenta),
        ))]
    } else {
        vec![
            key_hints(&[
                ("Tab", "切换"),
                ("Enter", "添加/启用"),
                ("Space", "屏蔽"),
                ("d", "删除"),
            ]),
            key_hints(&[
                ("r", "重置默认"),
                ("b", "批量编辑"),
                ("g", "AI 加菜"),
                ("Esc", "关闭"),
            ]),
        ]
    };
    frame.render_widget(Paragraph::new(hints), hint_area);
}

fn render_item_list(app: &App, frame: &mut Frame, area: Rect) {
    let list_focused = app.editor.focus() == EditorFocus::List;
    let max_name_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .menu
        .items()
        .iter()
        .map(|item| {
            let name = popup::truncate_to_width(&item.name, max_name_width);
            let line = if item.active {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Green)),
                    Span::styled(name, Style::default().fg(Color::White)),
                ])
            } else {
                Line::from(vec![
                    Span::styled("○ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        name,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let highlight = if list_focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(app.editor.selected_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_bulk(app: &App, frame: &mut Frame, area: Rect) {
    let [text_area, hint_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    frame.render_widget(app.editor.bulk(), text_area);
    frame.render_widget(
        Paragraph::new(key_hints(&[("Esc / Ctrl+S", "保存并返回")])),
        hint_area,
    );
}

fn render_reset_confirm(frame: &mut Frame, over: Rect) {
    let area = popup::centered_popup(over, 36, 5);
    popup::clear_area(frame, area);

    let dialog = Paragraph::new(vec![
        Line::from(RESET_CONFIRM_TEXT),
        Line::from(""),
        key_hints(&[("y", "确定"), ("n", "取消")]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 重置默认 ")
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(dialog, area);
}

fn key_hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "editor_render_tests.rs"]
mod editor_render_tests;
