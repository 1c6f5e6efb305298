use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Tag list or free-text bulk editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Tags,
    Bulk,
}

/// Which part of the tags view receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Input,
    List,
}

pub struct MenuEditorState {
    visible: bool,
    mode: EditorMode,
    focus: EditorFocus,
    input: TextArea<'static>,
    bulk: TextArea<'static>,
    selected_index: usize,
    confirm_reset: bool,
}

impl Default for MenuEditorState {
    fn default() -> Self {
        Self::new()
    }
}

fn name_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 添加 ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("输入菜名，回车添加...");
    textarea
}

fn bulk_input(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 直接编辑菜单列表（用空格或逗号分隔）： ")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("例如：红烧肉 盖浇饭 面条...");
    textarea.insert_str(text);
    textarea
}

impl MenuEditorState {
    pub fn new() -> Self {
        Self {
            visible: false,
            mode: EditorMode::Tags,
            focus: EditorFocus::Input,
            input: name_input(),
            bulk: bulk_input(""),
            selected_index: 0,
            confirm_reset: false,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.mode = EditorMode::Tags;
        self.focus = EditorFocus::Input;
        self.confirm_reset = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.confirm_reset = false;
        self.input = name_input();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: EditorFocus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Input => EditorFocus::List,
            EditorFocus::List => EditorFocus::Input,
        };
    }

    pub fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.input
    }

    /// Trimmed text of the add-item line
    pub fn input_text(&self) -> String {
        self.input.lines().join("").trim().to_string()
    }

    pub fn clear_input(&mut self) {
        self.input = name_input();
    }

    /// Switch to bulk mode with `names` joined by a space
    pub fn enter_bulk(&mut self, names: &[String]) {
        self.bulk = bulk_input(&names.join(" "));
        self.mode = EditorMode::Bulk;
    }

    /// Back to the tag list. Returns the bulk text to save.
    pub fn leave_bulk(&mut self) -> String {
        self.mode = EditorMode::Tags;
        self.bulk_text()
    }

    pub fn bulk(&self) -> &TextArea<'static> {
        &self.bulk
    }

    pub fn bulk_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.bulk
    }

    pub fn bulk_text(&self) -> String {
        self.bulk.lines().join("\n")
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection inside a list of `len` items
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn is_confirming_reset(&self) -> bool {
        self.confirm_reset
    }

    pub fn ask_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn dismiss_reset(&mut self) {
        self.confirm_reset = false;
    }
}

#[cfg(test)]
#[path = "editor_state_tests.rs"]
mod editor_state_tests;
