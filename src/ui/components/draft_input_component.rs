//! Add-input component: the always-visible bar for new tasks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::{PLACEHOLDER_DRAFT_INPUT, TITLE_NEW_TASK};
use crate::icons::IconService;
use crate::tasks::TaskAction;
use crate::ui::core::{actions::Action, Component};

/// Input bar for adding tasks.
///
/// The component owns the cursor and edits a local copy of the draft,
/// emitting a `SetDraft` action for every change; the store remains the
/// source of truth and re-seeds the component after each applied action.
/// Clearing on submit happens in the store, not here.
pub struct DraftInputComponent {
    pub draft: String,
    pub cursor_position: usize,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for DraftInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftInputComponent {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            cursor_position: 0,
            focused: false,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, draft: String) {
        if self.draft != draft {
            self.draft = draft;
            // Clamp after external changes, e.g. the store clearing the draft
            let char_count = self.draft.chars().count();
            if self.cursor_position > char_count {
                self.cursor_position = char_count;
            }
        }
    }

    fn byte_position(&self) -> usize {
        self.draft
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }
}

impl Component for DraftInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::FocusTasks,
            KeyCode::Enter => Action::Task(TaskAction::AddTask),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_pos = self.byte_position();
                self.draft.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::Task(TaskAction::SetDraft(self.draft.clone()))
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_position();
                    let prev_char_len = self
                        .draft
                        .chars()
                        .nth(self.cursor_position - 1)
                        .map(|ch| ch.len_utf8())
                        .unwrap_or(1);
                    self.draft.remove(byte_pos - prev_char_len);
                    self.cursor_position -= 1;
                    return Action::Task(TaskAction::SetDraft(self.draft.clone()));
                }
                Action::None
            }
            KeyCode::Delete => {
                let char_count = self.draft.chars().count();
                if self.cursor_position < char_count {
                    let byte_pos = self.byte_position();
                    self.draft.remove(byte_pos);
                    return Action::Task(TaskAction::SetDraft(self.draft.clone()));
                }
                Action::None
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                Action::None
            }
            KeyCode::Right => {
                let char_count = self.draft.chars().count();
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.draft.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} {} ", self.icons.input_title(), TITLE_NEW_TASK);
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White))
            .style(border_style);

        let input_paragraph = if self.focused {
            // Visual cursor, same block character as the modal inputs
            let cursor_char = "█";
            let input_display = format!("{}{}", self.draft, cursor_char);
            Paragraph::new(input_display)
                .block(input_block)
                .style(Style::default().fg(Color::White))
        } else if self.draft.is_empty() {
            Paragraph::new(PLACEHOLDER_DRAFT_INPUT)
                .block(input_block)
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.draft.clone())
                .block(input_block)
                .style(Style::default().fg(Color::White))
        };

        f.render_widget(input_paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.cursor_position = self.draft.chars().count();
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
