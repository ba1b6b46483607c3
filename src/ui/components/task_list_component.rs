use crate::config::DisplayConfig;
use crate::constants::{PLACEHOLDER_EMPTY_LIST, TITLE_TASKS};
use crate::icons::IconService;
use crate::tasks::{EditSession, Task, TaskAction};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub edit: Option<EditSession>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub edit_cursor: usize,
    pub icons: IconService,
    pub display_config: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            edit: None,
            selected_index: 0,
            list_state: ListState::default(),
            edit_cursor: 0,
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, edit: Option<EditSession>) {
        // The edit cursor jumps to the end of the draft whenever a session
        // starts or moves to another row, and is clamped otherwise
        let session_changed = match (&self.edit, &edit) {
            (None, Some(_)) => true,
            (Some(old), Some(new)) => old.index != new.index,
            _ => false,
        };

        self.tasks = tasks;
        self.edit = edit;

        if let Some(session) = &self.edit {
            let char_count = session.draft.chars().count();
            if session_changed || self.edit_cursor > char_count {
                self.edit_cursor = char_count;
            }
            // Keep the selection on the row being edited
            self.selected_index = session.index;
        }

        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Handle a key while an edit session is active: cursor movement and
    /// text edits stay local, Enter and Esc resolve the session.
    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        let Some(session) = self.edit.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc => Action::Task(TaskAction::CancelEdit),
            KeyCode::Enter => Action::Task(TaskAction::SaveEdit),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_pos: usize = session
                    .draft
                    .chars()
                    .take(self.edit_cursor)
                    .map(|ch| ch.len_utf8())
                    .sum();
                session.draft.insert(byte_pos, c);
                self.edit_cursor += 1;
                Action::Task(TaskAction::SetEditDraft(session.draft.clone()))
            }
            KeyCode::Backspace => {
                if self.edit_cursor > 0 {
                    let byte_pos: usize = session
                        .draft
                        .chars()
                        .take(self.edit_cursor)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    let prev_char_len = session
                        .draft
                        .chars()
                        .nth(self.edit_cursor - 1)
                        .map(|ch| ch.len_utf8())
                        .unwrap_or(1);
                    session.draft.remove(byte_pos - prev_char_len);
                    self.edit_cursor -= 1;
                    return Action::Task(TaskAction::SetEditDraft(session.draft.clone()));
                }
                Action::None
            }
            KeyCode::Delete => {
                let char_count = session.draft.chars().count();
                if self.edit_cursor < char_count {
                    let byte_pos: usize = session
                        .draft
                        .chars()
                        .take(self.edit_cursor)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    session.draft.remove(byte_pos);
                    return Action::Task(TaskAction::SetEditDraft(session.draft.clone()));
                }
                Action::None
            }
            KeyCode::Left => {
                if self.edit_cursor > 0 {
                    self.edit_cursor -= 1;
                }
                Action::None
            }
            KeyCode::Right => {
                let char_count = session.draft.chars().count();
                if self.edit_cursor < char_count {
                    self.edit_cursor += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.edit_cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.edit_cursor = session.draft.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn create_task_list_items(&self) -> Vec<ListItem<'static>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| self.create_task_item(task, index))
            .collect()
    }

    fn create_task_item(&self, task: &Task, index: usize) -> ListItem<'static> {
        // Build the line with multiple spans for proper color rendering
        let mut line_spans = Vec::new();

        // Status icon
        let status_icon = if task.is_completed {
            self.icons.task_completed()
        } else {
            self.icons.task_pending()
        };
        let status_style = if task.is_completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(format!("{} ", status_icon), status_style));

        // A row under edit shows the uncommitted draft with a visual cursor
        // instead of the saved text
        if let Some(session) = self.edit.as_ref().filter(|session| session.index == index) {
            line_spans.push(Span::styled(
                format!("{}█", session.draft),
                Style::default().fg(Color::Yellow),
            ));
            return ListItem::new(Line::from(line_spans));
        }

        // Task content with appropriate styling
        let content_style = if task.is_completed {
            let mut style = Style::default().fg(Color::Green);
            if self.display_config.strike_completed {
                style = style.add_modifier(Modifier::CROSSED_OUT);
            }
            if self.display_config.dim_completed {
                style = style.add_modifier(Modifier::DIM);
            }
            style
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(task.text.clone(), content_style));

        // Selection highlighting handled by the stateful widget
        ListItem::new(Line::from(line_spans))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.edit.is_some() {
            return self.handle_edit_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.get_selected_task().is_some() {
                    Action::Task(TaskAction::ToggleComplete(self.selected_index))
                } else {
                    Action::None
                }
            }
            KeyCode::Char('e') => {
                if self.get_selected_task().is_some() {
                    Action::Task(TaskAction::StartEdit(self.selected_index))
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if self.get_selected_task().is_some() {
                    Action::Task(TaskAction::DeleteTask(self.selected_index))
                } else {
                    Action::None
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') => Action::FocusDraft,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} {} ", self.icons.tasks_title(), TITLE_TASKS);

        if self.tasks.is_empty() {
            // Show empty state message
            let empty_list = List::new(vec![ListItem::new(PLACEHOLDER_EMPTY_LIST)])
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items = self.create_task_list_items();
            let mut list_state = self.list_state.clone();

            let tasks_list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                );

            f.render_stateful_widget(tasks_list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }
}
