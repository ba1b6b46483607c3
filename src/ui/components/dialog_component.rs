//! Modal overlay component for the help panel and the in-app logs view.
//!
//! Both overlays are read-only, rendered on top of the main layout with a
//! scrollable paragraph. Opening one routes every key here until it is
//! dismissed.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    // Scrolling support for long content
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = self.scrollbar_state.position(0);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX;
        self.scrollbar_state = self.scrollbar_state.position(usize::MAX);
    }

    fn render_help_dialog(&mut self, f: &mut Frame, area: Rect) {
        let help_content = r"
TASKPAD - Terminal Todo List
============================

NAVIGATION
----------
j/k         Navigate tasks (down/up)
Up/Down     Navigate tasks
Esc         Leave the input, cancel an edit, or quit

TASK MANAGEMENT
---------------
a / i       Focus the add input
Enter       Add the typed task (while in the input)
Space       Toggle task completion
e           Edit the selected task inline
Enter       Save the edit (while editing)
Esc         Discard the edit (while editing)
d           Delete the selected task

GENERAL CONTROLS
----------------
?           Toggle help panel
h           Toggle help panel
G           Show application logs
t           Change icon theme
q           Quit application
Ctrl+C      Quit application

HELP PANEL SCROLLING
--------------------
j/k         Scroll help content down/up
PageUp/Down Page through help content
Home        Jump to top of help
End         Jump to bottom of help

TASK STATUS INDICATORS
----------------------
[ ]         Pending task
[X]         Completed task (struck through)

Press 'Esc', '?' or 'h' to close this help panel
";

        let title = format!("{} {}", self.icons.help(), DIALOG_TITLE_HELP);
        self.render_scrolled_overlay(f, area, &title, help_content);
    }

    fn render_logs_dialog(&mut self, f: &mut Frame, area: Rect) {
        let entries = logger::buffer().entries();
        let logs_content = if entries.is_empty() {
            "No logs recorded yet".to_string()
        } else {
            entries.join("\n")
        };

        let title = format!("{} {}", self.icons.logs(), DIALOG_TITLE_LOGS);
        self.render_scrolled_overlay(f, area, &title, &logs_content);
    }

    /// Render a centered overlay with a scrollable paragraph and, when the
    /// content overflows, a scrollbar
    fn render_scrolled_overlay(&mut self, f: &mut Frame, area: Rect, title: &str, content: &str) {
        let (overlay_width, overlay_height) = LayoutManager::overlay_dimensions(area.width, area.height);
        let overlay_area = LayoutManager::centered_rect(overlay_width, overlay_height, area);
        f.render_widget(Clear, overlay_area);

        let lines: Vec<&str> = content.lines().collect();
        let total_lines = lines.len();
        let visible_height = overlay_area.height.saturating_sub(2) as usize;

        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        let visible_lines: Vec<&str> = lines
            .iter()
            .skip(clamped_offset)
            .take(visible_height)
            .copied()
            .collect();

        let overlay_paragraph = Paragraph::new(visible_lines.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(overlay_paragraph, overlay_area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray))
                .thumb_style(Style::default().fg(Color::White));

            f.render_stateful_widget(scrollbar, overlay_area, &mut self.scrollbar_state);
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                    Action::None
                }
                KeyCode::PageUp => {
                    self.page_up();
                    Action::None
                }
                KeyCode::PageDown => {
                    self.page_down();
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_to_top();
                    Action::None
                }
                KeyCode::End => {
                    self.scroll_to_bottom();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                    Action::None
                }
                KeyCode::PageUp => {
                    self.page_up();
                    Action::None
                }
                KeyCode::PageDown => {
                    self.page_down();
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_to_top();
                    Action::None
                }
                KeyCode::End => {
                    self.scroll_to_bottom();
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => self.render_help_dialog(f, rect),
            Some(DialogType::Logs) => self.render_logs_dialog(f, rect),
            None => {}
        }
    }
}
