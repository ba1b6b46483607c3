//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{HINTS_DIALOG, HINTS_DRAFT_INPUT, HINTS_EDITING, HINTS_TASK_LIST};
use crate::ui::app_component::AppComponent;
use crate::ui::core::Focus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &AppComponent) {
        let status_text = if app.dialog_visible() {
            HINTS_DIALOG.to_string()
        } else if app.is_editing() {
            HINTS_EDITING.to_string()
        } else if app.focus() == Focus::DraftInput {
            HINTS_DRAFT_INPUT.to_string()
        } else if app.show_hints() {
            HINTS_TASK_LIST.to_string()
        } else {
            format!("{} tasks • {} done", app.total_tasks(), app.completed_tasks())
        };

        let status_color = if app.is_editing() {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
