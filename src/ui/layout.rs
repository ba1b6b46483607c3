//! Layout management and calculations

use ratatui::layout::{Constraint, Layout, Rect};

use crate::constants::{DRAFT_INPUT_HEIGHT, HEADER_HEIGHT, STATUS_BAR_HEIGHT};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (header, add input, task list, status bar)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(DRAFT_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area)
        .to_vec()
    }

    /// Calculate a centered rectangle taking the given percentages of the area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let row = Layout::vertical([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r)[1];

        Layout::horizontal([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(row)[1]
    }

    /// Overlay panel percentages; small terminals get a bigger share so the
    /// content stays readable
    #[must_use]
    pub fn overlay_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 70 } else { 80 };
        let height = if screen_height < 40 { 60 } else { 70 };
        (width, height)
    }
}
