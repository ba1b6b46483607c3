//! Themeable glyphs for the TUI
//!
//! Every symbol the UI draws goes through [`IconService`], so the whole
//! interface can fall back to plain ASCII or dress up in emoji at runtime.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Hands out the glyphs of the active theme
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Checkbox of a task that is still open
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔳",
            IconTheme::Unicode => "□",
            IconTheme::Ascii => "[ ]",
        }
    }

    /// Checkbox of a completed task
    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "✅",
            IconTheme::Unicode => "✓",
            IconTheme::Ascii => "[X]",
        }
    }

    /// Marker in front of the task list title
    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📝",
            IconTheme::Unicode => "▶",
            IconTheme::Ascii => ">",
        }
    }

    /// Marker in front of the add-input title
    #[must_use]
    pub fn input_title(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "➕",
            IconTheme::Unicode => "+",
            IconTheme::Ascii => "+",
        }
    }

    #[must_use]
    pub fn help(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "💡",
            IconTheme::Unicode => "ⓘ",
            IconTheme::Ascii => "?",
        }
    }

    #[must_use]
    pub fn logs(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔍",
            IconTheme::Unicode => "≡",
            IconTheme::Ascii => "=",
        }
    }
}
