use crate::config::{Config, DisplayConfig};
use crate::constants::APP_TITLE;
use crate::icons::IconService;
use crate::tasks::{TaskListState, TaskStore};
use crate::ui::components::{DialogComponent, DraftInputComponent, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::watch;

pub struct AppComponent {
    // Component composition
    draft_input: DraftInputComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Domain state
    store: TaskStore,
    state_rx: watch::Receiver<TaskListState>,

    // Shared services
    icons: IconService,
    display_config: DisplayConfig,

    // Simple UI state
    focus: Focus,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let store = TaskStore::new();
        let state_rx = store.subscribe();

        let mut draft_input = DraftInputComponent::new();
        draft_input.icons = icons.clone();

        let mut task_list = TaskListComponent::new();
        task_list.icons = icons.clone();
        task_list.update_display_config(config.display.clone());

        let mut dialog = DialogComponent::new();
        dialog.icons = icons.clone();

        let mut app = Self {
            draft_input,
            task_list,
            dialog,
            store,
            state_rx,
            icons,
            display_config: config.display.clone(),
            focus: Focus::default(),
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Check if an inline edit session is active
    pub fn is_editing(&self) -> bool {
        self.task_list.is_editing()
    }

    /// Check if a dialog is currently shown
    pub fn dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn show_hints(&self) -> bool {
        self.display_config.show_hints
    }

    /// Get total number of tasks
    pub fn total_tasks(&self) -> usize {
        self.store.state().tasks.len()
    }

    /// Get number of completed tasks
    pub fn completed_tasks(&self) -> usize {
        self.store.state().completed_count()
    }

    /// Update all components with the latest list snapshot
    fn sync_component_data(&mut self) {
        let state = self.state_rx.borrow_and_update().clone();

        // Update draft input
        self.draft_input.update_data(state.draft);

        // Update task list
        self.task_list.update_data(state.tasks, state.edit);
    }

    /// True when the store has published a snapshot this component has not seen yet
    pub fn state_changed(&mut self) -> bool {
        self.state_rx.has_changed().unwrap_or(false)
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                debug!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                debug!("Global key: '?' or 'h' - opening help dialog");
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                debug!("Global key: 'G' - opening logs dialog");
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('t') => {
                debug!("Global key: 't' - cycling icon theme");
                Action::CycleIconTheme
            }
            KeyCode::Esc => {
                debug!("Global key: Esc - quitting application");
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Task(task_action) => {
                // The store logs every dispatch outcome itself
                self.store.dispatch(task_action);
                Action::None
            }
            Action::FocusDraft => {
                debug!("Focus: Moving focus to the draft input");
                self.focus = Focus::DraftInput;
                self.draft_input.on_focus();
                Action::None
            }
            Action::FocusTasks => {
                debug!("Focus: Moving focus back to the task list");
                self.focus = Focus::TaskList;
                self.draft_input.on_blur();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                info!("Theme: Switched icon theme to {:?}", self.icons.theme());
                self.apply_icon_theme();
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Push the active icon set into every component
    fn apply_icon_theme(&mut self) {
        self.draft_input.icons = self.icons.clone();
        self.task_list.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                // Route keyboard events to components or handle globally
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let component_action = match self.focus {
                        Focus::DraftInput => self.draft_input.handle_key_events(key),
                        Focus::TaskList => self.task_list.handle_key_events(key),
                    };

                    if !matches!(component_action, Action::None) {
                        component_action
                    } else {
                        // Finally try global keys
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) => {
                // Handle terminal resize
                Action::None
            }
            EventType::Tick => {
                // Periodic updates
                Action::None
            }
            EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.dialog.update(action);
        let action = self.task_list.update(action);

        // Handle app-level actions
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }

    /// Render the one-line application header
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                format!(" {}", APP_TITLE),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} tasks", self.total_tasks()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(header), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Create layout: header | draft input | task list | status bar
        let chunks = LayoutManager::main_layout(rect);

        // Render components
        self.render_header(f, chunks[0]);
        self.draft_input.render(f, chunks[1]);
        self.task_list.render(f, chunks[2]);
        StatusBar::render(f, chunks[3], self);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
