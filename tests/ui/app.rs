use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskpad::config::Config;
use taskpad::ui::core::{actions::Focus, event_handler::EventType};
use taskpad::ui::AppComponent;

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::from(code))).unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Add a task through the input and return focus to the list.
fn add_task(app: &mut AppComponent, text: &str) {
    press(app, KeyCode::Char('a'));
    type_text(app, text);
    press(app, KeyCode::Enter);
    press(app, KeyCode::Esc);
}

#[test]
fn test_q_quits_from_the_list() {
    let mut app = AppComponent::new(&Config::default());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_while_typing() {
    let mut app = AppComponent::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "half a tas");

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    app.handle_event(EventType::Key(ctrl_c)).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_help_dialog_opens_and_closes() {
    let mut app = AppComponent::new(&Config::default());
    assert!(!app.dialog_visible());

    press(&mut app, KeyCode::Char('?'));
    assert!(app.dialog_visible());

    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog_visible());
    assert!(!app.should_quit(), "Esc inside a dialog only closes it");
}

#[test]
fn test_logs_dialog_closes_with_q() {
    let mut app = AppComponent::new(&Config::default());

    press(&mut app, KeyCode::Char('G'));
    assert!(app.dialog_visible());

    // 'q' closes the logs dialog instead of quitting
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.dialog_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_focus_moves_between_list_and_input() {
    let mut app = AppComponent::new(&Config::default());
    assert_eq!(app.focus(), Focus::TaskList);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.focus(), Focus::DraftInput);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::TaskList);
    assert!(!app.should_quit(), "Esc in the input only returns focus");
}

#[test]
fn test_typing_adds_a_task() {
    let mut app = AppComponent::new(&Config::default());

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.total_tasks(), 1);
    assert_eq!(app.completed_tasks(), 0);
    // Focus stays on the input so more tasks can be typed
    assert_eq!(app.focus(), Focus::DraftInput);
}

#[test]
fn test_enter_on_empty_input_adds_nothing() {
    let mut app = AppComponent::new(&Config::default());

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.total_tasks(), 0);
}

#[test]
fn test_space_toggles_the_selected_task() {
    let mut app = AppComponent::new(&Config::default());
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.completed_tasks(), 1);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.completed_tasks(), 0);
}

#[test]
fn test_d_deletes_the_selected_task() {
    let mut app = AppComponent::new(&Config::default());
    add_task(&mut app, "one");
    add_task(&mut app, "two");

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.total_tasks(), 1);
}

#[test]
fn test_edit_session_accessors() {
    let mut app = AppComponent::new(&Config::default());
    add_task(&mut app, "Buy milk");
    assert!(!app.is_editing());

    press(&mut app, KeyCode::Char('e'));
    assert!(app.is_editing());

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_editing());
    assert!(!app.should_quit(), "Esc while editing only cancels the edit");
}

#[test]
fn test_keys_in_input_are_text_not_commands() {
    let mut app = AppComponent::new(&Config::default());

    press(&mut app, KeyCode::Char('a'));
    // 'q' and '?' must be typed into the draft, not trigger globals
    type_text(&mut app, "q?");
    assert!(!app.should_quit());
    assert!(!app.dialog_visible());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.total_tasks(), 1);
}
