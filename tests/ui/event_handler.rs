use taskpad::ui::core::EventHandler;
use tokio::time::Duration;

#[tokio::test]
async fn test_render_gating() {
    let mut event_handler = EventHandler::new(Duration::from_millis(100));

    // The very first frame is never throttled
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());

    // After the frame interval has passed, rendering is allowed again
    tokio::time::sleep(Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
}

#[test]
fn test_default_event_handler() {
    let event_handler = EventHandler::default();
    assert!(event_handler.time_since_last_render() >= Duration::from_millis(0));
}
