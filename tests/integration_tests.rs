use std::time::Duration;

use edutrack::chat::responder::SCHOLARSHIP_RESPONSE;
use edutrack::chat::{ChatPhase, Sender};
use edutrack::event::{AppEvent, Event, EventHandler};
use edutrack::navigation::Section;
use edutrack::router::View;
use edutrack::{App, AppConfig, Role, Screen};
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use tokio::time::Instant;

fn app() -> App {
    App::with_events(AppConfig::default(), EventHandler::detached())
}

fn press(app: &mut App, code: KeyCode) {
    let event = Event::Crossterm(CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    app.handle_event(event).unwrap();
}

fn press_ctrl(app: &mut App, ch: char) {
    let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
    app.handle_event(Event::Crossterm(CrosstermEvent::Key(key))).unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Pump the next queued or delayed event through the app.
async fn pump(app: &mut App) -> Event {
    let event = app.events.next().await.unwrap();
    app.handle_event(event.clone()).unwrap();
    event
}

fn screen_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(&mut *app, frame.area()))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_demo_login_reaches_dashboard_after_delay() {
    let mut app = app();
    assert_eq!(app.screen, Screen::Login);

    // email -> password -> role
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press_ctrl(&mut app, 'd');

    let start = Instant::now();
    press(&mut app, KeyCode::Enter);
    assert!(app.login.is_signing_in());
    assert_eq!(app.screen, Screen::Login);

    let event = pump(&mut app).await;
    assert!(matches!(event, Event::App(AppEvent::SignInComplete(Role::Teacher))));
    assert!(start.elapsed() >= Duration::from_millis(1500));

    let nav = app.navigation().expect("dashboard after sign in");
    assert_eq!(nav.role(), Role::Teacher);
    assert_eq!(nav.section(), &Section::Dashboard);
    assert!(!app.login.is_signing_in());
}

#[tokio::test]
async fn test_empty_login_form_does_not_submit() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert!(!app.login.is_signing_in());
    assert!(app.events.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_chat_reply_arrives_after_thinking_delay() {
    let mut app = app();
    app.enter_dashboard(Role::Student);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.chat_open && app.chat_focused);

    type_text(&mut app, "Any scholarship for me?");
    let start = Instant::now();
    press(&mut app, KeyCode::Enter);

    assert!(app.chat.input.is_empty());
    assert_eq!(app.chat.state.phase, ChatPhase::BotComposing);
    assert!(screen_text(&mut app).contains("Assistant is typing..."));

    pump(&mut app).await;
    assert!(start.elapsed() >= Duration::from_millis(1000));

    let messages = &app.chat.state.messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "Any scholarship for me?");
    assert_eq!(messages[2].sender, Sender::Bot);
    assert_eq!(messages[2].content, SCHOLARSHIP_RESPONSE);
    assert_eq!(app.chat.state.phase, ChatPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_logout_drops_reply_from_previous_session() {
    let mut app = app();
    app.enter_dashboard(Role::Student);
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "attendance");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('s'));
    assert!(matches!(pump(&mut app).await, Event::App(AppEvent::Logout)));
    assert_eq!(app.screen, Screen::Login);
    assert!(!app.chat_open);

    // the stale reply still fires, and is ignored
    assert!(matches!(pump(&mut app).await, Event::App(AppEvent::ChatReply { session: 0, .. })));
    assert_eq!(app.chat.state.messages.len(), 1);
    assert!(!app.chat.is_composing());
}

#[tokio::test]
async fn test_sections_outside_allow_list_fall_back() {
    let mut app = app();
    app.enter_dashboard(Role::Student);

    // Attendance is a sidebar item but has no dedicated view
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.navigation().unwrap().section(), &Section::Attendance);
    assert_eq!(app.current_view(), Some(View::Dashboard));

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_view(), Some(View::Schemes));
}

#[tokio::test]
async fn test_assistant_section_takes_keyboard_focus() {
    let mut app = app();
    app.enter_dashboard(Role::Government);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view(), Some(View::Chat));
    assert!(app.chat_focused);
    assert!(!app.chat_open);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.chat.input, "Show me scholarship opportunities");
    press_ctrl(&mut app, 'l');
    assert_eq!(app.chat.language.code(), "hi");
    assert!(screen_text(&mut app).contains("Ctrl-L"));
}

#[tokio::test]
async fn test_dashboard_header_and_sidebar_render() {
    let mut app = app();
    app.enter_dashboard(Role::SchoolAdmin);

    let text = screen_text(&mut app);
    assert!(text.contains("School Administrator Dashboard"));
    assert!(text.contains("Welcome back, Dr. Michael Brown"));
    assert!(text.contains("RFID Online"));
    assert!(text.contains("Staff Management"));
    assert!(text.contains("1,250"));
}

#[tokio::test]
async fn test_skip_login_lands_on_role_selector() {
    let config = AppConfig { skip_login: true, ..AppConfig::default() };
    let mut app = App::with_events(config, EventHandler::detached());
    assert!(matches!(app.screen, Screen::RoleSelect { .. }));
    assert!(screen_text(&mut app).contains("Select your role"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.navigation().map(|n| n.role()), Some(Role::Teacher));
}
