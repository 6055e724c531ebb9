use std::time::Duration;

use determined::config::AppConfig;
use determined::event::{AppEvent, EventHandler};
use determined::modules::quest::QuestRole;
use determined::util::database::Database;
use determined::view::View;
use determined::App;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;

fn test_app() -> App {
    let mut config = AppConfig::default();
    config.avatar.enabled = false;
    App::with_parts(config, Database::open_in_memory().unwrap(), EventHandler::detached(), None)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    app.drain_events().unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Block until the next queued event arrives and handle it.
async fn handle_next(app: &mut App) {
    let event = app.events.next().await.unwrap();
    app.handle_event(event).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_create_quest_lands_after_latency() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Run 5k");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "10");

    let start = Instant::now();
    press(&mut app, KeyCode::Enter);
    assert!(app.is_creating());

    tokio::time::sleep(Duration::from_millis(1499)).await;
    app.drain_events().unwrap();
    assert_eq!(app.state.quest.habit_name, "No Caffeine");

    handle_next(&mut app).await;
    assert!(start.elapsed() >= Duration::from_millis(1500));

    let quest = &app.state.quest;
    assert_eq!(quest.habit_name, "Run 5k");
    assert_eq!(quest.target_days, 10);
    assert_eq!(quest.bounty, 100.0);
    assert_eq!(quest.day(), 0);
    assert_eq!(quest.role, QuestRole::Owner);
    assert!(app.state.penalties.is_empty());
    assert!(!app.is_creating());
    assert_eq!(app.view, View::Quest);
    assert_eq!(app.form.goal_name, "");
    assert_eq!(app.status_message.as_deref(), Some("Quest started: Run 5k"));
}

#[tokio::test(start_paused = true)]
async fn test_double_submit_creates_once() {
    let mut app = test_app();
    app.switch_view(View::Create);
    type_text(&mut app, "Read");

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    handle_next(&mut app).await;
    assert_eq!(app.state.quest.habit_name, "Read");

    tokio::time::sleep(Duration::from_secs(5)).await;
    app.drain_events().unwrap();
    assert!(app.events.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_create_for_someone_else_makes_supporter() {
    let mut app = test_app();
    app.switch_view(View::Create);
    type_text(&mut app, "Gym");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "@jordan");

    press(&mut app, KeyCode::Enter);
    handle_next(&mut app).await;

    let quest = &app.state.quest;
    assert_eq!(quest.role, QuestRole::Supporter);
    assert_eq!(quest.target_user.as_deref(), Some("@jordan"));

    // Check-in is owner-only; the centre action opens the form instead.
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state.quest.day(), 0);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.view, View::Create);
}

#[tokio::test(start_paused = true)]
async fn test_penalty_raises_bounty_after_latency() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('t'));
    assert!(app.tempter.open);
    type_text(&mut app, "@sam");

    let start = Instant::now();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    tokio::time::sleep(Duration::from_millis(799)).await;
    app.drain_events().unwrap();
    assert!(app.state.penalties.is_empty());

    handle_next(&mut app).await;
    assert!(start.elapsed() >= Duration::from_millis(800));

    assert_eq!(app.state.quest.bounty, 110.0);
    assert_eq!(app.state.penalties.len(), 1);
    assert_eq!(app.state.penalties[0].name, "@sam");
    assert_eq!(app.state.penalties[0].date, "Just now");
    assert!(!app.tempter.open);
    assert_eq!(app.tempter.input, "");

    tokio::time::sleep(Duration::from_secs(2)).await;
    app.drain_events().unwrap();
    assert_eq!(app.state.penalties.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_blank_tempter_cannot_submit() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(!app.is_penalty_pending());
    assert!(app.tempter.open);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_penalty() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "@sam");
    press(&mut app, KeyCode::Enter);
    assert!(app.is_penalty_pending());

    press(&mut app, KeyCode::Esc);
    assert!(!app.tempter.open);
    assert!(!app.is_penalty_pending());

    tokio::time::sleep(Duration::from_secs(2)).await;
    app.drain_events().unwrap();

    assert!(app.state.penalties.is_empty());
    assert_eq!(app.state.quest.bounty, 100.0);
}

#[tokio::test(start_paused = true)]
async fn test_pending_create_survives_view_switches() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char(' '));
    let checked_in = app.state.quest.day();
    assert_eq!(checked_in, 13);

    app.switch_view(View::Create);
    type_text(&mut app, "Journal");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.view, View::Feed);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view, View::Quest);
    assert_eq!(app.state.quest.day(), checked_in);

    handle_next(&mut app).await;
    assert_eq!(app.state.quest.habit_name, "Journal");
    assert_eq!(app.view, View::Quest);
}

#[tokio::test(start_paused = true)]
async fn test_switching_views_leaves_state_untouched() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "@sam");
    press(&mut app, KeyCode::Enter);
    handle_next(&mut app).await;
    assert_eq!(app.state.penalties.len(), 1);

    let before = app.state.clone();

    let steps = [
        (KeyCode::Tab, View::Vault),
        (KeyCode::Tab, View::Create),
        (KeyCode::Esc, View::Quest),
        (KeyCode::BackTab, View::Feed),
        (KeyCode::BackTab, View::Create),
        (KeyCode::Esc, View::Quest),
        (KeyCode::Char('4'), View::Feed),
        (KeyCode::Char('2'), View::Vault),
        (KeyCode::Char('3'), View::Create),
        (KeyCode::Esc, View::Quest),
        (KeyCode::Char('1'), View::Quest),
    ];
    for (code, expected) in steps {
        press(&mut app, code);
        assert_eq!(app.view, expected);
        assert_eq!(app.state, before);
    }
}

#[tokio::test(start_paused = true)]
async fn test_stale_results_are_ignored() {
    let mut app = test_app();

    app.handle_app_event(AppEvent::PenaltyReady("@ghost".to_string()));

    assert!(app.state.penalties.is_empty());
    assert_eq!(app.state.quest.bounty, 100.0);
}

#[tokio::test]
async fn test_quit_stops_loop() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}
