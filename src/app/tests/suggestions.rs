//! Debounced suggestion requests.
//!
//! These run on a real tokio runtime with a shortened debounce, so waits are
//! bounded polls rather than fixed sleeps where possible.

use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event::KeyCode;

use super::helpers::*;
use crate::app::AppEvent;
use crate::app::suggestions::SUGGESTION_ERROR_TEXT;
use crate::core::{Suggestion, SuggestionError};
use crate::tui::widgets::SuggestionPanel;

fn is_showing(panel: &SuggestionPanel) -> bool {
    matches!(panel, SuggestionPanel::Showing { .. })
}

fn showing(app: &crate::app::App) -> Vec<Suggestion> {
    match app.suggestion_panel() {
        SuggestionPanel::Showing { suggestions, .. } => suggestions.clone(),
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[tokio::test]
async fn short_input_keeps_placeholder_without_request() {
    let provider = CountingProvider::new();
    let mut app = create_test_app_with_provider(provider.clone());

    type_text(&mut app, "a");
    assert!(!app.suggestions.has_pending());
    settle(&mut app, TEST_DEBOUNCE * 3).await;

    assert_eq!(provider.calls(), 0);
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::Placeholder);
}

#[tokio::test]
async fn whitespace_padding_does_not_count() {
    let provider = CountingProvider::new();
    let mut app = create_test_app_with_provider(provider.clone());

    type_text(&mut app, " a ");
    settle(&mut app, TEST_DEBOUNCE * 3).await;

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn typing_burst_triggers_exactly_one_request() {
    let provider = CountingProvider::new();
    let mut app = create_test_app_with_provider(provider.clone());

    // Each keystroke lands well inside the debounce window.
    type_text(&mut app, "Call mom");
    wait_for_panel(&mut app, is_showing).await;
    settle(&mut app, TEST_DEBOUNCE * 3).await;

    assert_eq!(provider.calls(), 1);
    assert_eq!(provider.texts(), ["Call mom"]);
}

#[tokio::test]
async fn typing_call_lists_matching_task_first() {
    let mut app = create_test_app();
    add_task(&mut app, "Call mom");
    add_task(&mut app, "Buy milk");

    type_text(&mut app, "call");
    wait_for_panel(&mut app, is_showing).await;

    let suggestions = showing(&app);
    assert_eq!(suggestions.len(), 4);
    match &suggestions[0] {
        Suggestion::Similar(tasks) => {
            let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, ["Call mom"]);
        }
        other => panic!("expected similar tasks, got {other:?}"),
    }
    assert_eq!(suggestions[1], Suggestion::Category("call".to_string()));
    assert_eq!(suggestions[2], Suggestion::Reminder);
    assert_eq!(suggestions[3], Suggestion::Delegate("call".to_string()));
}

#[tokio::test]
async fn loading_is_shown_before_results() {
    let timing = crate::core::SuggestionTiming {
        debounce: TEST_DEBOUNCE,
        latency: Duration::from_millis(200),
    };
    let mut app = crate::app::App::with_provider(
        crate::fs::Storage::new(Box::new(crate::fs::MemoryStore::new())),
        Arc::new(crate::core::MockSuggestionProvider::new(timing.latency)),
        timing,
    );

    type_text(&mut app, "Pay rent");
    wait_for_panel(&mut app, |p| *p == SuggestionPanel::Loading).await;
    wait_for_panel(&mut app, is_showing).await;
}

#[tokio::test]
async fn provider_failure_shows_error() {
    let mut app = create_test_app_with_provider(Arc::new(FailingProvider));

    type_text(&mut app, "Pay rent");
    wait_for_panel(&mut app, |p| matches!(p, SuggestionPanel::Error(_))).await;

    assert_eq!(
        app.suggestion_panel(),
        &SuggestionPanel::Error(SUGGESTION_ERROR_TEXT.to_string())
    );
    assert!(app.session().tasks().is_empty());
}

#[tokio::test]
async fn shrinking_below_two_chars_cancels_pending() {
    let provider = CountingProvider::new();
    let mut app = create_test_app_with_provider(provider.clone());

    type_text(&mut app, "ab");
    assert!(app.suggestions.has_pending());
    app.handle_key(key(KeyCode::Backspace));

    settle(&mut app, TEST_DEBOUNCE * 3).await;
    assert_eq!(provider.calls(), 0);
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::Placeholder);
}

#[tokio::test]
async fn adding_task_cancels_pending_request() {
    let provider = CountingProvider::new();
    let mut app = create_test_app_with_provider(provider.clone());

    type_text(&mut app, "Buy milk");
    app.handle_key(key(KeyCode::Enter));
    settle(&mut app, TEST_DEBOUNCE * 3).await;

    assert_eq!(provider.calls(), 0);
    assert_eq!(app.session().tasks().len(), 1);
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::Placeholder);
}

#[tokio::test]
async fn esc_cancels_pending_request() {
    let provider = CountingProvider::new();
    let mut app = create_test_app_with_provider(provider.clone());

    type_text(&mut app, "Buy milk");
    app.handle_key(key(KeyCode::Esc));
    settle(&mut app, TEST_DEBOUNCE * 3).await;

    assert_eq!(provider.calls(), 0);
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::Placeholder);
}

#[test]
fn stale_events_are_dropped() {
    let mut app = create_test_app();
    app.suggestions.generation = 5;

    app.handle_suggestion_event(AppEvent::SuggestionsDue {
        generation: 4,
        text: "late".to_string(),
    });
    app.handle_suggestion_event(AppEvent::SuggestionsReady {
        generation: 4,
        result: Err(SuggestionError::Provider("late".to_string())),
    });
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::Placeholder);

    app.handle_suggestion_event(AppEvent::SuggestionsReady {
        generation: 5,
        result: Ok(Vec::new()),
    });
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::NoSuggestions);
}

#[tokio::test]
async fn task_deleted_during_debounce_is_not_suggested() {
    let mut app = create_test_app();
    add_task(&mut app, "Call dentist");
    add_task(&mut app, "Call plumber");
    let dentist = app.session().tasks()[0].id;

    type_text(&mut app, "call");
    app.request_delete(dentist);
    app.tick_at(
        std::time::Instant::now()
            + crate::app::removal::REMOVAL_ANIMATION
            + Duration::from_millis(1),
    );
    wait_for_panel(&mut app, is_showing).await;

    match &showing(&app)[0] {
        Suggestion::Similar(tasks) => {
            let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, ["Call plumber"]);
        }
        other => panic!("expected similar tasks, got {other:?}"),
    }
}

#[tokio::test]
async fn picking_similar_task_copies_text() {
    let mut app = create_test_app();
    add_task(&mut app, "Call dentist");

    type_text(&mut app, "call");
    wait_for_panel(&mut app, is_showing).await;
    app.handle_key(ctrl_key('e'));

    assert_eq!(app.input_text(), "Call dentist");
    assert_eq!(app.suggestion_panel(), &SuggestionPanel::Placeholder);
    assert_eq!(app.session().tasks().len(), 1);
}

#[tokio::test]
async fn picking_action_shows_confirmation() {
    let mut app = create_test_app();

    type_text(&mut app, "Pay rent");
    wait_for_panel(&mut app, is_showing).await;

    // Category, reminder, delegate: move to the reminder.
    app.handle_key(key_with(KeyCode::Down, ratatui::crossterm::event::KeyModifiers::CONTROL));
    app.handle_key(ctrl_key('e'));

    assert_eq!(
        app.suggestion_panel(),
        &SuggestionPanel::Message("Reminder set for task \"Pay rent\"!".to_string())
    );
    assert_eq!(app.input_text(), "Pay rent");
    assert!(app.session().tasks().is_empty());
}

#[test]
fn suggestion_highlight_stays_in_range() {
    let mut app = create_test_app();
    app.suggestions.panel = SuggestionPanel::Showing {
        suggestions: vec![Suggestion::Reminder, Suggestion::Delegate("x".to_string())],
        selected: 0,
    };

    app.suggestion_up();
    app.suggestion_down();
    app.suggestion_down();
    app.suggestion_down();

    assert!(matches!(
        app.suggestion_panel(),
        SuggestionPanel::Showing { selected: 1, .. }
    ));
}

#[test]
fn similar_task_deleted_meanwhile_is_ignored() {
    let mut app = create_test_app();
    app.input.set_text("ca");
    app.suggestions.panel = SuggestionPanel::Showing {
        suggestions: vec![Suggestion::Similar(vec![crate::core::SimilarTask {
            id: crate::core::TaskId(42),
            text: "Call dentist".to_string(),
            completed: false,
        }])],
        selected: 0,
    };

    app.activate_suggestion();

    assert_eq!(app.input_text(), "ca");
    assert!(matches!(app.suggestion_panel(), SuggestionPanel::Showing { .. }));
}
