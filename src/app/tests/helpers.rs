//! Shared test utilities for the app module.
//!
//! - `create_test_app` - `App` over an in-memory store with fast timings
//! - `SharedStore` - in-memory store whose contents outlive the app
//! - `FailingStore` / `FailingProvider` - error paths
//! - `CountingProvider` - counts provider calls
//! - `render_app_to_terminal` / `buffer_text` - `TestBackend` rendering
//! - Key event helpers (`char_key`, `key`, `ctrl_key`)

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use crate::app::App;
use crate::core::{
    MockSuggestionProvider, Suggestion, SuggestionError, SuggestionProvider, SuggestionTiming,
    Task,
};
use crate::fs::{KeyValueStore, MemoryStore, Storage, StorageError};
use crate::tui::widgets::SuggestionPanel;

/// Debounce used by app tests.
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(20);

/// Upper bound for waiting on background suggestion events.
pub const WAIT_LIMIT: Duration = Duration::from_secs(2);

#[must_use]
pub fn fast_timing() -> SuggestionTiming {
    SuggestionTiming {
        debounce: TEST_DEBOUNCE,
        latency: Duration::ZERO,
    }
}

/// Creates a [`KeyEvent`] for `code` with `modifiers`.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for `code` with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::NONE)
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a Ctrl+`c` [`KeyEvent`].
pub fn ctrl_key(c: char) -> KeyEvent {
    key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Types `text` into the composer one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Adds a task through the composer without triggering suggestions.
pub fn add_task(app: &mut App, text: &str) {
    app.input.set_text(text);
    app.add_task_from_input();
}

/// In-memory store that can be shared between successive apps.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedStore {
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

/// Store whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            source: std::io::Error::other("disk full"),
        })
    }
}

/// Provider that always fails.
#[derive(Debug, Default)]
pub struct FailingProvider;

#[async_trait]
impl SuggestionProvider for FailingProvider {
    async fn suggest(
        &self,
        _text: &str,
        _tasks: &[Task],
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        Err(SuggestionError::Provider("offline".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Mock provider that records every call and the text it was asked about.
#[derive(Debug, Default)]
pub struct CountingProvider {
    inner: MockSuggestionProvider,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
}

impl CountingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MockSuggestionProvider::new(Duration::ZERO),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionProvider for CountingProvider {
    async fn suggest(
        &self,
        text: &str,
        tasks: &[Task],
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        self.inner.suggest(text, tasks).await
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Creates an app over `kv` with the mock provider and fast timings.
pub fn create_test_app_with_store(kv: impl KeyValueStore + 'static) -> App {
    let timing = fast_timing();
    App::with_provider(
        Storage::new(Box::new(kv)),
        Arc::new(MockSuggestionProvider::new(timing.latency)),
        timing,
    )
}

/// Creates an app over an empty in-memory store.
pub fn create_test_app() -> App {
    create_test_app_with_store(MemoryStore::new())
}

/// Creates an app over an empty in-memory store with a custom provider.
pub fn create_test_app_with_provider(provider: Arc<dyn SuggestionProvider>) -> App {
    App::with_provider(
        Storage::new(Box::new(MemoryStore::new())),
        provider,
        fast_timing(),
    )
}

/// Drains background events until `done` holds for the panel.
///
/// # Panics
///
/// Panics if the panel does not reach the expected state within [`WAIT_LIMIT`].
pub async fn wait_for_panel<F>(app: &mut App, done: F)
where
    F: Fn(&SuggestionPanel) -> bool,
{
    let deadline = tokio::time::Instant::now() + WAIT_LIMIT;
    loop {
        app.process_events();
        if done(app.suggestion_panel()) {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "panel never reached expected state, last: {:?}",
            app.suggestion_panel()
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Lets background tasks run for `duration`, draining events as they arrive.
pub async fn settle(app: &mut App, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::Instant::now() < deadline {
        app.process_events();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    app.process_events();
}

/// Renders the app to a `TestBackend` terminal.
///
/// # Errors
///
/// Returns an error if terminal creation or drawing fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    // Update layout before rendering (mimics main loop behavior)
    app.update_layout(Rect::new(0, 0, width, height));

    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Returns the rendered rows of the buffer, one string per line.
#[must_use]
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

/// Returns the whole buffer as one string.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    buffer_lines(terminal).join("\n")
}
