//! Debounced suggestion dropdown for a single search input.
//!
//! Each keystroke replaces the text synchronously and re-arms one debounce
//! timer. When the timer fires the current text is looked up; the response
//! is applied only if no newer input arrived in the meantime (the session
//! generation still matches) and the controller is still alive.
//!
//! All scheduling goes through `tokio::spawn`, so the mutating methods must
//! be called from within a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use dixi_config::search::SearchConfig;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::session::{Direction, SuggestionSession};
use crate::source::SharedSource;

#[derive(Debug, Clone)]
pub struct SuggestionSettings {
    pub debounce: Duration,
    /// Minimum length in chars before a lookup is scheduled
    pub min_query_len: usize,
    /// How long the dropdown survives losing focus
    pub blur_grace: Duration,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(200),
            min_query_len: 2,
            blur_grace: Duration::from_millis(200),
        }
    }
}

impl From<&SearchConfig> for SuggestionSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            min_query_len: config.min_query_len.max(1),
            blur_grace: Duration::from_millis(config.blur_grace_ms),
        }
    }
}

pub struct SuggestionController {
    inner: Arc<Inner>,
}

struct Inner {
    source: SharedSource,
    settings: SuggestionSettings,
    state: watch::Sender<SuggestionSession>,
    /// Pending debounce timer, cancelled and replaced on every keystroke
    debounce: Mutex<Option<CancellationToken>>,
    /// Pending close after losing focus
    blur: Mutex<Option<CancellationToken>>,
    /// Parent of every task this controller spawns
    shutdown: CancellationToken,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SuggestionController {
    pub fn new(source: SharedSource, settings: SuggestionSettings) -> Self {
        Self::with_initial_text(source, settings, String::new())
    }

    /// Start with prefilled text; no lookup is issued until the next edit.
    pub fn with_initial_text(
        source: SharedSource,
        settings: SuggestionSettings,
        text: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(SuggestionSession::new(text));

        Self {
            inner: Arc::new(Inner {
                source,
                settings,
                state,
                debounce: Mutex::new(None),
                blur: Mutex::new(None),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> SuggestionSession {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SuggestionSession> {
        self.inner.state.subscribe()
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.shutdown.is_cancelled()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        if self.is_torn_down() {
            return;
        }

        let text = text.into();
        let wants_lookup = text.chars().count() >= self.inner.settings.min_query_len;
        let mut generation = 0;

        self.inner.state.send_modify(|s| {
            s.generation += 1;
            generation = s.generation;
            s.text = text;
            s.selected_index = None;
            if !wants_lookup {
                s.clear_suggestions();
            }
        });

        self.inner.cancel_debounce();
        if wants_lookup {
            self.inner.schedule_lookup(generation);
        }
    }

    pub fn move_selection(&self, direction: Direction) {
        self.inner
            .state
            .send_if_modified(|s| s.move_selection(direction));
    }

    /// Submit the highlighted row or the trimmed text.
    ///
    /// Returns the committed value, or `None` when there is nothing to
    /// submit. A commit ends the session: pending lookups are dropped so a
    /// late response cannot reopen the dropdown.
    pub fn commit(&self) -> Option<String> {
        let mut committed = None;
        self.inner.state.send_if_modified(|s| {
            committed = s.commit();
            committed.is_some()
        });

        if let Some(value) = &committed {
            tracing::debug!("Committed query '{}'", value);
            self.inner.cancel_debounce();
        }
        committed
    }

    /// Pointer selection of row `index`
    pub fn select_suggestion_at(&self, index: usize) -> Option<String> {
        let mut committed = None;
        self.inner.state.send_if_modified(|s| {
            if !s.is_open || index >= s.suggestions.len() {
                return false;
            }
            s.selected_index = Some(index);
            committed = s.commit();
            committed.is_some()
        });

        if let Some(value) = &committed {
            tracing::debug!("Picked suggestion '{}'", value);
            self.inner.cancel_debounce();
        }
        committed
    }

    /// Close the dropdown without committing
    pub fn dismiss(&self) {
        self.inner.close();
    }

    /// Input lost focus: close after the grace period, leaving time for a
    /// click on a row to land first.
    pub fn blur(&self) {
        if self.is_torn_down() {
            return;
        }

        let token = self.inner.shutdown.child_token();
        if let Some(previous) = lock(&self.inner.blur).replace(token.clone()) {
            previous.cancel();
        }

        let inner = Arc::clone(&self.inner);
        let grace = inner.settings.blur_grace;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(grace) => inner.close(),
            }
        });
    }

    /// Input regained focus: keep the dropdown and show existing rows again
    pub fn focus(&self) {
        if let Some(pending) = lock(&self.inner.blur).take() {
            pending.cancel();
        }

        self.inner.state.send_if_modified(|s| {
            if s.is_open || s.suggestions.is_empty() {
                return false;
            }
            s.is_open = true;
            true
        });
    }

    /// Cancel every pending timer and void in-flight lookups.
    /// The last state stays readable; further edits are ignored.
    pub fn teardown(&self) {
        if !self.inner.shutdown.is_cancelled() {
            tracing::debug!("Suggestion controller torn down");
            self.inner.shutdown.cancel();
        }
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Inner {
    fn cancel_debounce(&self) {
        if let Some(pending) = lock(&self.debounce).take() {
            pending.cancel();
        }
    }

    fn close(&self) {
        self.state.send_if_modified(|s| {
            if !s.is_open {
                return false;
            }
            s.is_open = false;
            s.selected_index = None;
            true
        });
    }

    fn schedule_lookup(self: &Arc<Self>, generation: u64) {
        let token = self.shutdown.child_token();
        if let Some(previous) = lock(&self.debounce).replace(token.clone()) {
            previous.cancel();
        }

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(inner.settings.debounce) => {}
            }
            inner.lookup(generation).await;
        });
    }

    async fn lookup(&self, generation: u64) {
        let query = self.state.borrow().text.clone();
        tracing::debug!("Fetching suggestions for '{}'", query);

        let result = tokio::select! {
            _ = self.shutdown.cancelled() => return,
            result = self.source.lookup(&query) => result,
        };

        self.state.send_if_modified(|s| {
            if s.generation != generation || self.shutdown.is_cancelled() {
                tracing::debug!("Discarding stale suggestions for '{}'", query);
                return false;
            }

            match result {
                Ok(suggestions) => {
                    tracing::debug!("{} suggestions for '{}'", suggestions.len(), query);
                    s.replace_suggestions(suggestions);
                }
                Err(e) => {
                    tracing::debug!("Suggestion lookup failed for '{}': {}", query, e);
                    s.clear_suggestions();
                }
            }
            true
        });
    }
}
