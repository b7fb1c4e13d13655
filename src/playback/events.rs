use super::timing::PhraseKind;
use crate::sentiment::Sentiment;
use crate::subtitles::TimedLine;
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

/// Read-only view of playback handed to the presentation layer
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    pub current_index: usize,
    pub line_count: usize,
    /// `None` once playback has run past the last line or nothing is loaded
    pub current_line: Option<TimedLine>,
    pub phrase_kind: Option<PhraseKind>,
    pub word_count: usize,
    pub sentiment: Sentiment,
    pub previous_sentiment: Sentiment,
    /// Sentiment a renderer should style with: the outgoing one while a
    /// transition is running, the current one otherwise
    pub display_sentiment: Sentiment,
    pub is_transitioning: bool,
    pub progress_fraction: f64,
    pub is_playing: bool,
    pub speed_multiplier: f64,
}

/// Notifications emitted by the sequencer, in the order they happen
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlaybackEvent {
    Loaded {
        title: String,
        line_count: usize,
    },
    Started {
        index: usize,
    },
    LineShown {
        index: usize,
        line: TimedLine,
        phrase_kind: PhraseKind,
        duration_ms: u64,
    },
    TransitionStarted {
        from: Sentiment,
        to: Sentiment,
    },
    SentimentAdopted {
        sentiment: Sentiment,
    },
    TransitionSettled {
        sentiment: Sentiment,
    },
    Paused {
        index: usize,
    },
    Finished,
    SpeedChanged {
        speed: f64,
    },
}

/// Subscriber to sequencer events
#[cfg_attr(test, mockall::automock)]
pub trait PlaybackObserver {
    fn on_event(&mut self, event: &PlaybackEvent);
}

/// Observer that records every event. Clones share the same log, so keep
/// one clone and subscribe the other.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Arc<Mutex<Vec<PlaybackEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PlaybackEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn drain(&self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl PlaybackObserver for EventLog {
    fn on_event(&mut self, event: &PlaybackEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
