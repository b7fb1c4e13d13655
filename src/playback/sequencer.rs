//! Playback state machine: which line is showing, when the next one comes,
//! and how the sentiment hands over between lines.

use super::events::{PlaybackEvent, PlaybackObserver, PlaybackSnapshot};
use super::scheduler::{ScheduledTimer, Scheduler, TimerId, TimerKind, TimerQueue};
use super::timing::word_count;
use crate::config::PlayerConfig;
use crate::errors::{InvalidArgumentError, LyricResult};
use crate::sentiment::{classify, Sentiment};
use crate::subtitles::{LyricSet, TimedLine};
use log::{debug, info};
use serde::Serialize;

/// Mutable playback state, owned by the [`Sequencer`]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub speed_multiplier: f64,
    pub current_sentiment: Sentiment,
    pub previous_sentiment: Sentiment,
    pub is_transitioning: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            speed_multiplier: 1.0,
            current_sentiment: Sentiment::Neutral,
            previous_sentiment: Sentiment::Neutral,
            is_transitioning: false,
        }
    }
}

/// Progress of the sentiment hand-over between two lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    /// Waiting to make `target` the current sentiment
    Pending { target: Sentiment },
    /// New sentiment adopted, transition flag still raised
    Settling,
}

/// Reject speeds that are not finite and strictly positive
pub fn validate_speed(speed: f64) -> Result<(), InvalidArgumentError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(InvalidArgumentError::new(format!(
            "playback speed must be a positive number, got {}",
            speed
        )))
    }
}

/// Drives a [`LyricSet`] line by line.
///
/// At most one advance timer and one transition timer are pending at any
/// time; every command cancels the timers it replaces before scheduling.
pub struct Sequencer<S: Scheduler = TimerQueue> {
    scheduler: S,
    config: PlayerConfig,
    set: Option<LyricSet>,
    state: PlaybackState,
    phase: TransitionPhase,
    advance_timer: Option<TimerId>,
    transition_timer: Option<TimerId>,
    observers: Vec<Box<dyn PlaybackObserver + Send>>,
}

impl Sequencer<TimerQueue> {
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_scheduler(config, TimerQueue::new())
    }
}

impl Default for Sequencer<TimerQueue> {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl<S: Scheduler> Sequencer<S> {
    pub fn with_scheduler(config: PlayerConfig, scheduler: S) -> Self {
        Self {
            scheduler,
            config,
            set: None,
            state: PlaybackState::default(),
            phase: TransitionPhase::Idle,
            advance_timer: None,
            transition_timer: None,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn PlaybackObserver + Send>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn lyric_set(&self) -> Option<&LyricSet> {
        self.set.as_ref()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn line_count(&self) -> usize {
        self.set.as_ref().map_or(0, LyricSet::len)
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Bind a new lyric set and reset to the initial stopped state
    pub fn load(&mut self, set: LyricSet) {
        self.cancel_timers();
        info!("Loading '{}' ({} lines)", set.title(), set.len());
        let event = PlaybackEvent::Loaded {
            title: set.title().to_string(),
            line_count: set.len(),
        };
        self.set = Some(set);
        self.state = PlaybackState::default();
        self.phase = TransitionPhase::Idle;
        self.emit(event);
    }

    /// Start or resume. Does nothing while already playing or when no line
    /// is left to show.
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        if self.state.current_index >= self.line_count() {
            debug!(
                "Play ignored at index {} of {}",
                self.state.current_index,
                self.line_count()
            );
            return;
        }

        self.cancel_timers();
        self.state.is_playing = true;
        self.emit(PlaybackEvent::Started {
            index: self.state.current_index,
        });
        self.present_current();
    }

    /// Stop at the current line. Pending timers are cancelled and a running
    /// sentiment transition completes immediately.
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.cancel_advance();
        self.settle_transition_now();
        self.state.is_playing = false;
        debug!("Paused at index {}", self.state.current_index);
        self.emit(PlaybackEvent::Paused {
            index: self.state.current_index,
        });
    }

    /// Reset to the initial state and play from the first line
    pub fn restart(&mut self) {
        self.cancel_timers();
        self.state = PlaybackState::default();
        self.phase = TransitionPhase::Idle;
        self.play();
    }

    /// Change the speed multiplier. Applies from the next scheduled line on;
    /// the line currently showing keeps its duration.
    pub fn set_speed(&mut self, speed: f64) -> LyricResult<()> {
        validate_speed(speed)?;
        self.state.speed_multiplier = speed;
        debug!("Playback speed set to {}", speed);
        self.emit(PlaybackEvent::SpeedChanged { speed });
        Ok(())
    }

    /// Step to the next line.
    ///
    /// Fired by the advance timer while playing. Reaching the end stops
    /// playback; stepping is a no-op once the end has been reached. While
    /// stopped the new line's sentiment is adopted without a transition.
    pub fn advance(&mut self) {
        let len = self.line_count();
        if self.state.current_index >= len {
            return;
        }

        self.cancel_advance();
        self.state.current_index += 1;

        if self.state.current_index >= len {
            self.finish();
        } else if self.state.is_playing {
            self.present_current();
        } else {
            self.show_current_still();
        }
    }

    /// Due time of the earliest pending timer
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.scheduler.next_due_ms()
    }

    /// Move the clock to `target_ms`, firing every timer due on the way in
    /// due order.
    pub fn advance_clock_to(&mut self, target_ms: u64) {
        while let Some(due_ms) = self.scheduler.next_due_ms() {
            if due_ms > target_ms {
                break;
            }
            self.scheduler.set_now_ms(due_ms);
            while let Some(timer) = self.scheduler.pop_due() {
                self.on_timer(timer);
            }
        }
        self.scheduler.set_now_ms(target_ms);
    }

    pub fn advance_clock_by(&mut self, delta_ms: u64) {
        let target = self.scheduler.now_ms().saturating_add(delta_ms);
        self.advance_clock_to(target);
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        let line_count = self.line_count();
        let current_line = self.current_line().cloned();
        let phrase_kind = current_line
            .as_ref()
            .map(|line| self.config.display.phrase_kind(&line.text));
        let progress_fraction = if line_count == 0 {
            0.0
        } else {
            ((self.state.current_index + 1) as f64 / line_count as f64).min(1.0)
        };
        let display_sentiment = if self.state.is_transitioning {
            self.state.previous_sentiment
        } else {
            self.state.current_sentiment
        };

        PlaybackSnapshot {
            current_index: self.state.current_index,
            line_count,
            word_count: current_line
                .as_ref()
                .map_or(0, |line| word_count(&line.text)),
            current_line,
            phrase_kind,
            sentiment: self.state.current_sentiment,
            previous_sentiment: self.state.previous_sentiment,
            display_sentiment,
            is_transitioning: self.state.is_transitioning,
            progress_fraction,
            is_playing: self.state.is_playing,
            speed_multiplier: self.state.speed_multiplier,
        }
    }

    fn current_line(&self) -> Option<&TimedLine> {
        self.set
            .as_ref()
            .and_then(|set| set.get(self.state.current_index))
    }

    fn on_timer(&mut self, timer: ScheduledTimer) {
        match timer.kind {
            TimerKind::Advance => {
                if self.advance_timer != Some(timer.id) {
                    return;
                }
                self.advance_timer = None;
                if self.state.is_playing {
                    self.advance();
                }
            }
            TimerKind::AdoptSentiment => {
                if self.transition_timer != Some(timer.id) {
                    return;
                }
                self.transition_timer = None;
                if let TransitionPhase::Pending { target } = self.phase {
                    self.state.current_sentiment = target;
                    self.phase = TransitionPhase::Settling;
                    self.transition_timer = Some(self.scheduler.schedule(
                        self.config.transition.settle_delay_ms,
                        TimerKind::SettleTransition,
                    ));
                    self.emit(PlaybackEvent::SentimentAdopted { sentiment: target });
                }
            }
            TimerKind::SettleTransition => {
                if self.transition_timer != Some(timer.id) {
                    return;
                }
                self.transition_timer = None;
                self.phase = TransitionPhase::Idle;
                self.state.is_transitioning = false;
                self.emit(PlaybackEvent::TransitionSettled {
                    sentiment: self.state.current_sentiment,
                });
            }
        }
    }

    /// Show the line at the current index while playing: classify it, start
    /// a sentiment transition if needed and schedule the next advance.
    fn present_current(&mut self) {
        let Some(line) = self.current_line().cloned() else {
            return;
        };
        let index = self.state.current_index;
        let sentiment = classify(&line.text);
        let phrase_kind = self.config.display.phrase_kind(&line.text);
        let duration_ms = self
            .config
            .display
            .scaled_duration_ms(&line.text, self.state.speed_multiplier);

        self.cancel_advance();
        self.advance_timer = Some(self.scheduler.schedule(duration_ms, TimerKind::Advance));

        debug!(
            "Line {} ({:?}, {}) for {} ms: {}",
            index, phrase_kind, sentiment, duration_ms, line.text
        );
        self.emit(PlaybackEvent::LineShown {
            index,
            line,
            phrase_kind,
            duration_ms,
        });

        if sentiment != self.state.current_sentiment {
            self.begin_transition(sentiment);
        }
    }

    /// Show the line at the current index while stopped
    fn show_current_still(&mut self) {
        let Some(line) = self.current_line().cloned() else {
            return;
        };
        let sentiment = classify(&line.text);
        self.settle_transition_now();
        if sentiment != self.state.current_sentiment {
            self.state.previous_sentiment = self.state.current_sentiment;
            self.state.current_sentiment = sentiment;
        }

        let phrase_kind = self.config.display.phrase_kind(&line.text);
        let duration_ms = self
            .config
            .display
            .scaled_duration_ms(&line.text, self.state.speed_multiplier);
        self.emit(PlaybackEvent::LineShown {
            index: self.state.current_index,
            line,
            phrase_kind,
            duration_ms,
        });
    }

    fn begin_transition(&mut self, target: Sentiment) {
        self.cancel_transition();
        let from = self.state.current_sentiment;
        self.state.previous_sentiment = from;
        self.state.is_transitioning = true;
        self.phase = TransitionPhase::Pending { target };
        self.transition_timer = Some(self.scheduler.schedule(
            self.config.transition.adopt_delay_ms,
            TimerKind::AdoptSentiment,
        ));
        debug!("Sentiment transition {} -> {}", from, target);
        self.emit(PlaybackEvent::TransitionStarted { from, to: target });
    }

    /// Complete any in-flight transition without waiting for its timers
    fn settle_transition_now(&mut self) {
        self.cancel_transition();
        if self.phase == TransitionPhase::Idle {
            return;
        }
        if let TransitionPhase::Pending { target } = self.phase {
            self.state.current_sentiment = target;
        }
        self.phase = TransitionPhase::Idle;
        self.state.is_transitioning = false;
        self.emit(PlaybackEvent::TransitionSettled {
            sentiment: self.state.current_sentiment,
        });
    }

    fn finish(&mut self) {
        self.cancel_advance();
        self.settle_transition_now();
        self.state.is_playing = false;
        info!("Playback finished after {} lines", self.line_count());
        self.emit(PlaybackEvent::Finished);
    }

    fn cancel_advance(&mut self) {
        if let Some(id) = self.advance_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn cancel_transition(&mut self) {
        if let Some(id) = self.transition_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn cancel_timers(&mut self) {
        self.cancel_advance();
        self.cancel_transition();
    }

    fn emit(&mut self, event: PlaybackEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}
