pub mod driver;
mod events;
pub mod scheduler;
mod sequencer;
mod timing;

pub use driver::{spawn_playback, spawn_playback_with_observers, PlaybackCommand, PlaybackHandle};
pub use events::{EventLog, PlaybackEvent, PlaybackObserver, PlaybackSnapshot};
pub use scheduler::{ScheduledTimer, Scheduler, TimerId, TimerKind, TimerQueue};
pub use sequencer::{validate_speed, PlaybackState, Sequencer, TransitionPhase};
pub use timing::{word_count, DisplayTiming, PhraseKind, PhraseTiming, TransitionTiming};

#[cfg(test)]
pub use events::MockPlaybackObserver;
