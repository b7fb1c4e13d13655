use super::events::{PlaybackObserver, PlaybackSnapshot};
use super::sequencer::{validate_speed, Sequencer};
use crate::config::PlayerConfig;
use crate::errors::{LyricError, LyricResult};
use crate::subtitles::LyricSet;
use log::{debug, warn};
use std::io;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Commands accepted by a running playback task
#[derive(Debug)]
pub enum PlaybackCommand {
    Load(LyricSet),
    Play,
    Pause,
    Restart,
    SetSpeed(f64),
    Shutdown,
}

/// Client side of a playback task started by [`spawn_playback`]
#[derive(Clone)]
pub struct PlaybackHandle {
    commands: mpsc::UnboundedSender<PlaybackCommand>,
    snapshots: watch::Receiver<PlaybackSnapshot>,
}

impl PlaybackHandle {
    pub fn load(&self, set: LyricSet) -> LyricResult<()> {
        self.send(PlaybackCommand::Load(set))
    }

    pub fn play(&self) -> LyricResult<()> {
        self.send(PlaybackCommand::Play)
    }

    pub fn pause(&self) -> LyricResult<()> {
        self.send(PlaybackCommand::Pause)
    }

    pub fn restart(&self) -> LyricResult<()> {
        self.send(PlaybackCommand::Restart)
    }

    /// Rejects non-positive speeds before they reach the task
    pub fn set_speed(&self, speed: f64) -> LyricResult<()> {
        validate_speed(speed)?;
        self.send(PlaybackCommand::SetSpeed(speed))
    }

    pub fn shutdown(&self) -> LyricResult<()> {
        self.send(PlaybackCommand::Shutdown)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every command and timer firing
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.snapshots.clone()
    }

    fn send(&self, command: PlaybackCommand) -> LyricResult<()> {
        self.commands.send(command).map_err(|_| {
            LyricError::Other(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "playback task has stopped",
            ))
        })
    }
}

/// Run a sequencer against the tokio clock on its own task
pub fn spawn_playback(config: PlayerConfig) -> (PlaybackHandle, JoinHandle<()>) {
    spawn_playback_with_observers(config, Vec::new())
}

pub fn spawn_playback_with_observers(
    config: PlayerConfig,
    observers: Vec<Box<dyn PlaybackObserver + Send>>,
) -> (PlaybackHandle, JoinHandle<()>) {
    let mut sequencer = Sequencer::new(config);
    for observer in observers {
        sequencer.subscribe(observer);
    }

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(sequencer.snapshot());
    let task = tokio::spawn(run_playback(sequencer, command_rx, snapshot_tx));

    (
        PlaybackHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        },
        task,
    )
}

async fn run_playback(
    mut sequencer: Sequencer,
    mut commands: mpsc::UnboundedReceiver<PlaybackCommand>,
    snapshots: watch::Sender<PlaybackSnapshot>,
) {
    let started = Instant::now();
    let elapsed_ms = |started: Instant| started.elapsed().as_millis() as u64;

    loop {
        let deadline = sequencer
            .next_deadline_ms()
            .map(|due_ms| started + Duration::from_millis(due_ms));

        tokio::select! {
            command = commands.recv() => {
                sequencer.advance_clock_to(elapsed_ms(started));
                match command {
                    None | Some(PlaybackCommand::Shutdown) => {
                        debug!("Playback task shutting down");
                        break;
                    }
                    Some(command) => apply_command(&mut sequencer, command),
                }
            }
            _ = wait_for(deadline) => {
                sequencer.advance_clock_to(elapsed_ms(started));
            }
        }

        snapshots.send_replace(sequencer.snapshot());
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn apply_command(sequencer: &mut Sequencer, command: PlaybackCommand) {
    match command {
        PlaybackCommand::Load(set) => sequencer.load(set),
        PlaybackCommand::Play => sequencer.play(),
        PlaybackCommand::Pause => sequencer.pause(),
        PlaybackCommand::Restart => sequencer.restart(),
        PlaybackCommand::SetSpeed(speed) => {
            if let Err(e) = sequencer.set_speed(speed) {
                warn!("Ignoring speed change: {}", e);
            }
        }
        PlaybackCommand::Shutdown => {}
    }
}
