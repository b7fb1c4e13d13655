pub mod subtitles;
pub use subtitles::{
    parse_subtitle_file, parse_subtitle_file_strict, LyricSet, SourceKind, SubtitleFormat,
    TimedLine,
};

pub mod sentiment;
pub use sentiment::{classify, LineSentiment, Sentiment};

pub mod playback;
pub use playback::{PhraseKind, PlaybackEvent, PlaybackSnapshot, PlaybackState, Sequencer};

pub mod config;
pub use config::PlayerConfig;

pub mod demo;

pub mod errors;
pub use errors::{ConfigError, InvalidArgumentError, LyricError, LyricResult, ParseError};

use subtitles::{load_lyric_set, LocalSubtitleFile};

/// Read and parse a local subtitle file into a lyric set
pub async fn load_lyrics(path: String) -> LyricResult<LyricSet> {
    load_lyric_set(LocalSubtitleFile::new(path)).await
}

/// Classify every line of a lyric set
pub fn analyze_lyrics(set: &LyricSet) -> Vec<LineSentiment> {
    sentiment::classify_batch(set.lines().iter().map(|line| line.text.as_str()))
}
