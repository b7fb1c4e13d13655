mod extractor;
mod parser;
mod types;
mod utils;

pub use extractor::{
    load_lyric_set, InMemorySubtitle, LocalSubtitleFile, SubtitleDocument, SubtitleSource,
};
pub use parser::{parse_subtitle_file, parse_subtitle_file_strict, parse_with_format};
pub use types::{LyricSet, SourceKind, SubtitleFormat, TimedLine};
pub use utils::{format_timestamp, title_from_file_name};
#[cfg(test)]
pub mod unit_test;
