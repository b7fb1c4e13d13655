use serde::{Deserialize, Serialize};

/// One unit of lyric text with its start offset in milliseconds
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimedLine {
    pub text: String,
    pub timestamp_ms: u64,
}

impl TimedLine {
    pub fn new(text: impl Into<String>, timestamp_ms: u64) -> Self {
        Self {
            text: text.into(),
            timestamp_ms,
        }
    }
}

/// Where a lyric set came from
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Demo,
}

/// An ordered, titled collection of timed lines. Immutable once built.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LyricSet {
    title: String,
    lines: Vec<TimedLine>,
    source: SourceKind,
}

impl LyricSet {
    pub fn new(title: impl Into<String>, lines: Vec<TimedLine>, source: SourceKind) -> Self {
        Self {
            title: title.into(),
            lines,
            source,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[TimedLine] {
        &self.lines
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimedLine> {
        self.lines.get(index)
    }
}

/// Subtitle file formats understood by the parser
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Lrc,
    Vtt,
    /// Advanced SubStation Alpha, also covers `.ssa`
    Ass,
}

impl SubtitleFormat {
    /// Resolve a format from a bare extension (`"srt"`) or a file name
    /// (`"song.SRT"`). Matching is case-insensitive.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let extension = hint.rsplit('.').next().unwrap_or(hint).to_lowercase();
        match extension.as_str() {
            "srt" => Some(SubtitleFormat::Srt),
            "lrc" => Some(SubtitleFormat::Lrc),
            "vtt" => Some(SubtitleFormat::Vtt),
            "ass" | "ssa" => Some(SubtitleFormat::Ass),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SubtitleFormat::Srt => "SRT",
            SubtitleFormat::Lrc => "LRC",
            SubtitleFormat::Vtt => "VTT",
            SubtitleFormat::Ass => "ASS",
        }
    }

    /// LRC and ASS lines carry no ordering guarantee in the file
    pub fn needs_sorting(&self) -> bool {
        matches!(self, SubtitleFormat::Lrc | SubtitleFormat::Ass)
    }
}
