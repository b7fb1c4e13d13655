use serde::{Deserialize, Serialize};

/// Pacing category of a line, also the hint a renderer uses to pick an
/// animation style (single dramatic words, normal phrases, rapid verses).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhraseKind {
    Short,
    Normal,
    Rapid,
}

/// Floor and per-character rate for one phrase kind
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PhraseTiming {
    /// Minimum time on screen, in milliseconds
    pub floor_ms: u64,
    /// Milliseconds granted per character of text
    pub per_char_ms: u64,
}

impl PhraseTiming {
    pub fn duration_ms(&self, char_count: usize) -> u64 {
        self.floor_ms.max(char_count as u64 * self.per_char_ms)
    }
}

/// How long each line stays on screen at 1.0x speed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DisplayTiming {
    /// Lines with at most this many words are `Short`
    pub short_max_words: usize,
    /// Lines with more than this many words are `Rapid`
    pub rapid_min_words: usize,
    pub short: PhraseTiming,
    pub normal: PhraseTiming,
    pub rapid: PhraseTiming,
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self {
            short_max_words: 3,
            rapid_min_words: 8,
            short: PhraseTiming {
                floor_ms: 2500,
                per_char_ms: 140,
            },
            normal: PhraseTiming {
                floor_ms: 2800,
                per_char_ms: 70,
            },
            rapid: PhraseTiming {
                floor_ms: 3500,
                per_char_ms: 60,
            },
        }
    }
}

impl DisplayTiming {
    pub fn phrase_kind(&self, text: &str) -> PhraseKind {
        let words = word_count(text);
        if words <= self.short_max_words {
            PhraseKind::Short
        } else if words > self.rapid_min_words {
            PhraseKind::Rapid
        } else {
            PhraseKind::Normal
        }
    }

    pub fn timing_for(&self, kind: PhraseKind) -> &PhraseTiming {
        match kind {
            PhraseKind::Short => &self.short,
            PhraseKind::Normal => &self.normal,
            PhraseKind::Rapid => &self.rapid,
        }
    }

    /// Display duration of `text` at normal speed
    pub fn display_duration_ms(&self, text: &str) -> u64 {
        let kind = self.phrase_kind(text);
        self.timing_for(kind).duration_ms(text.encode_utf16().count())
    }

    /// Display duration of `text` scaled by a playback speed multiplier
    pub fn scaled_duration_ms(&self, text: &str, speed: f64) -> u64 {
        (self.display_duration_ms(text) as f64 / speed).round() as u64
    }
}

/// Number of single-space separated pieces, empty pieces included
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Delays of the two-step sentiment hand-over
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TransitionTiming {
    /// Delay before the new sentiment becomes current
    pub adopt_delay_ms: u64,
    /// Delay after adoption before the transition flag clears
    pub settle_delay_ms: u64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            adopt_delay_ms: 300,
            settle_delay_ms: 1200,
        }
    }
}
