use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static OVERRIDE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static FILE_EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").unwrap());

/// Format a millisecond offset in SRT format
pub fn format_timestamp(timestamp_ms: u64) -> String {
    let millis = timestamp_ms % 1000;
    let total_seconds = timestamp_ms / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Build a millisecond offset from clock components
pub(crate) fn clock_to_ms(hours: u64, minutes: u64, seconds: u64, millis: u64) -> u64 {
    hours * 3_600_000 + minutes * 60_000 + seconds * 1000 + millis
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split subtitle content into cue blocks separated by blank lines
pub(crate) fn split_blocks(content: &str) -> Vec<&str> {
    BLANK_LINE.split(content).collect()
}

/// Remove `<i>`, `<b>`, `<c.color>` style markup
pub(crate) fn strip_markup_tags(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Remove ASS `{\...}` override blocks
pub(crate) fn strip_override_tags(text: &str) -> String {
    OVERRIDE_TAG.replace_all(text, "").into_owned()
}

/// Derive a display title from a file name by dropping its final extension
pub fn title_from_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    FILE_EXTENSION.replace(base, "").into_owned()
}

pub(crate) fn parse_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(0)
}
