use super::types::{SubtitleFormat, TimedLine};
use super::utils::{
    clock_to_ms, normalize_line_endings, parse_number, split_blocks, strip_markup_tags,
    strip_override_tags,
};
use crate::errors::{LyricResult, ParseError};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static SRT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})\s*-->\s*([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})",
    )
    .unwrap()
});
static VTT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})\s*-->\s*([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})",
    )
    .unwrap()
});
static LRC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]{2}):([0-9]{2})\.([0-9]{2})\](.*)").unwrap());
static ASS_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+):([0-9]{2}):([0-9]{2})\.([0-9]{2})").unwrap());
static CUE_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Minimum comma-separated fields in an ASS `Dialogue:` line
const ASS_DIALOGUE_FIELDS: usize = 10;
/// Index of the first text field in an ASS `Dialogue:` line
const ASS_TEXT_FIELD: usize = 9;

/// Parse subtitle content, dispatching on the extension in `format_hint`.
///
/// Unknown formats and malformed content produce an empty vector rather than
/// an error; callers test for emptiness.
pub fn parse_subtitle_file(content: &str, format_hint: &str) -> Vec<TimedLine> {
    match SubtitleFormat::from_hint(format_hint) {
        Some(format) => parse_with_format(content, format),
        None => {
            warn!("Unknown subtitle format for '{}', nothing parsed", format_hint);
            Vec::new()
        }
    }
}

/// Like [`parse_subtitle_file`] but reports unknown formats and content
/// without any usable line as a [`ParseError`].
pub fn parse_subtitle_file_strict(content: &str, format_hint: &str) -> LyricResult<Vec<TimedLine>> {
    let format = SubtitleFormat::from_hint(format_hint).ok_or_else(|| {
        ParseError::new(format!(
            "Unsupported subtitle format '{}' (expected srt, lrc, vtt, ass or ssa)",
            format_hint
        ))
    })?;

    let lines = parse_with_format(content, format);
    if lines.is_empty() {
        return Err(ParseError::new(format!(
            "No timed lines found in {} content",
            format.name()
        ))
        .into());
    }
    Ok(lines)
}

/// Parse content already known to be in `format`
pub fn parse_with_format(content: &str, format: SubtitleFormat) -> Vec<TimedLine> {
    let content = normalize_line_endings(content);

    let mut lines = match format {
        SubtitleFormat::Srt => parse_srt(&content),
        SubtitleFormat::Lrc => parse_lrc(&content),
        SubtitleFormat::Vtt => parse_vtt(&content),
        SubtitleFormat::Ass => parse_ass(&content),
    };

    if format.needs_sorting() {
        // stable, so equal timestamps keep file order
        lines.sort_by_key(|line| line.timestamp_ms);
    }

    debug!("Parsed {} {} lines", lines.len(), format.name());
    lines
}

fn parse_srt(content: &str) -> Vec<TimedLine> {
    let mut lyrics = Vec::new();

    for block in split_blocks(content.trim()) {
        let lines: Vec<&str> = block.trim().split('\n').collect();
        if lines.len() < 3 {
            continue;
        }

        let Some(caps) = SRT_TIMING.captures(lines[1]) else {
            debug!("Skipping SRT block with malformed timing: {:?}", lines[1]);
            continue;
        };
        let start = clock_to_ms(
            parse_number(&caps[1]),
            parse_number(&caps[2]),
            parse_number(&caps[3]),
            parse_number(&caps[4]),
        );

        let text = strip_markup_tags(&lines[2..].join(" "));
        push_non_empty(&mut lyrics, text.trim(), start);
    }

    lyrics
}

fn parse_lrc(content: &str) -> Vec<TimedLine> {
    let mut lyrics = Vec::new();

    for line in content.split('\n') {
        let Some(caps) = LRC_LINE.captures(line) else {
            continue;
        };
        let minutes = parse_number(&caps[1]);
        let seconds = parse_number(&caps[2]);
        let centiseconds = parse_number(&caps[3]);
        let timestamp = (minutes * 60 + seconds) * 1000 + centiseconds * 10;

        push_non_empty(&mut lyrics, caps[4].trim(), timestamp);
    }

    lyrics
}

fn parse_vtt(content: &str) -> Vec<TimedLine> {
    let mut lyrics = Vec::new();

    for block in split_blocks(content) {
        let lines: Vec<&str> = block.trim().split('\n').collect();
        let Some(timing_line) = lines.iter().find(|line| line.contains("-->")) else {
            continue;
        };
        let Some(caps) = VTT_TIMING.captures(timing_line) else {
            debug!("Skipping VTT cue with malformed timing: {:?}", timing_line);
            continue;
        };
        let start = clock_to_ms(
            parse_number(&caps[1]),
            parse_number(&caps[2]),
            parse_number(&caps[3]),
            parse_number(&caps[4]),
        );

        let text_lines: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| !line.contains("-->") && !CUE_INDEX.is_match(line))
            .collect();
        let text = strip_markup_tags(&text_lines.join(" "));
        push_non_empty(&mut lyrics, text.trim(), start);
    }

    lyrics
}

/// Section tracking for the ASS line walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssSection {
    OutsideEvents,
    InsideEvents,
}

fn parse_ass(content: &str) -> Vec<TimedLine> {
    let mut lyrics = Vec::new();
    let mut section = AssSection::OutsideEvents;

    for line in content.split('\n') {
        if line.trim() == "[Events]" {
            section = AssSection::InsideEvents;
            continue;
        }
        if line.starts_with('[') {
            section = AssSection::OutsideEvents;
            continue;
        }
        if section != AssSection::InsideEvents || !line.starts_with("Dialogue:") {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < ASS_DIALOGUE_FIELDS {
            continue;
        }
        let Some(start) = parse_ass_time(fields[1]) else {
            debug!("Skipping ASS dialogue with malformed start: {:?}", fields[1]);
            continue;
        };

        let text = strip_override_tags(&fields[ASS_TEXT_FIELD..].join(","))
            .replace("\\N", " ")
            .replace("\\n", " ")
            .replace("\\h", " ");
        push_non_empty(&mut lyrics, text.trim(), start);
    }

    lyrics
}

/// Parse an ASS `H:MM:SS.cc` time into milliseconds
fn parse_ass_time(value: &str) -> Option<u64> {
    let caps = ASS_TIME.captures(value)?;
    // hours are unbounded, so out-of-range values drop the line
    let hours: u64 = caps[1].parse().ok()?;
    let minutes = parse_number(&caps[2]);
    let seconds = parse_number(&caps[3]);
    let centiseconds = parse_number(&caps[4]);
    hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?
        .checked_mul(1000)?
        .checked_add(centiseconds * 10)
}

fn push_non_empty(lyrics: &mut Vec<TimedLine>, text: &str, timestamp_ms: u64) {
    if !text.is_empty() {
        lyrics.push(TimedLine::new(text, timestamp_ms));
    }
}
