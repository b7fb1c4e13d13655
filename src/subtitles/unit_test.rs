use crate::errors::LyricError;
use crate::subtitles::{
    format_timestamp, parse_subtitle_file, parse_subtitle_file_strict, title_from_file_name,
    LyricSet, SourceKind, SubtitleFormat, TimedLine,
};

#[cfg(test)]
mod test_helpers {
    pub const SRT_SAMPLE: &str = "1\n00:00:01,500 --> 00:00:04,000\n<i>First</i> things\nfirst\n\n2\n00:01:02,003 --> 01:00:00,000\nI'm fired up\n\n3\nbroken timing line\nNever shown\n\n4\n00:00:09,000 --> 00:00:12,000\n<b></b>\n";

    pub const VTT_SAMPLE: &str = "WEBVTT\n\nNOTE written by hand\n\n1\n00:00:00.250 --> 00:00:03.000\n<v Singer>Send a prayer</v>\n\n00:00:03.000 --> 00:00:06.000 align:start\nto the ones\nup above\n\n2\n00:00:06,000 --> 00:00:09,000\ncomma is not a VTT separator\n";

    pub const ASS_SAMPLE: &str = "[Script Info]\nTitle: test\nDialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,Not in events\n\n[V4+ Styles]\nFormat: Name, Fontname\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\nDialogue: 0,0:00:05.50,0:00:07.00,Default,,0,0,0,,{\\i1}Later{\\i0}, with a comma\nDialogue: 0,0:00:01.25,0:00:03.00,Default,,0,0,0,,Earlier\\Nline\nDialogue: 0,bad,0:00:03.00,Default,,0,0,0,,Dropped\nDialogue: 0,0:00:02.00,0:00:03.00,Default,,0,0,0,,{\\b1}\nComment: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,Comment line\n";
}

#[test]
fn test_format_hint_resolution() {
    assert_eq!(SubtitleFormat::from_hint("srt"), Some(SubtitleFormat::Srt));
    assert_eq!(SubtitleFormat::from_hint("Song.LRC"), Some(SubtitleFormat::Lrc));
    assert_eq!(SubtitleFormat::from_hint("a.b.vtt"), Some(SubtitleFormat::Vtt));
    assert_eq!(SubtitleFormat::from_hint("movie.SSA"), Some(SubtitleFormat::Ass));
    assert_eq!(SubtitleFormat::from_hint("movie.ass"), Some(SubtitleFormat::Ass));
    assert_eq!(SubtitleFormat::from_hint("notes.txt"), None);
    assert_eq!(SubtitleFormat::from_hint(""), None);
}

#[test]
fn test_parse_srt_keeps_start_time_only() {
    use test_helpers::*;
    let lines = parse_subtitle_file(SRT_SAMPLE, "song.srt");
    assert_eq!(
        lines,
        vec![
            TimedLine::new("First things first", 1500),
            TimedLine::new("I'm fired up", 62_003),
        ]
    );
}

#[test]
fn test_parse_srt_is_not_resorted() {
    let content = "1\n00:00:05,000 --> 00:00:06,000\nlate\n\n2\n00:00:01,000 --> 00:00:02,000\nearly";
    let lines = parse_subtitle_file(content, "srt");
    assert_eq!(lines[0].text, "late");
    assert_eq!(lines[1].text, "early");
}

#[test]
fn test_parse_srt_with_crlf() {
    let content = "1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\nthere\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nagain\r\n";
    let lines = parse_subtitle_file(content, "srt");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], TimedLine::new("Hello there", 1000));
    assert_eq!(lines[1], TimedLine::new("again", 3000));
}

#[test]
fn test_parse_lrc_sorts_by_timestamp() {
    let lines = parse_subtitle_file("[00:03.00]hello\n[00:00.00]world", "lrc");
    assert_eq!(
        lines,
        vec![TimedLine::new("world", 0), TimedLine::new("hello", 3000)]
    );
}

#[test]
fn test_parse_lrc_skips_metadata_and_empty_lines() {
    let content = "[ar:Someone]\n[ti:Song]\n[01:02.34]  first  \n[00:10.00]\nplain text\n[00:05.5]short centis";
    let lines = parse_subtitle_file(content, "lrc");
    assert_eq!(lines, vec![TimedLine::new("first", 62_340)]);
}

#[test]
fn test_parse_vtt_cues() {
    use test_helpers::*;
    let lines = parse_subtitle_file(VTT_SAMPLE, "clip.vtt");
    assert_eq!(
        lines,
        vec![
            TimedLine::new("Send a prayer", 250),
            TimedLine::new("to the ones up above", 3000),
        ]
    );
}

#[test]
fn test_parse_ass_events_section_only() {
    use test_helpers::*;
    let lines = parse_subtitle_file(ASS_SAMPLE, "karaoke.ass");
    assert_eq!(
        lines,
        vec![
            TimedLine::new("Earlier line", 1250),
            TimedLine::new("Later, with a comma", 5500),
        ]
    );
}

#[test]
fn test_parse_ass_leaves_events_on_new_section() {
    let content = "[Events]\nDialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,kept\n[Fonts]\nDialogue: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,ignored\n";
    let lines = parse_subtitle_file(content, "ssa");
    assert_eq!(lines, vec![TimedLine::new("kept", 1000)]);
}

#[test]
fn test_parse_ass_drops_overflowing_hours() {
    let content = "[Events]\nDialogue: 0,9999999999999999:00:00.00,0:00:02.00,Default,,0,0,0,,too late\nDialogue: 0,99999999999999999999999:00:00.00,0:00:02.00,Default,,0,0,0,,way too late\nDialogue: 0,10:00:00.00,10:00:02.00,Default,,0,0,0,,kept\n";
    let lines = parse_subtitle_file(content, "ass");
    assert_eq!(lines, vec![TimedLine::new("kept", 36_000_000)]);
}

#[test]
fn test_unknown_format_is_soft_empty() {
    let lines = parse_subtitle_file("[00:01.00]hi", "lyrics.txt");
    assert!(lines.is_empty());
}

#[test]
fn test_strict_parse_reports_errors() {
    let unknown = parse_subtitle_file_strict("[00:01.00]hi", "lyrics.txt");
    assert!(matches!(unknown, Err(LyricError::Parse(_))));

    let empty = parse_subtitle_file_strict("nothing timed here", "lyrics.lrc");
    assert!(matches!(empty, Err(LyricError::Parse(_))));

    let ok = parse_subtitle_file_strict("[00:01.00]hi", "lyrics.lrc").unwrap();
    assert_eq!(ok.len(), 1);
}

#[test]
fn test_lyric_set_from_subtitle() {
    let set = LyricSet::from_subtitle("music/believer.lrc", "[00:01.00]Pain!").unwrap();
    assert_eq!(set.title(), "believer");
    assert_eq!(set.source(), SourceKind::File);
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0).map(|line| line.timestamp_ms), Some(1000));
}

#[test]
fn test_title_from_file_name() {
    assert_eq!(title_from_file_name("song.srt"), "song");
    assert_eq!(title_from_file_name("my.song.final.vtt"), "my.song.final");
    assert_eq!(title_from_file_name("noext"), "noext");
}

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp(0), "00:00:00,000");
    assert_eq!(format_timestamp(62_003), "00:01:02,003");
    assert_eq!(format_timestamp(3_723_456), "01:02:03,456");
}
