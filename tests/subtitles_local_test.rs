use lyricmood::subtitles::{load_lyric_set, InMemorySubtitle, LocalSubtitleFile};
use lyricmood::{load_lyrics, LyricError, SourceKind, TimedLine};
use std::io::Write;

fn expected_lines() -> Vec<TimedLine> {
    vec![
        TimedLine::new("Pain!", 66_000),
        TimedLine::new("You made me a, you made me a believer, believer", 69_000),
        TimedLine::new("Oh, let the bullets fly, oh, let them rain", 81_000),
        TimedLine::new("Send a prayer to the ones up above", 96_000),
    ]
}

fn testdata(name: &str) -> String {
    format!("{}/tests/testdata/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_read_local_subtitles_all_formats() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    for name in ["believer.srt", "believer.lrc", "believer.vtt", "believer.ass"] {
        let set = rt.block_on(load_lyrics(testdata(name)));
        assert!(set.is_ok(), "Erro ao ler {}: {:?}", name, set.err());

        let set = set.unwrap();
        assert_eq!(set.title(), "believer");
        assert_eq!(set.source(), SourceKind::File);
        assert_eq!(set.lines(), expected_lines().as_slice(), "format {}", name);
    }
}

#[test]
fn test_read_uppercase_extension_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Song.LRC");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[00:03.00]hello").unwrap();
    writeln!(file, "[00:00.00]world").unwrap();
    drop(file);

    let rt = tokio::runtime::Runtime::new().unwrap();
    let set = rt
        .block_on(load_lyric_set(LocalSubtitleFile::new(&path)))
        .unwrap();
    assert_eq!(set.title(), "Song");
    assert_eq!(
        set.lines(),
        &[TimedLine::new("world", 0), TimedLine::new("hello", 3000)]
    );
}

#[tokio::test]
async fn test_unsupported_file_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "[00:01.00]plain text lyrics").unwrap();

    let result = load_lyrics(file.path().to_string_lossy().into_owned()).await;
    assert!(matches!(result, Err(LyricError::Parse(_))));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = load_lyrics(testdata("does_not_exist.srt")).await;
    assert!(matches!(result, Err(LyricError::Other(_))));
}

#[tokio::test]
async fn test_in_memory_source() {
    let source = InMemorySubtitle::new("upload.vtt", "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nhi");
    let set = load_lyric_set(source).await.unwrap();
    assert_eq!(set.title(), "upload");
    assert_eq!(set.lines(), &[TimedLine::new("hi", 1000)]);
}
