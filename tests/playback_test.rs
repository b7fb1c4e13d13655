use lyricmood::demo::{demo_lyric_set, SAMPLE_LRC, SAMPLE_SRT};
use lyricmood::playback::{spawn_playback, EventLog};
use lyricmood::{
    analyze_lyrics, parse_subtitle_file, LyricError, LyricSet, PlaybackEvent, PlayerConfig,
    Sentiment, Sequencer, SourceKind,
};
use std::time::Duration;

#[test]
fn test_sample_srt_and_lrc_agree() {
    let srt = parse_subtitle_file(SAMPLE_SRT, "sample.srt");
    let lrc = parse_subtitle_file(SAMPLE_LRC, "sample.lrc");
    assert_eq!(srt.len(), 4);
    assert_eq!(srt, lrc);
}

#[test]
fn test_demo_set_sentiments() {
    let set = demo_lyric_set("Demo: Believer");
    assert_eq!(set.source(), SourceKind::Demo);
    assert_eq!(set.len(), 38);
    assert_eq!(set.lines().last().map(|l| l.timestamp_ms), Some(111_000));

    let analysis = analyze_lyrics(&set);
    let label = |text: &str| {
        analysis
            .iter()
            .find(|line| line.text == text)
            .map(|line| line.sentiment)
    };
    assert_eq!(label("I'm fired up"), Some(Sentiment::Energetic));
    assert_eq!(label("Pain!"), Some(Sentiment::Angry));
    assert_eq!(label("I was broken from a young age"), Some(Sentiment::Sad));
    assert_eq!(label("Send a prayer to the ones up above"), Some(Sentiment::Calm));
    assert_eq!(label("Oh-ooh"), Some(Sentiment::Neutral));
}

#[test]
fn test_parsed_file_plays_to_completion() {
    let set = LyricSet::from_subtitle("sample.srt", SAMPLE_SRT).unwrap();
    let log = EventLog::new();
    let mut sequencer = Sequencer::default();
    sequencer.subscribe(Box::new(log.clone()));
    sequencer.load(set);
    sequencer.play();

    sequencer.advance_clock_by(60_000);

    let state = sequencer.state();
    assert_eq!(state.current_index, 4);
    assert!(!state.is_playing);
    assert!(!state.is_transitioning);

    let shown: Vec<usize> = log
        .events()
        .iter()
        .filter_map(|event| match event {
            PlaybackEvent::LineShown { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(shown, vec![0, 1, 2, 3]);
    assert_eq!(log.events().last(), Some(&PlaybackEvent::Finished));
}

#[tokio::test(start_paused = true)]
async fn test_driver_plays_in_real_time() {
    let (handle, task) = spawn_playback(PlayerConfig::default());
    let set = LyricSet::from_subtitle("sample.lrc", SAMPLE_LRC).unwrap();

    handle.load(set).unwrap();
    handle.play().unwrap();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let snapshot = handle.snapshot();
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_index, 0);
    assert_eq!(snapshot.sentiment, Sentiment::Neutral);

    // "I'm fired up" shows at 5320 ms and its sentiment is adopted 300 ms later
    tokio::time::sleep(Duration::from_millis(5000)).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.current_index, 2);
    assert_eq!(snapshot.sentiment, Sentiment::Energetic);
    assert!(snapshot.is_transitioning);

    tokio::time::sleep(Duration::from_secs(60)).await;
    let snapshot = handle.snapshot();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.current_index, 4);
    assert_eq!(snapshot.progress_fraction, 1.0);

    handle.shutdown().unwrap();
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_driver_pause_and_speed() {
    let (handle, task) = spawn_playback(PlayerConfig::default());
    handle.load(demo_lyric_set("demo")).unwrap();

    assert!(matches!(
        handle.set_speed(0.0),
        Err(LyricError::InvalidArgument(_))
    ));

    handle.set_speed(2.0).unwrap();
    handle.play().unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.pause().unwrap();
    tokio::time::sleep(Duration::from_secs(30)).await;

    let snapshot = handle.snapshot();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.current_index, 0);
    assert_eq!(snapshot.speed_multiplier, 2.0);

    handle.restart().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    let snapshot = handle.snapshot();
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.speed_multiplier, 1.0);

    handle.shutdown().unwrap();
    task.await.unwrap();
}
