use lyricmood::demo::demo_lyric_set;
use lyricmood::playback::{spawn_playback_with_observers, PlaybackObserver};
use lyricmood::subtitles::format_timestamp;
use lyricmood::{classify, load_lyrics, LyricSet, PlaybackEvent, PlayerConfig};
use std::env;

struct Options {
    source: String,
    speed: f64,
    play: bool,
    config_path: Option<String>,
}

fn main() {
    println!("🎵 Lyric Player - Sentiment Timeline");
    println!("====================================");

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args) else {
        println!("Uso: lyric_player <arquivo.srt|lrc|vtt|ass|--demo> [speed] [--play] [--config config.json]");
        println!("Exemplo: lyric_player tests/testdata/believer.lrc 1.5 --play");
        return;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            println!("\n❌ Could not start runtime: {}", e);
            return;
        }
    };

    match runtime.block_on(run(options)) {
        Ok(_) => println!("\n✅ Done"),
        Err(e) => println!("\n❌ Failed: {}", e),
    }
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut source = None;
    let mut speed = 1.0;
    let mut play = false;
    let mut config_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--play" => play = true,
            "--config" => config_path = Some(iter.next()?.clone()),
            value if source.is_none() => source = Some(value.to_string()),
            value => speed = value.parse().ok()?,
        }
    }

    Some(Options {
        source: source?,
        speed,
        play,
        config_path,
    })
}

async fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &options.config_path {
        Some(path) => PlayerConfig::from_json_file(path)?,
        None => PlayerConfig::default(),
    };

    let set = if options.source == "--demo" {
        demo_lyric_set("Demo: Believer")
    } else {
        load_lyrics(options.source.clone()).await?
    };

    print_plan(&set, &config, options.speed);

    if options.play {
        play_in_real_time(set, config, options.speed).await?;
    }
    Ok(())
}

fn print_plan(set: &LyricSet, config: &PlayerConfig, speed: f64) {
    println!("📄 Title: {}", set.title());
    println!("📏 Lines: {}", set.len());
    println!();

    for line in set.lines() {
        let kind = config.display.phrase_kind(&line.text);
        let duration = config.display.scaled_duration_ms(&line.text, speed);
        println!(
            "[{}] {:<9} {:<6} {:>5} ms  {}",
            format_timestamp(line.timestamp_ms),
            classify(&line.text).name(),
            format!("{:?}", kind).to_lowercase(),
            duration,
            line.text
        );
    }
}

/// Prints events as they happen
struct ConsoleObserver;

impl PlaybackObserver for ConsoleObserver {
    fn on_event(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::LineShown { index, line, .. } => {
                println!("▶️  {:>3}: {}", index + 1, line.text)
            }
            PlaybackEvent::TransitionStarted { from, to } => println!("🎨 {} → {}", from, to),
            PlaybackEvent::Finished => println!("⏹️  Finished"),
            _ => {}
        }
    }
}

async fn play_in_real_time(
    set: LyricSet,
    config: PlayerConfig,
    speed: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    let (handle, task) = spawn_playback_with_observers(config, vec![Box::new(ConsoleObserver)]);
    let mut updates = handle.subscribe();

    handle.load(set)?;
    handle.set_speed(speed)?;
    handle.play()?;

    loop {
        updates.changed().await?;
        let snapshot = updates.borrow_and_update().clone();
        if !snapshot.is_playing && snapshot.current_index >= snapshot.line_count {
            break;
        }
    }

    handle.shutdown()?;
    task.await?;
    Ok(())
}
