//! Built-in sample lyrics used when no file is supplied.

use crate::subtitles::{LyricSet, SourceKind, TimedLine};

/// Sample lyric lines, three seconds apart
const DEMO_LINES: &[&str] = &[
    "First things first",
    "I'ma say all the words inside my head",
    "I'm fired up",
    "And tired of the way that things have been",
    "Oh-ooh",
    "The way that things have been",
    "Oh-ooh",
    "Second things second",
    "Don't you tell me what you think that I could be",
    "I'm the one at the sail",
    "I'm the master of my sea",
    "Oh-ooh",
    "The master of my sea",
    "Oh-ooh",
    "I was broken from a young age",
    "Taking my sulking to the masses",
    "Writing my poems for the few",
    "That look at me, took to me, shook to me, feeling me",
    "Singing from heartache from the pain",
    "Taking my message from the veins",
    "Speaking my lesson from the brain",
    "Seeing the beauty through the...",
    "Pain!",
    "You made me a, you made me a believer, believer",
    "Pain!",
    "You break me down and build me up, believer, believer",
    "Pain!",
    "Oh, let the bullets fly, oh, let them rain",
    "My life, my love, my drive, it came from...",
    "Pain!",
    "You made me a, you made me a believer, believer",
    "Third things third",
    "Send a prayer to the ones up above",
    "All the hate that you've heard",
    "Has turned your spirit to a dove",
    "Oh-ooh",
    "Your spirit up above",
    "Oh-ooh",
];

const DEMO_SPACING_MS: u64 = 3000;

pub const SAMPLE_SRT: &str = "1
00:00:00,000 --> 00:00:03,000
First things first

2
00:00:03,000 --> 00:00:06,000
I'ma say all the words inside my head

3
00:00:06,000 --> 00:00:09,000
I'm fired up

4
00:00:09,000 --> 00:00:12,000
And tired of the way that things have been";

pub const SAMPLE_LRC: &str = "[00:00.00]First things first
[00:03.00]I'ma say all the words inside my head
[00:06.00]I'm fired up
[00:09.00]And tired of the way that things have been";

pub fn demo_lines() -> Vec<TimedLine> {
    DEMO_LINES
        .iter()
        .enumerate()
        .map(|(i, text)| TimedLine::new(*text, i as u64 * DEMO_SPACING_MS))
        .collect()
}

/// The sample lyrics as a demo-sourced set
pub fn demo_lyric_set(title: impl Into<String>) -> LyricSet {
    LyricSet::new(title, demo_lines(), SourceKind::Demo)
}
