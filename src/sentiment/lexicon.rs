//! Static word tables driving classification.
//!
//! The lists are reproduced verbatim, duplicates included; membership is
//! what matters so duplicates are harmless.

use super::types::{Intensity, Sentiment};
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const HAPPY_WORDS: &[&str] = &[
    "love", "joy", "amazing", "wonderful", "fantastic", "great", "awesome", "beautiful", "perfect",
    "excellent", "brilliant", "incredible", "superb", "outstanding", "marvelous", "delightful",
    "pleasant", "cheerful", "glad", "thrilled", "excited", "ecstatic", "elated", "jubilant",
    "blissful", "euphoric", "overjoyed", "radiant", "bright", "sunny", "uplifting", "inspiring",
    "motivating", "encouraging", "positive", "optimistic", "hopeful", "confident", "proud",
    "satisfied", "content", "peaceful", "calm", "serene", "believer", "believe", "dream", "hope",
    "fly", "soar", "rise", "shine", "glow", "sparkle", "dance", "sing", "laugh", "smile",
];

pub const SAD_WORDS: &[&str] = &[
    "sad", "cry", "tears", "sorrow", "grief", "pain", "hurt", "broken", "heartache", "lonely",
    "empty", "lost", "hopeless", "despair", "misery", "anguish", "agony", "suffering", "torment",
    "distress", "troubled", "worried", "anxious", "fearful", "scared", "afraid", "terrified",
    "nightmare", "dark", "shadow", "cold", "numb", "weak", "fragile", "vulnerable", "helpless",
    "powerless", "defeated", "crushed", "shattered", "destroyed", "ruined", "gone", "goodbye",
    "farewell", "end", "over", "never", "nothing", "nobody", "alone", "isolated", "abandoned",
    "rejected", "unwanted", "unloved", "worthless", "useless", "failure", "mistake", "regret",
    "sorry", "forgive", "miss", "yearn", "long", "wish", "sulking", "heartache",
];

pub const ANGRY_WORDS: &[&str] = &[
    "angry", "mad", "rage", "fury", "hate", "hatred", "disgusted", "annoyed", "irritated",
    "frustrated", "furious", "livid", "enraged", "infuriated", "outraged", "incensed", "irate",
    "wrathful", "hostile", "aggressive", "violent", "brutal", "cruel", "harsh", "severe", "fierce",
    "intense", "wild", "savage", "vicious", "nasty", "mean", "evil", "wicked", "terrible",
    "horrible", "awful", "disgusting", "revolting", "repulsive", "sickening", "appalling",
    "shocking", "outrageous", "unacceptable", "intolerable", "unbearable", "fight", "battle", "war",
    "attack", "strike", "hit", "punch", "kick", "smash", "break", "destroy", "kill", "murder",
    "blood", "fire", "burn", "explode", "bullets", "pain",
];

pub const CALM_WORDS: &[&str] = &[
    "calm", "peace", "peaceful", "quiet", "still", "serene", "tranquil", "relaxed", "gentle",
    "soft", "smooth", "easy", "comfortable", "cozy", "warm", "tender", "kind", "sweet", "mild",
    "light", "floating", "drifting", "flowing", "gliding", "sailing", "walking", "resting",
    "sleeping", "dreaming", "meditation", "breathing", "whisper", "murmur", "sigh", "breeze",
    "wind", "water", "ocean", "sea", "lake", "river", "stream", "garden", "nature", "trees",
    "flowers", "birds", "silence", "harmony", "balance", "center", "focus", "mindful", "aware",
    "present", "now", "here", "home", "safe", "secure", "protected", "shelter", "comfort",
    "embrace", "hug", "prayer", "spirit", "dove", "heaven", "angel",
];

pub const ENERGETIC_WORDS: &[&str] = &[
    "energy", "power", "strong", "fierce", "intense", "wild", "crazy", "insane", "mad", "rush",
    "fast", "quick", "speed", "run", "jump", "leap", "bounce", "pump", "rock", "roll", "party",
    "celebrate", "festival", "concert", "music", "beat", "rhythm", "bass", "loud", "boom", "bang",
    "crash", "thunder", "lightning", "electric", "shock", "spark", "fire", "flame", "burn", "hot",
    "heat", "sweat", "work", "effort", "drive", "push", "pull", "lift", "carry", "move", "action",
    "go", "start", "begin", "launch", "blast", "rocket", "fly", "soar", "high", "up", "top",
    "peak", "max", "ultimate", "extreme", "radical", "awesome", "incredible", "amazing", "wow",
    "yeah", "yes", "fired", "master", "rain", "bullets",
];

pub const HIGH_INTENSITY_WORDS: &[&str] = &[
    "very", "extremely", "incredibly", "absolutely", "completely", "totally", "utterly",
    "entirely", "fully", "really", "truly", "deeply", "strongly", "highly", "super", "ultra",
    "mega", "so", "too", "quite", "rather", "pretty", "all", "every", "everything", "nothing",
    "never", "always", "forever",
];

// The multi-word entries can never equal a single token; kept for parity
// with the word list as published.
pub const MEDIUM_INTENSITY_WORDS: &[&str] = &[
    "somewhat", "fairly", "relatively", "moderately", "slightly", "a bit", "a little", "kind of",
    "sort of", "rather",
];

pub const LOW_INTENSITY_WORDS: &[&str] = &[
    "barely", "hardly", "scarcely", "almost", "nearly", "just", "only", "merely",
];

type WordSet = HashSet<&'static str>;

static CATEGORY_SETS: Lazy<[(Sentiment, WordSet); 5]> = Lazy::new(|| {
    [
        (Sentiment::Happy, HAPPY_WORDS.iter().copied().collect()),
        (Sentiment::Sad, SAD_WORDS.iter().copied().collect()),
        (Sentiment::Angry, ANGRY_WORDS.iter().copied().collect()),
        (Sentiment::Calm, CALM_WORDS.iter().copied().collect()),
        (Sentiment::Energetic, ENERGETIC_WORDS.iter().copied().collect()),
    ]
});

static INTENSITY_SETS: Lazy<[(Intensity, WordSet); 3]> = Lazy::new(|| {
    [
        (Intensity::High, HIGH_INTENSITY_WORDS.iter().copied().collect()),
        (Intensity::Medium, MEDIUM_INTENSITY_WORDS.iter().copied().collect()),
        (Intensity::Low, LOW_INTENSITY_WORDS.iter().copied().collect()),
    ]
});

/// Word list of a scoring category; empty for `Neutral`
pub fn words_for(sentiment: Sentiment) -> &'static [&'static str] {
    match sentiment {
        Sentiment::Happy => HAPPY_WORDS,
        Sentiment::Sad => SAD_WORDS,
        Sentiment::Angry => ANGRY_WORDS,
        Sentiment::Calm => CALM_WORDS,
        Sentiment::Energetic => ENERGETIC_WORDS,
        Sentiment::Neutral => &[],
    }
}

/// Categories (in scoring order) whose word list contains `token`
pub fn categories_of(token: &str) -> impl Iterator<Item = Sentiment> + '_ {
    CATEGORY_SETS
        .iter()
        .filter(move |(_, words)| words.contains(token))
        .map(|(sentiment, _)| *sentiment)
}

/// Intensity level of a modifier word. High wins over medium for words in both lists.
pub fn intensity_of(token: &str) -> Option<Intensity> {
    INTENSITY_SETS
        .iter()
        .find(|(_, words)| words.contains(token))
        .map(|(level, _)| *level)
}
