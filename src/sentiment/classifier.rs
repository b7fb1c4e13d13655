use super::lexicon::{categories_of, intensity_of};
use super::types::{LineSentiment, Sentiment, SentimentScores};

/// Lowercase `text`, blank out everything that is neither an ASCII word
/// character nor whitespace, and split into tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Accumulate category scores for `text`.
///
/// An intensity modifier sets the multiplier for its own token. The
/// multiplier resets to 1.0 after every token except the last, so a modifier
/// only weighs in when it is itself a lexicon word or ends the line.
pub fn score(text: &str) -> SentimentScores {
    let mut scores = SentimentScores::default();
    let mut multiplier = 1.0;

    let tokens = tokenize(text);
    for (index, token) in tokens.iter().enumerate() {
        if let Some(level) = intensity_of(token) {
            multiplier = level.multiplier();
        }

        for sentiment in categories_of(token) {
            scores.add(sentiment, multiplier);
        }

        if index + 1 < tokens.len() {
            multiplier = 1.0;
        }
    }

    scores
}

/// Classify a line of text. Pure and deterministic.
pub fn classify(text: &str) -> Sentiment {
    score(text).dominant()
}

/// Label of a single word: the first category (in fixed order) listing it
pub fn classify_word(word: &str) -> Sentiment {
    let normalized: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    let found = categories_of(&normalized).next();
    found.unwrap_or(Sentiment::Neutral)
}

pub fn classify_batch<I, T>(texts: I) -> Vec<LineSentiment>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| {
            let text = text.as_ref();
            LineSentiment {
                text: text.to_string(),
                sentiment: classify(text),
            }
        })
        .collect()
}
