use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotional label assigned to a line of text
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Happy,
    Sad,
    Angry,
    Calm,
    Energetic,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Scoring categories in their fixed fallback order
    pub const CATEGORIES: [Sentiment; 5] = [
        Sentiment::Happy,
        Sentiment::Sad,
        Sentiment::Angry,
        Sentiment::Calm,
        Sentiment::Energetic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Happy => "happy",
            Sentiment::Sad => "sad",
            Sentiment::Angry => "angry",
            Sentiment::Calm => "calm",
            Sentiment::Energetic => "energetic",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Multiplier strength of an intensity modifier word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    High,
    Medium,
    Low,
}

impl Intensity {
    pub fn multiplier(&self) -> f64 {
        match self {
            Intensity::High => 2.0,
            Intensity::Medium => 1.5,
            Intensity::Low => 0.5,
        }
    }
}

/// Accumulated per-category scores for one piece of text
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScores {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub calm: f64,
    pub energetic: f64,
}

impl SentimentScores {
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Happy => self.happy,
            Sentiment::Sad => self.sad,
            Sentiment::Angry => self.angry,
            Sentiment::Calm => self.calm,
            Sentiment::Energetic => self.energetic,
            Sentiment::Neutral => 0.0,
        }
    }

    pub(crate) fn add(&mut self, sentiment: Sentiment, amount: f64) {
        match sentiment {
            Sentiment::Happy => self.happy += amount,
            Sentiment::Sad => self.sad += amount,
            Sentiment::Angry => self.angry += amount,
            Sentiment::Calm => self.calm += amount,
            Sentiment::Energetic => self.energetic += amount,
            Sentiment::Neutral => {}
        }
    }

    pub fn max(&self) -> f64 {
        Sentiment::CATEGORIES
            .iter()
            .map(|s| self.get(*s))
            .fold(0.0, f64::max)
    }

    /// Pick the winning label.
    ///
    /// When more than one category scored, angry wins if sad also scored and
    /// angry is at least as high; otherwise energetic wins over happy under
    /// the same condition. Failing both, the first category at the maximum in
    /// [`Sentiment::CATEGORIES`] order wins.
    pub fn dominant(&self) -> Sentiment {
        let max = self.max();
        if max == 0.0 {
            return Sentiment::Neutral;
        }

        let active = Sentiment::CATEGORIES
            .iter()
            .filter(|s| self.get(**s) > 0.0)
            .count();

        if active > 1 {
            if self.sad > 0.0 && self.angry > 0.0 && self.angry >= self.sad {
                return Sentiment::Angry;
            }
            if self.happy > 0.0 && self.energetic > 0.0 && self.energetic >= self.happy {
                return Sentiment::Energetic;
            }
        }

        Sentiment::CATEGORIES
            .iter()
            .copied()
            .find(|s| self.get(*s) == max)
            .unwrap_or(Sentiment::Neutral)
    }
}

/// A line of text paired with its label
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LineSentiment {
    pub text: String,
    pub sentiment: Sentiment,
}
