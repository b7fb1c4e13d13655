mod classifier;
pub mod lexicon;
mod types;

pub use classifier::{classify, classify_batch, classify_word, score};
pub use types::{Intensity, LineSentiment, Sentiment, SentimentScores};
