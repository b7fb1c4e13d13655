use crate::errors::{ConfigError, LyricResult};
use crate::playback::{DisplayTiming, TransitionTiming};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable playback constants. Every field falls back to its default when
/// missing from a JSON document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub display: DisplayTiming,
    pub transition: TransitionTiming,
}

impl PlayerConfig {
    pub fn from_json_str(json: &str) -> LyricResult<Self> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> LyricResult<Self> {
        let path = path.as_ref();
        debug!("Reading player config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        for (name, timing) in [
            ("short", &display.short),
            ("normal", &display.normal),
            ("rapid", &display.rapid),
        ] {
            if timing.per_char_ms == 0 && timing.floor_ms == 0 {
                return Err(ConfigError::new(format!(
                    "{} phrase timing must have a non-zero floor or per-character rate",
                    name
                )));
            }
        }
        if display.short_max_words > display.rapid_min_words {
            return Err(ConfigError::new(format!(
                "short_max_words ({}) exceeds rapid_min_words ({})",
                display.short_max_words, display.rapid_min_words
            )));
        }
        Ok(())
    }
}
