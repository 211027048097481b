use chrono::{DateTime, Utc};
use thiserror::Error;

const MOOD_EMOJIS: [&str; 10] = [
    "😢", "😔", "😐", "🙂", "😊", "😄", "😁", "🤩", "🥳", "🎉",
];

/// Self-reported mood on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns `MoodError::OutOfRange` if the value is not in `1..=10`.
    pub fn new(value: u8) -> Result<Self, MoodError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MoodError::OutOfRange(value))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Emoji shown next to the slider.
    ///
    /// The ladder is compressed (`(v - 1) * 0.9`), so a 10 shows the ninth face.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        let index = (usize::from(self.0 - 1) * 9) / 10;
        MOOD_EMOJIS[index.min(MOOD_EMOJIS.len() - 1)]
    }
}

impl Default for MoodScore {
    fn default() -> Self {
        Self(7)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoodError {
    #[error("mood must be between 1 and 10, got {0}")]
    OutOfRange(u8),
}

/// A saved mood check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    pub score: MoodScore,
    pub recorded_at: DateTime<Utc>,
}
