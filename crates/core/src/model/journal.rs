use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Minimum number of characters in a journal entry, after trimming.
pub const MIN_JOURNAL_CHARS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JournalError {
    #[error("journal entry needs at least {min} characters, got {len}")]
    TooShort { min: usize, len: usize },
}

/// Unvalidated text typed into the journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    pub text: String,
    pub tags: Vec<String>,
}

impl JournalDraft {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// # Errors
    ///
    /// Returns `JournalError::TooShort` if the trimmed text is under
    /// `MIN_JOURNAL_CHARS` characters.
    pub fn validate(self, now: DateTime<Utc>) -> Result<JournalEntry, JournalError> {
        let text = self.text.trim();
        let len = text.chars().count();
        if len < MIN_JOURNAL_CHARS {
            return Err(JournalError::TooShort {
                min: MIN_JOURNAL_CHARS,
                len,
            });
        }
        Ok(JournalEntry {
            text: text.to_string(),
            tags: self.tags,
            saved_at: now,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub text: String,
    pub tags: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

impl JournalEntry {
    /// True if the entry was saved during the seven days ending at `now`.
    #[must_use]
    pub fn is_within_week(&self, now: DateTime<Utc>) -> bool {
        self.saved_at <= now && now - self.saved_at < Duration::days(7)
    }
}
