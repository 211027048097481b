//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

use wellness_core::model::{ActivityId, ContactError, HabitError, JournalError, MIN_JOURNAL_CHARS};

/// Errors emitted by `ChatService` configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatError {
    #[error("reply delay minimum {min:?} exceeds maximum {max:?}")]
    InvalidDelay { min: Duration, max: Duration },
}

/// Errors emitted by `GardenService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GardenError {
    #[error("unknown activity: {0}")]
    UnknownActivity(ActivityId),
}

/// Errors emitted by `HubService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HubError {
    #[error(transparent)]
    Journal(#[from] JournalError),
    #[error(transparent)]
    Habit(#[from] HabitError),
}

impl HubError {
    /// Text for the toast shown when an action is refused.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HubError::Journal(JournalError::TooShort { .. }) => format!(
                "Please write at least {MIN_JOURNAL_CHARS} characters for your journal entry."
            ),
            HubError::Habit(HabitError::EmptyName) => "Please enter a habit name.".to_string(),
            HubError::Habit(_) => "That habit is no longer on the list.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Errors emitted by `ContactService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactServiceError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
}

impl ContactServiceError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ContactServiceError::Invalid(ContactError::InvalidEmail) => {
                "Please enter a valid email address.".to_string()
            }
            ContactServiceError::Invalid(err) => {
                let mut message = err.to_string();
                if let Some(first) = message.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{message}.")
            }
        }
    }
}
