use std::time::Duration;

use rand::rngs::StdRng;
use wellness_core::model::ConversationTurn;

use crate::error::ChatError;
use crate::responder::{self, REPLY_DELAY_MAX, REPLY_DELAY_MIN, Topic, WELCOME_MESSAGE};

/// Delay before the welcome message appears.
pub const WELCOME_DELAY: Duration = Duration::from_secs(1);

/// A reply that the view should reveal after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub user: ConversationTurn,
    pub reply: ConversationTurn,
    pub topic: Option<Topic>,
    pub delay: Duration,
}

/// Chat widget controller: owns the random source used for replies and delays.
pub struct ChatService {
    rng: StdRng,
    delay_min: Duration,
    delay_max: Duration,
}

impl ChatService {
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            delay_min: REPLY_DELAY_MIN,
            delay_max: REPLY_DELAY_MAX,
        }
    }

    /// Override the typing delay bounds.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::InvalidDelay` if `min > max`.
    pub fn with_reply_delay(mut self, min: Duration, max: Duration) -> Result<Self, ChatError> {
        if min > max {
            return Err(ChatError::InvalidDelay { min, max });
        }
        self.delay_min = min;
        self.delay_max = max;
        Ok(self)
    }

    #[must_use]
    pub fn reply_delay_bounds(&self) -> (Duration, Duration) {
        (self.delay_min, self.delay_max)
    }

    #[must_use]
    pub fn welcome_turn(&self) -> ConversationTurn {
        ConversationTurn::assistant(WELCOME_MESSAGE)
    }

    /// Accept a user message. Blank input is ignored.
    ///
    /// Each accepted message gets its own delay; replies are not ordered
    /// relative to each other.
    pub fn submit(&mut self, raw: &str) -> Option<PendingReply> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let topic = responder::classify(text);
        let reply = responder::respond(text, &mut self.rng);
        let delay = responder::sample_reply_delay(&mut self.rng, self.delay_min, self.delay_max);
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(?topic, delay_ms, "chat reply scheduled");

        Some(PendingReply {
            user: ConversationTurn::user(text),
            reply: ConversationTurn::assistant(reply),
            topic,
            delay,
        })
    }
}
