use wellness_core::model::{ConversationTurn, Sender};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessageVm {
    pub key: usize,
    pub avatar: &'static str,
    pub username: &'static str,
    pub text: String,
    pub from_assistant: bool,
}

impl ChatMessageVm {
    #[must_use]
    pub fn from_turn(key: usize, turn: &ConversationTurn) -> Self {
        let from_assistant = turn.sender() == Sender::Assistant;
        Self {
            key,
            avatar: if from_assistant { "Y" } else { "You" },
            username: if from_assistant { "Yuvaa" } else { "You" },
            text: turn.text().to_string(),
            from_assistant,
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.from_assistant {
            "message yuvaa-message"
        } else {
            "message"
        }
    }
}

/// Messages shown in the chat widget plus the count of replies still "typing".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessageVm>,
    pending: usize,
    welcomed: bool,
}

impl ChatLog {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessageVm] {
        &self.messages
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    pub fn push(&mut self, turn: &ConversationTurn) {
        let key = self.messages.len();
        self.messages.push(ChatMessageVm::from_turn(key, turn));
    }

    /// Post the welcome message once per page session.
    pub fn welcome(&mut self, turn: &ConversationTurn) -> bool {
        if self.welcomed {
            return false;
        }
        self.welcomed = true;
        self.push(turn);
        true
    }

    pub fn begin_reply(&mut self) {
        self.pending += 1;
    }

    pub fn finish_reply(&mut self, turn: &ConversationTurn) {
        self.pending = self.pending.saturating_sub(1);
        self.push(turn);
    }
}
