//! Scripted replies for the chat widget.
//!
//! Input is lower-cased and checked against an ordered list of keyword rules;
//! the first rule with a keyword contained in the text wins. Anything else gets
//! a reply drawn from a fixed fallback pool using the caller's random source.

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

/// What a message was recognised as being about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Anxiety,
    Sadness,
    Stress,
    Help,
    Gratitude,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
    reply: &'static str,
}

// Order matters: "hi" also matches inside longer words, and greeting is checked first.
const RULES: [Rule; 6] = [
    Rule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey"],
        reply: "Hello! I'm Yuvaa, your AI wellness companion. I'm here to support you on your mental health journey. How are you feeling today?",
    },
    Rule {
        topic: Topic::Anxiety,
        keywords: &["anxious", "anxiety"],
        reply: "I understand that anxiety can be overwhelming. You're not alone in this. Would you like to try some breathing exercises or would you prefer to connect with a professional therapist?",
    },
    Rule {
        topic: Topic::Sadness,
        keywords: &["sad", "depressed"],
        reply: "I'm sorry you're feeling this way. Depression is really tough, but you're taking a great step by reaching out. Have you considered joining one of our anonymous support groups?",
    },
    Rule {
        topic: Topic::Stress,
        keywords: &["stress", "stressed"],
        reply: "Stress can be really challenging to manage. I'd recommend trying our mental health assessment to get personalized insights, or you could try some mindfulness exercises in our wellness hub.",
    },
    Rule {
        topic: Topic::Help,
        keywords: &["help", "support"],
        reply: "I'm here to help! You can access professional therapy, join anonymous group chats, or take our mental health assessment. What type of support would be most helpful for you right now?",
    },
    Rule {
        topic: Topic::Gratitude,
        keywords: &["thank"],
        reply: "You're very welcome! Remember, seeking help is a sign of strength. I'm always here when you need support. 💙",
    },
];

/// Replies used when no keyword matches.
pub const FALLBACK_REPLIES: [&str; 5] = [
    "Thank you for sharing that with me. I'm here to listen and support you. How can I help you feel better today?",
    "I appreciate you opening up to me. Your feelings are valid and important. Would you like to explore some coping strategies together?",
    "I hear you, and I want you to know that you're not alone in this. Many people find it helpful to connect with others who understand their experiences.",
    "That sounds really difficult. I'm glad you're reaching out for support. Have you tried any of our wellness activities like the garden game or mood tracking?",
    "Thank you for trusting me with your thoughts. Remember, it's okay to not be okay sometimes. What would be most helpful for you right now?",
];

/// First message posted when the chat opens.
pub const WELCOME_MESSAGE: &str = "Welcome to NeuraMate! I'm here to support your mental wellness journey. Feel free to ask me anything about our services or just share how you're feeling today.";

/// Default bounds of the simulated "typing" delay.
pub const REPLY_DELAY_MIN: Duration = Duration::from_millis(1500);
pub const REPLY_DELAY_MAX: Duration = Duration::from_millis(2500);

/// Classify a message by the first matching keyword rule.
#[must_use]
pub fn classify(input: &str) -> Option<Topic> {
    let normalized = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|rule| rule.topic)
}

/// Canned reply for a recognised topic.
#[must_use]
pub fn reply_for(topic: Topic) -> &'static str {
    RULES
        .iter()
        .find(|rule| rule.topic == topic)
        .map_or(FALLBACK_REPLIES[0], |rule| rule.reply)
}

/// Reply to a user message. Never fails.
pub fn respond<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    match classify(input) {
        Some(topic) => reply_for(topic).to_string(),
        None => FALLBACK_REPLIES
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_REPLIES[0])
            .to_string(),
    }
}

/// Pick a typing delay uniformly in `[min, max)`; returns `min` when the range is empty.
pub fn sample_reply_delay<R: Rng + ?Sized>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    let min_ms = u64::try_from(min.as_millis()).unwrap_or(u64::MAX);
    let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
    if max_ms <= min_ms {
        return min;
    }
    Duration::from_millis(rng.random_range(min_ms..max_ms))
}
