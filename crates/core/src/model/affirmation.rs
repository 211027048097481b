/// Affirmations rotated by the "new affirmation" button.
pub const AFFIRMATIONS: [&str; 10] = [
    "I am capable of handling whatever comes my way today.",
    "I choose to focus on the positive aspects of my life.",
    "I am worthy of love, happiness, and success.",
    "I trust in my ability to overcome challenges.",
    "I am grateful for all the good in my life.",
    "I am strong, resilient, and capable.",
    "I deserve to be treated with kindness and respect.",
    "I am making progress every day, even if it's small.",
    "I believe in my potential to achieve my goals.",
    "I am enough, just as I am.",
];

/// Focus tags the user can pick above the affirmation card.
pub const AFFIRMATION_FOCUSES: [&str; 4] = ["Self-Love", "Confidence", "Gratitude", "Peace"];
