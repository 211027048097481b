#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "Is NeuraMate a replacement for therapy?",
        answer: "No. NeuraMate offers self-guided wellness tools and peer support. For clinical care, please connect with one of our licensed therapists.",
    },
    FaqEntry {
        question: "Are the group chats anonymous?",
        answer: "Yes. You choose a display name when you join and your personal details are never shared with other members.",
    },
    FaqEntry {
        question: "How does the wellness garden work?",
        answer: "Water a plot to grow its plant by 25% and complete daily activities to earn points, build your streak and unlock achievements.",
    },
    FaqEntry {
        question: "Who is Yuvaa?",
        answer: "Yuvaa is our AI wellness companion. It can point you to breathing exercises, support groups and assessments at any time of day.",
    },
    FaqEntry {
        question: "What should I do in a crisis?",
        answer: "Contact your local emergency number or a crisis hotline right away. NeuraMate is not an emergency service.",
    },
];

/// Accordion where at most one answer is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Open `index`, closing any other; clicking the open item closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
