use std::collections::BTreeSet;

use services::HubService;
use wellness_core::model::{BreathingPhase, MoodScore, breathing::IDLE_LABEL};

use crate::vm::time_fmt::format_datetime;

/// Panels of the wellness hub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HubTab {
    #[default]
    Mood,
    Journal,
    Habits,
    Breathing,
    Affirmations,
}

impl HubTab {
    pub const ALL: [HubTab; 5] = [
        HubTab::Mood,
        HubTab::Journal,
        HubTab::Habits,
        HubTab::Breathing,
        HubTab::Affirmations,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HubTab::Mood => "Mood Tracker",
            HubTab::Journal => "Journal",
            HubTab::Habits => "Habits",
            HubTab::Breathing => "Breathing",
            HubTab::Affirmations => "Affirmations",
        }
    }

    #[must_use]
    pub fn button_class(self, active: HubTab) -> &'static str {
        if self == active { "tab-btn active" } else { "tab-btn" }
    }
}

pub const JOURNAL_TAGS: [&str; 5] = ["Grateful", "Anxious", "Calm", "Tired", "Hopeful"];

/// Toggle-able tag buttons above the journal textarea.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSelection {
    active: BTreeSet<&'static str>,
}

impl TagSelection {
    pub fn toggle(&mut self, tag: &'static str) {
        if !self.active.remove(tag) {
            self.active.insert(tag);
        }
    }

    #[must_use]
    pub fn is_active(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.active.iter().map(|tag| (*tag).to_string()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodVm {
    pub value: u8,
    pub emoji: &'static str,
    pub total_entries: String,
    pub average: String,
}

#[must_use]
pub fn map_mood(hub: &HubService, current: MoodScore) -> MoodVm {
    MoodVm {
        value: current.value(),
        emoji: current.emoji(),
        total_entries: hub.mood_entries().len().to_string(),
        average: hub
            .average_mood()
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalStatsVm {
    pub total: String,
    pub this_week: String,
    pub last_saved: Option<String>,
}

#[must_use]
pub fn map_journal_stats(hub: &HubService) -> JournalStatsVm {
    let week = hub.journal_entries_this_week();
    JournalStatsVm {
        total: hub.journal_entries().len().to_string(),
        this_week: if week == 1 {
            "1 entry".to_string()
        } else {
            format!("{week} entries")
        },
        last_saved: hub
            .journal_entries()
            .last()
            .map(|entry| format_datetime(entry.saved_at)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HabitRowVm {
    pub index: usize,
    pub name: String,
    pub streak: String,
    pub checked: bool,
}

#[must_use]
pub fn map_habits(hub: &HubService) -> Vec<HabitRowVm> {
    hub.habits()
        .iter()
        .enumerate()
        .map(|(index, habit)| HabitRowVm {
            index,
            name: habit.name().to_string(),
            streak: habit.streak().to_string(),
            checked: habit.is_checked(),
        })
        .collect()
}

/// Label of the breathing button for the current phase.
#[must_use]
pub fn breathing_label(phase: Option<BreathingPhase>) -> &'static str {
    phase.map_or(IDLE_LABEL, BreathingPhase::label)
}
