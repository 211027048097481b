use rand::Rng;
use rand::rngs::StdRng;
use wellness_core::Clock;
use wellness_core::model::affirmation::AFFIRMATIONS;
use wellness_core::model::{
    BreathingPattern, Habit, HabitError, HabitName, JournalDraft, JournalEntry, MoodEntry,
    MoodScore, default_habits,
};

use crate::Notification;
use crate::error::HubError;

/// Wellness hub controller: mood log, journal, habits, breathing and affirmations.
pub struct HubService {
    clock: Clock,
    rng: StdRng,
    moods: Vec<MoodEntry>,
    journal: Vec<JournalEntry>,
    habits: Vec<Habit>,
    pattern: BreathingPattern,
    affirmation: usize,
}

impl HubService {
    #[must_use]
    pub fn new(clock: Clock, rng: StdRng) -> Self {
        Self {
            clock,
            rng,
            moods: Vec::new(),
            journal: Vec::new(),
            habits: default_habits(),
            pattern: BreathingPattern::default(),
            affirmation: 0,
        }
    }

    #[must_use]
    pub fn with_habits(mut self, habits: Vec<Habit>) -> Self {
        self.habits = habits;
        self
    }

    // ─── Mood ──────────────────────────────────────────────────────────────────

    pub fn save_mood(&mut self, score: MoodScore) -> Notification {
        self.moods.push(MoodEntry {
            score,
            recorded_at: self.clock.now(),
        });
        tracing::info!(score = score.value(), total = self.moods.len(), "mood saved");
        Notification::new(format!("Mood entry saved: {}/10", score.value()))
    }

    #[must_use]
    pub fn mood_entries(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// Mean of all saved scores, one decimal place.
    #[must_use]
    pub fn average_mood(&self) -> Option<f32> {
        if self.moods.is_empty() {
            return None;
        }
        let sum: u32 = self.moods.iter().map(|entry| u32::from(entry.score.value())).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = sum as f32 / self.moods.len() as f32;
        Some((mean * 10.0).round() / 10.0)
    }

    // ─── Journal ───────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `HubError::Journal` if the entry is too short.
    pub fn save_journal(&mut self, draft: JournalDraft) -> Result<Notification, HubError> {
        let entry = draft.validate(self.clock.now())?;
        self.journal.push(entry);
        tracing::info!(total = self.journal.len(), "journal entry saved");
        Ok(Notification::new("Journal entry saved successfully!"))
    }

    #[must_use]
    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal
    }

    #[must_use]
    pub fn journal_entries_this_week(&self) -> usize {
        let now = self.clock.now();
        self.journal
            .iter()
            .filter(|entry| entry.is_within_week(now))
            .count()
    }

    // ─── Habits ────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// # Errors
    ///
    /// Returns `HubError::Habit` if the name is blank.
    pub fn add_habit(&mut self, name: &str) -> Result<Notification, HubError> {
        let name = HabitName::new(name)?;
        let message = format!("New habit \"{name}\" added!");
        self.habits.push(Habit::new(name));
        Ok(Notification::new(message))
    }

    /// Apply a checkbox change; only checking produces a toast.
    ///
    /// # Errors
    ///
    /// Returns `HubError::Habit` if `index` is out of range.
    pub fn check_habit(
        &mut self,
        index: usize,
        checked: bool,
    ) -> Result<Option<Notification>, HubError> {
        let habit = self
            .habits
            .get_mut(index)
            .ok_or(HabitError::UnknownHabit(index))?;
        let streak = habit.set_checked(checked);
        Ok(streak.map(|streak| {
            tracing::debug!(habit = %habit.name(), streak, "habit checked");
            Notification::new("Great job! Keep up the good work!")
        }))
    }

    // ─── Breathing ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn pattern(&self) -> BreathingPattern {
        self.pattern
    }

    pub fn select_pattern(&mut self, pattern: BreathingPattern) {
        self.pattern = pattern;
    }

    pub fn finish_breathing(&mut self) -> Notification {
        tracing::info!(pattern = self.pattern.key(), "breathing session completed");
        Notification::new("Breathing session completed!")
    }

    // ─── Affirmations ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn affirmation(&self) -> &'static str {
        AFFIRMATIONS[self.affirmation]
    }

    /// Draw a new affirmation uniformly from the pool (repeats allowed).
    pub fn next_affirmation(&mut self) -> Notification {
        self.affirmation = self.rng.random_range(0..AFFIRMATIONS.len());
        Notification::new("New affirmation loaded!")
    }
}
