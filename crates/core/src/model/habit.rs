use thiserror::Error;

/// Validated habit name (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HabitName(String);

impl HabitName {
    /// # Errors
    ///
    /// Returns `HabitError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, HabitError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(HabitError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HabitName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked habit with its running streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    name: HabitName,
    streak: u32,
    checked: bool,
}

impl Habit {
    #[must_use]
    pub fn new(name: HabitName) -> Self {
        Self::with_streak(name, 0)
    }

    #[must_use]
    pub fn with_streak(name: HabitName, streak: u32) -> Self {
        Self {
            name,
            streak,
            checked: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &HabitName {
        &self.name
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Apply a checkbox change. Checking extends the streak; unchecking keeps it.
    ///
    /// Returns the new streak when the habit was checked.
    pub fn set_checked(&mut self, checked: bool) -> Option<u32> {
        self.checked = checked;
        if !checked {
            return None;
        }
        self.streak = self.streak.saturating_add(1);
        Some(self.streak)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HabitError {
    #[error("habit name cannot be empty")]
    EmptyName,
    #[error("no habit at position {0}")]
    UnknownHabit(usize),
}

/// Habits listed before the user adds their own.
#[must_use]
pub fn default_habits() -> Vec<Habit> {
    [("Morning meditation", 5), ("Drink 8 glasses of water", 3), ("Evening walk", 2)]
        .into_iter()
        .map(|(name, streak)| Habit::with_streak(HabitName(name.to_string()), streak))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_name_is_trimmed() {
        assert_eq!(HabitName::new("  Stretch ").unwrap().as_str(), "Stretch");
        assert_eq!(HabitName::new(""), Err(HabitError::EmptyName));
    }

    #[test]
    fn checking_extends_streak_and_unchecking_keeps_it() {
        let mut habit = Habit::new(HabitName::new("Read").unwrap());
        assert_eq!(habit.set_checked(true), Some(1));
        assert!(habit.is_checked());
        assert_eq!(habit.set_checked(false), None);
        assert_eq!(habit.streak(), 1);
        assert_eq!(habit.set_checked(true), Some(2));
    }
}
