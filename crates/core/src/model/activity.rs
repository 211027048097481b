use crate::model::ids::{ActivityError, ActivityId};

/// A daily wellness task that can be completed once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyActivity {
    id: ActivityId,
    label: String,
    points: u32,
}

impl DailyActivity {
    /// # Errors
    ///
    /// Returns `ActivityError::EmptyId` if the id is blank.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        points: u32,
    ) -> Result<Self, ActivityError> {
        Ok(Self {
            id: ActivityId::new(id)?,
            label: label.into(),
            points,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }
}

const DEFAULT_ACTIVITIES: [(&str, &str, u32); 7] = [
    ("meditation", "10-minute meditation", 10),
    ("journal", "Write in your journal", 15),
    ("gratitude", "List three things you're grateful for", 5),
    ("walk", "Take a mindful walk", 20),
    ("hydrate", "Drink eight glasses of water", 5),
    ("breathing", "Complete a breathing session", 10),
    ("connect", "Reach out to a friend", 15),
];

/// The activity list shown in the garden.
#[must_use]
pub fn default_daily_activities() -> Vec<DailyActivity> {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(id, label, points)| DailyActivity {
            id: ActivityId(id.to_string()),
            label: (*label).to_string(),
            points: *points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_catalog_has_unique_ids() {
        let activities = default_daily_activities();
        let ids: HashSet<_> = activities.iter().map(|a| a.id().clone()).collect();
        assert_eq!(ids.len(), activities.len());
        assert!(activities.iter().all(|a| a.points() > 0));
    }

    #[test]
    fn blank_activity_id_is_rejected() {
        assert!(DailyActivity::new(" ", "Nothing", 5).is_err());
    }
}
