use wellness_core::model::{
    Achievement, ActivityId, ActivityOutcome, DailyActivity, PlotId, ProgressState, WaterOutcome,
    default_daily_activities,
};

use crate::Notification;
use crate::error::GardenError;

/// Result of a garden action: the state-machine outcome, any achievements it
/// unlocked, and the toasts to show (unlocks first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenUpdate<O> {
    pub outcome: O,
    pub unlocked: Vec<Achievement>,
    pub notifications: Vec<Notification>,
}

/// Owns the session's `ProgressState` and the daily activity catalog.
#[derive(Debug, Clone)]
pub struct GardenService {
    progress: ProgressState,
    activities: Vec<DailyActivity>,
}

impl Default for GardenService {
    fn default() -> Self {
        Self::new(default_daily_activities())
    }
}

impl GardenService {
    #[must_use]
    pub fn new(activities: Vec<DailyActivity>) -> Self {
        Self {
            progress: ProgressState::new(),
            activities,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn activities(&self) -> &[DailyActivity] {
        &self.activities
    }

    pub fn water_plot(&mut self, plot: PlotId) -> GardenUpdate<WaterOutcome> {
        let outcome = self.progress.water_plot(plot);
        let message = match outcome {
            WaterOutcome::Grew { growth, matured, .. } => {
                tracing::debug!(%plot, %growth, matured, "plot watered");
                format!("Plant watered! Growth: {growth}")
            }
            WaterOutcome::AlreadyGrown => "This plant is already fully grown!".to_string(),
        };
        self.finish(outcome, message)
    }

    /// Complete a catalog activity, awarding its listed points.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::UnknownActivity` if the id is not in the catalog.
    pub fn complete_activity(
        &mut self,
        activity: &ActivityId,
    ) -> Result<GardenUpdate<ActivityOutcome>, GardenError> {
        let points = self
            .activities
            .iter()
            .find(|item| item.id() == activity)
            .map(DailyActivity::points)
            .ok_or_else(|| GardenError::UnknownActivity(activity.clone()))?;
        Ok(self.complete_activity_with_points(activity, points))
    }

    /// Complete any activity with an explicit point value.
    pub fn complete_activity_with_points(
        &mut self,
        activity: &ActivityId,
        points: u32,
    ) -> GardenUpdate<ActivityOutcome> {
        let outcome = self.progress.complete_activity(activity, points);
        let message = match outcome {
            ActivityOutcome::Accepted { points_awarded } => {
                tracing::debug!(%activity, points_awarded, streak = self.progress.streak_days(), "activity completed");
                format!("Activity completed! +{points_awarded} wellness points")
            }
            ActivityOutcome::AlreadyCompleted => {
                "You've already completed this activity today!".to_string()
            }
        };
        self.finish(outcome, message)
    }

    fn finish<O>(&mut self, outcome: O, message: String) -> GardenUpdate<O> {
        let unlocked = self.progress.check_achievements();
        let mut notifications: Vec<Notification> = unlocked
            .iter()
            .map(|achievement| {
                tracing::info!(achievement = achievement.id(), "achievement unlocked");
                Notification::new(format!("🎉 Achievement Unlocked: {}!", achievement.title()))
            })
            .collect();
        notifications.push(Notification::new(message));

        GardenUpdate {
            outcome,
            unlocked,
            notifications,
        }
    }
}
