use std::collections::HashSet;
use std::fmt;

use crate::model::ids::{ActivityId, PLOT_COUNT, PlotId};

//
// ─── CONSTANTS ─────────────────────────────────────────────────────────────────
//

/// Growth gained by a single watering, in percent.
pub const GROWTH_STEP: u8 = 25;

/// Growth at which a plant counts as fully grown.
pub const FULL_GROWTH: u8 = 100;

/// Points awarded for every successful watering.
pub const WATER_POINTS: u32 = 5;

//
// ─── GROWTH ────────────────────────────────────────────────────────────────────
//

/// Growth percentage of a single plot, always one of 0, 25, 50, 75 or 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Growth(u8);

impl Growth {
    pub const EMPTY: Growth = Growth(0);
    pub const FULL: Growth = Growth(FULL_GROWTH);

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 >= FULL_GROWTH
    }

    #[must_use]
    fn watered(self) -> Growth {
        Growth(self.0.saturating_add(GROWTH_STEP).min(FULL_GROWTH))
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

//
// ─── ACHIEVEMENTS ──────────────────────────────────────────────────────────────
//

/// Milestones that unlock once and stay unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Achievement {
    /// At least one plant fully grown.
    GreenThumb,
    /// At least five plants fully grown.
    GardenMaster,
    /// A streak of seven or more days.
    StreakWarrior,
}

impl Achievement {
    pub const ALL: [Achievement; 3] = [
        Achievement::GreenThumb,
        Achievement::GardenMaster,
        Achievement::StreakWarrior,
    ];

    /// Stable identifier used by markup and logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Achievement::GreenThumb => "green-thumb",
            Achievement::GardenMaster => "garden-master",
            Achievement::StreakWarrior => "streak-warrior",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Achievement::GreenThumb => "Green Thumb",
            Achievement::GardenMaster => "Garden Master",
            Achievement::StreakWarrior => "Streak Warrior",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Achievement::GreenThumb => "Grow your first plant to full size",
            Achievement::GardenMaster => "Grow five plants to full size",
            Achievement::StreakWarrior => "Keep a seven day streak",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|achievement| achievement.id() == id)
    }

    fn is_earned(self, state: &ProgressState) -> bool {
        match self {
            Achievement::GreenThumb => state.plants_grown >= 1,
            Achievement::GardenMaster => state.plants_grown >= 5,
            Achievement::StreakWarrior => state.streak_days >= 7,
        }
    }

    fn slot(self) -> usize {
        match self {
            Achievement::GreenThumb => 0,
            Achievement::GardenMaster => 1,
            Achievement::StreakWarrior => 2,
        }
    }
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of watering a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterOutcome {
    /// The plot grew by one step.
    Grew {
        growth: Growth,
        points_awarded: u32,
        /// True only on the call that took the plot to 100%.
        matured: bool,
    },
    /// The plot was already at 100%; nothing changed.
    AlreadyGrown,
}

impl WaterOutcome {
    #[must_use]
    pub fn points_awarded(&self) -> u32 {
        match self {
            WaterOutcome::Grew { points_awarded, .. } => *points_awarded,
            WaterOutcome::AlreadyGrown => 0,
        }
    }

    /// Growth after the call.
    #[must_use]
    pub fn growth(&self) -> Growth {
        match self {
            WaterOutcome::Grew { growth, .. } => *growth,
            WaterOutcome::AlreadyGrown => Growth::FULL,
        }
    }
}

/// Result of completing a daily activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    Accepted { points_awarded: u32 },
    /// Already completed this session; nothing awarded.
    AlreadyCompleted,
}

impl ActivityOutcome {
    #[must_use]
    pub fn accepted(&self) -> bool {
        matches!(self, ActivityOutcome::Accepted { .. })
    }

    #[must_use]
    pub fn points_awarded(&self) -> u32 {
        match self {
            ActivityOutcome::Accepted { points_awarded } => *points_awarded,
            ActivityOutcome::AlreadyCompleted => 0,
        }
    }
}

//
// ─── PROGRESS STATE ────────────────────────────────────────────────────────────
//

/// In-memory garden progress for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    wellness_points: u32,
    streak_days: u32,
    plants_grown: u32,
    plant_growth: [Growth; PLOT_COUNT as usize],
    completed_activities: HashSet<ActivityId>,
    achievements: [bool; 3],
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wellness_points(&self) -> u32 {
        self.wellness_points
    }

    #[must_use]
    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    #[must_use]
    pub fn plants_grown(&self) -> u32 {
        self.plants_grown
    }

    #[must_use]
    pub fn growth(&self, plot: PlotId) -> Growth {
        self.plant_growth[plot.index()]
    }

    #[must_use]
    pub fn is_completed(&self, activity: &ActivityId) -> bool {
        self.completed_activities.contains(activity)
    }

    #[must_use]
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.achievements[achievement.slot()]
    }

    /// Water a plot: +25% growth (capped at 100%) and a fixed point award.
    pub fn water_plot(&mut self, plot: PlotId) -> WaterOutcome {
        let slot = &mut self.plant_growth[plot.index()];
        if slot.is_full() {
            return WaterOutcome::AlreadyGrown;
        }

        let growth = slot.watered();
        *slot = growth;
        self.wellness_points = self.wellness_points.saturating_add(WATER_POINTS);

        let matured = growth.is_full();
        if matured {
            self.plants_grown = self.plants_grown.saturating_add(1);
        }

        WaterOutcome::Grew {
            growth,
            points_awarded: WATER_POINTS,
            matured,
        }
    }

    /// Complete an activity once per session, awarding `points` and a streak day.
    pub fn complete_activity(&mut self, activity: &ActivityId, points: u32) -> ActivityOutcome {
        if !self.completed_activities.insert(activity.clone()) {
            return ActivityOutcome::AlreadyCompleted;
        }

        self.wellness_points = self.wellness_points.saturating_add(points);
        self.streak_days = self.streak_days.saturating_add(1);

        ActivityOutcome::Accepted {
            points_awarded: points,
        }
    }

    /// Unlock every achievement whose threshold is now met.
    ///
    /// Returns only the achievements unlocked by this call, so a second call
    /// without intervening changes returns an empty list.
    pub fn check_achievements(&mut self) -> Vec<Achievement> {
        let mut unlocked = Vec::new();
        for achievement in Achievement::ALL {
            if self.achievements[achievement.slot()] || !achievement.is_earned(self) {
                continue;
            }
            self.achievements[achievement.slot()] = true;
            unlocked.push(achievement);
        }
        unlocked
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn plot(id: u8) -> PlotId {
        PlotId::new(id).unwrap()
    }

    fn activity(id: &str) -> ActivityId {
        ActivityId::new(id).unwrap()
    }

    fn grow_fully(state: &mut ProgressState, id: u8) {
        for _ in 0..4 {
            state.water_plot(plot(id));
        }
    }

    #[test]
    fn new_state_is_empty() {
        let state = ProgressState::new();
        assert_eq!(state.wellness_points(), 0);
        assert_eq!(state.streak_days(), 0);
        assert_eq!(state.plants_grown(), 0);
        assert!(PlotId::all().all(|p| state.growth(p) == Growth::EMPTY));
        assert!(Achievement::ALL.iter().all(|a| !state.is_unlocked(*a)));
    }

    #[test]
    fn watering_four_times_reaches_full_growth() {
        let mut state = ProgressState::new();
        let target = plot(3);

        let sequence: Vec<u8> = (0..4)
            .map(|_| state.water_plot(target).growth().percent())
            .collect();
        assert_eq!(sequence, vec![25, 50, 75, 100]);
        assert_eq!(state.wellness_points(), 20);

        let fifth = state.water_plot(target);
        assert_eq!(fifth, WaterOutcome::AlreadyGrown);
        assert_eq!(fifth.points_awarded(), 0);
        assert_eq!(state.wellness_points(), 20);
        assert_eq!(state.growth(target), Growth::FULL);
    }

    #[test]
    fn plants_grown_counts_only_the_maturing_call() {
        let mut state = ProgressState::new();
        let target = plot(1);

        for expected_matured in [false, false, false, true] {
            let before = state.plants_grown();
            let outcome = state.water_plot(target);
            assert!(matches!(outcome, WaterOutcome::Grew { matured, .. } if matured == expected_matured));
            let delta = state.plants_grown() - before;
            assert_eq!(delta, u32::from(expected_matured));
        }

        state.water_plot(target);
        assert_eq!(state.plants_grown(), 1);
    }

    #[test]
    fn plots_grow_independently() {
        let mut state = ProgressState::new();
        state.water_plot(plot(2));
        state.water_plot(plot(2));
        state.water_plot(plot(12));

        assert_eq!(state.growth(plot(2)).percent(), 50);
        assert_eq!(state.growth(plot(12)).percent(), 25);
        assert_eq!(state.growth(plot(5)).percent(), 0);
    }

    #[test]
    fn activity_is_awarded_once_per_session() {
        let mut state = ProgressState::new();
        let meditation = activity("meditation");

        let first = state.complete_activity(&meditation, 10);
        assert_eq!(first, ActivityOutcome::Accepted { points_awarded: 10 });
        assert_eq!(state.wellness_points(), 10);
        assert_eq!(state.streak_days(), 1);
        assert!(state.is_completed(&meditation));

        let second = state.complete_activity(&meditation, 10);
        assert!(!second.accepted());
        assert_eq!(second.points_awarded(), 0);
        assert_eq!(state.wellness_points(), 10);
        assert_eq!(state.streak_days(), 1);
    }

    #[test]
    fn check_achievements_is_idempotent() {
        let mut state = ProgressState::new();
        assert!(state.check_achievements().is_empty());

        grow_fully(&mut state, 1);
        assert_eq!(state.check_achievements(), vec![Achievement::GreenThumb]);
        assert!(state.check_achievements().is_empty());
        assert!(state.is_unlocked(Achievement::GreenThumb));
    }

    #[test]
    fn garden_master_needs_five_plants() {
        let mut state = ProgressState::new();
        for id in 1..=4 {
            grow_fully(&mut state, id);
        }
        assert_eq!(state.check_achievements(), vec![Achievement::GreenThumb]);

        grow_fully(&mut state, 5);
        assert_eq!(state.plants_grown(), 5);
        assert_eq!(state.check_achievements(), vec![Achievement::GardenMaster]);
    }

    #[test]
    fn streak_warrior_unlocks_at_seven_days() {
        let mut state = ProgressState::new();
        for day in 1..=6 {
            state.complete_activity(&activity(&format!("task-{day}")), 1);
        }
        assert!(state.check_achievements().is_empty());

        state.complete_activity(&activity("task-7"), 1);
        assert_eq!(state.check_achievements(), vec![Achievement::StreakWarrior]);
        assert!(state.is_unlocked(Achievement::StreakWarrior));
    }

    #[test]
    fn several_achievements_can_unlock_together() {
        let mut state = ProgressState::new();
        for id in 1..=5 {
            grow_fully(&mut state, id);
        }
        assert_eq!(
            state.check_achievements(),
            vec![Achievement::GreenThumb, Achievement::GardenMaster]
        );
    }

    #[test]
    fn achievement_ids_round_trip() {
        for achievement in Achievement::ALL {
            assert_eq!(Achievement::from_id(achievement.id()), Some(achievement));
        }
        assert_eq!(Achievement::from_id("unknown"), None);
    }
}
