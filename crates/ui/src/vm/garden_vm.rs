use wellness_core::model::{Achievement, DailyActivity, Growth, PlotId, ProgressState};

/// How a plot is drawn at its current growth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotVm {
    pub id: PlotId,
    pub growth_label: String,
    pub icon_class: &'static str,
    /// Inline icon size in px; `None` keeps the stylesheet default.
    pub icon_size: Option<u8>,
    pub grown: bool,
}

impl PlotVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.grown {
            "plant-plot grown"
        } else if self.icon_size.is_some() {
            "plant-plot growing"
        } else {
            "plant-plot empty"
        }
    }

    #[must_use]
    pub fn icon_style(&self) -> String {
        self.icon_size
            .map(|size| format!("color: #10b981; font-size: {size}px;"))
            .unwrap_or_default()
    }
}

#[must_use]
pub fn map_plot(id: PlotId, growth: Growth) -> PlotVm {
    let percent = growth.percent();
    let (icon_class, icon_size) = match percent {
        100.. => ("fas fa-tree", None),
        75..=99 => ("fas fa-seedling", Some(20)),
        50..=74 => ("fas fa-seedling", Some(18)),
        25..=49 => ("fas fa-seedling", Some(16)),
        _ => ("fas fa-seedling", None),
    };
    PlotVm {
        id,
        growth_label: growth.to_string(),
        icon_class,
        icon_size,
        grown: growth.is_full(),
    }
}

#[must_use]
pub fn map_plots(progress: &ProgressState) -> Vec<PlotVm> {
    PlotId::all()
        .map(|id| map_plot(id, progress.growth(id)))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GardenStatsVm {
    pub wellness_points: String,
    pub streak_days: String,
    pub plants_grown: String,
}

impl From<&ProgressState> for GardenStatsVm {
    fn from(progress: &ProgressState) -> Self {
        Self {
            wellness_points: progress.wellness_points().to_string(),
            streak_days: progress.streak_days().to_string(),
            plants_grown: progress.plants_grown().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub id: String,
    pub label: String,
    pub points_label: String,
    pub completed: bool,
}

#[must_use]
pub fn map_activities(activities: &[DailyActivity], progress: &ProgressState) -> Vec<ActivityVm> {
    activities
        .iter()
        .map(|activity| ActivityVm {
            id: activity.id().to_string(),
            label: activity.label().to_string(),
            points_label: format!("+{}", activity.points()),
            completed: progress.is_completed(activity.id()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementCardVm {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
    pub progress_text: &'static str,
    pub button_label: &'static str,
}

impl AchievementCardVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.unlocked {
            "achievement-card unlocked"
        } else {
            "achievement-card locked"
        }
    }
}

#[must_use]
pub fn map_achievements(progress: &ProgressState) -> Vec<AchievementCardVm> {
    Achievement::ALL
        .into_iter()
        .map(|achievement| {
            let unlocked = progress.is_unlocked(achievement);
            AchievementCardVm {
                id: achievement.id(),
                title: achievement.title(),
                description: achievement.description(),
                unlocked,
                progress_text: if unlocked { "1/1" } else { "0/1" },
                button_label: if unlocked { "Unlocked!" } else { "Locked" },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_core::model::ActivityId;

    fn plot(id: u8) -> PlotId {
        PlotId::new(id).unwrap()
    }

    #[test]
    fn plot_icon_grows_with_each_watering() {
        let mut progress = ProgressState::new();
        let target = plot(2);
        let mut sizes = vec![map_plot(target, progress.growth(target)).icon_size];
        for _ in 0..4 {
            progress.water_plot(target);
            sizes.push(map_plot(target, progress.growth(target)).icon_size);
        }
        assert_eq!(sizes, vec![None, Some(16), Some(18), Some(20), None]);

        let grown = map_plot(target, progress.growth(target));
        assert!(grown.grown);
        assert_eq!(grown.icon_class, "fas fa-tree");
        assert_eq!(grown.growth_label, "100%");
        assert_eq!(grown.class(), "plant-plot grown");
    }

    #[test]
    fn empty_plot_has_no_inline_style() {
        let vm = map_plot(plot(1), Growth::EMPTY);
        assert_eq!(vm.class(), "plant-plot empty");
        assert_eq!(vm.icon_style(), "");
        assert_eq!(vm.growth_label, "0%");
    }

    #[test]
    fn garden_lists_twelve_plots() {
        assert_eq!(map_plots(&ProgressState::new()).len(), 12);
    }

    #[test]
    fn activities_show_points_and_completion() {
        let activities = vec![DailyActivity::new("walk", "Walk", 20).unwrap()];
        let mut progress = ProgressState::new();
        let before = map_activities(&activities, &progress);
        assert_eq!(before[0].points_label, "+20");
        assert!(!before[0].completed);

        progress.complete_activity(&ActivityId::new("walk").unwrap(), 20);
        assert!(map_activities(&activities, &progress)[0].completed);
        assert_eq!(GardenStatsVm::from(&progress).streak_days, "1");
    }

    #[test]
    fn achievement_cards_flip_when_unlocked() {
        let mut progress = ProgressState::new();
        let locked = map_achievements(&progress);
        assert!(locked.iter().all(|card| card.progress_text == "0/1"));

        for _ in 0..4 {
            progress.water_plot(plot(1));
        }
        progress.check_achievements();
        let cards = map_achievements(&progress);
        assert_eq!(cards[0].id, "green-thumb");
        assert_eq!(cards[0].button_label, "Unlocked!");
        assert_eq!(cards[0].class(), "achievement-card unlocked");
        assert_eq!(cards[1].class(), "achievement-card locked");
    }
}
