use dioxus::prelude::*;
use wellness_core::model::{ActivityId, PlotId};

use crate::context::PageState;
use crate::vm::{
    AchievementCardVm, ActivityVm, GardenStatsVm, PlotVm, map_achievements, map_activities,
    map_plots,
};

#[component]
pub fn GardenView() -> Element {
    let page = use_context::<PageState>();
    let mut garden = page.garden;

    let water = use_callback(move |plot: PlotId| {
        let update = garden.write().water_plot(plot);
        page.notify_all(&update.notifications);
    });

    let complete = use_callback(move |id: String| {
        let id = match ActivityId::new(id) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(%err, "ignoring activity click");
                return;
            }
        };
        let result = garden.write().complete_activity(&id);
        match result {
            Ok(update) => page.notify_all(&update.notifications),
            Err(err) => tracing::warn!(%err, "activity rejected"),
        }
    });

    let service = garden.read();
    let progress = service.progress();
    let stats = GardenStatsVm::from(progress);
    let plots = map_plots(progress);
    let activities = map_activities(service.activities(), progress);
    let achievements = map_achievements(progress);
    drop(service);

    rsx! {
        section { class: "page garden-page",
            h2 { "Wellness Garden" }
            div { class: "garden-stats",
                Stat { id: "wellnessPoints", label: "Wellness Points", value: stats.wellness_points }
                Stat { id: "streakDays", label: "Day Streak", value: stats.streak_days }
                Stat { id: "plantsGrown", label: "Plants Grown", value: stats.plants_grown }
            }
            div { class: "garden-grid",
                for plot in plots {
                    Plot { key: "{plot.id}", plot: plot.clone(), on_water: water }
                }
            }
            h3 { "Daily Activities" }
            div { class: "activity-list",
                for activity in activities {
                    ActivityItem { key: "{activity.id}", activity: activity.clone(), on_complete: complete }
                }
            }
            h3 { "Achievements" }
            div { class: "achievements-grid",
                for card in achievements {
                    AchievementCard { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn Stat(id: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-number", id: "{id}", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn Plot(plot: PlotVm, on_water: Callback<PlotId>) -> Element {
    let id = plot.id;
    rsx! {
        div {
            class: plot.class(),
            "data-plot": "{id}",
            onclick: move |_| on_water.call(id),
            i { class: plot.icon_class, style: plot.icon_style() }
            span { class: "plant-growth", "{plot.growth_label}" }
        }
    }
}

#[component]
fn ActivityItem(activity: ActivityVm, on_complete: Callback<String>) -> Element {
    let id = activity.id.clone();
    let (class, label) = if activity.completed {
        ("activity-item completed", "Completed")
    } else {
        ("activity-item", "Complete")
    };
    rsx! {
        div { class,
            span { class: "activity-label", "{activity.label}" }
            span { class: "activity-points", "{activity.points_label}" }
            button {
                class: "activity-btn",
                "data-activity": "{activity.id}",
                onclick: move |_| on_complete.call(id.clone()),
                "{label}"
            }
        }
    }
}

#[component]
fn AchievementCard(card: AchievementCardVm) -> Element {
    rsx! {
        div { class: card.class(), "data-achievement": card.id,
            h4 { "{card.title}" }
            p { "{card.description}" }
            span { class: "achievement-progress", "{card.progress_text}" }
            button { class: "achievement-btn", disabled: !card.unlocked, "{card.button_label}" }
        }
    }
}
