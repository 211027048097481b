mod chat_vm;
mod faq_vm;
mod garden_vm;
mod hub_vm;
mod time_fmt;
mod toast_vm;

pub use chat_vm::{ChatLog, ChatMessageVm};
pub use faq_vm::{FAQ_ENTRIES, FaqAccordion, FaqEntry};
pub use garden_vm::{
    AchievementCardVm, ActivityVm, GardenStatsVm, PlotVm, map_achievements, map_activities,
    map_plot, map_plots,
};
pub use hub_vm::{
    HabitRowVm, HubTab, JOURNAL_TAGS, JournalStatsVm, MoodVm, TagSelection, breathing_label,
    map_habits, map_journal_stats, map_mood,
};
pub use time_fmt::format_datetime;
pub use toast_vm::{ToastQueue, ToastVm};
