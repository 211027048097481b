mod activity;
pub mod affirmation;
pub mod breathing;
mod contact;
mod conversation;
pub mod garden;
mod habit;
mod ids;
mod journal;
mod mood;
mod presence;

pub use activity::{DailyActivity, default_daily_activities};
pub use breathing::{BreathingPattern, BreathingPhase, BreathingSession};
pub use contact::{ContactDraft, ContactError, ContactMessage};
pub use conversation::{ConversationTurn, Sender};
pub use garden::{Achievement, ActivityOutcome, Growth, ProgressState, WaterOutcome};
pub use habit::{Habit, HabitError, HabitName, default_habits};
pub use ids::{ActivityError, ActivityId, PLOT_COUNT, PlotError, PlotId};
pub use journal::{JournalDraft, JournalEntry, JournalError, MIN_JOURNAL_CHARS};
pub use mood::{MoodEntry, MoodError, MoodScore};
pub use presence::OnlineCount;
