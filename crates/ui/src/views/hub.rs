use dioxus::prelude::*;
use services::Notification;
use wellness_core::model::affirmation::AFFIRMATION_FOCUSES;
use wellness_core::model::{BreathingPattern, BreathingPhase, BreathingSession, JournalDraft, MoodScore};

use crate::context::PageState;
use crate::vm::{
    HubTab, JOURNAL_TAGS, TagSelection, breathing_label, map_habits, map_journal_stats, map_mood,
};

#[component]
pub fn HubView() -> Element {
    let mut tab = use_signal(HubTab::default);
    let active = tab();

    rsx! {
        section { class: "page hub-page",
            h2 { "Wellness Hub" }
            div { class: "hub-tabs",
                for item in HubTab::ALL {
                    button {
                        key: "{item.label()}",
                        class: item.button_class(active),
                        onclick: move |_| tab.set(item),
                        "{item.label()}"
                    }
                }
            }
            div { class: "tab-content",
                match active {
                    HubTab::Mood => rsx! { MoodPanel {} },
                    HubTab::Journal => rsx! { JournalPanel {} },
                    HubTab::Habits => rsx! { HabitsPanel {} },
                    HubTab::Breathing => rsx! { BreathingPanel {} },
                    HubTab::Affirmations => rsx! { AffirmationsPanel {} },
                }
            }
        }
    }
}

// ─── Mood ──────────────────────────────────────────────────────────────────────

#[component]
fn MoodPanel() -> Element {
    let page = use_context::<PageState>();
    let mut hub = page.hub;
    let mut score = use_signal(MoodScore::default);
    let vm = map_mood(&hub.read(), score());

    rsx! {
        div { class: "tab-panel mood-panel",
            h3 { "How are you feeling today?" }
            div { class: "mood-display",
                span { class: "mood-emoji", id: "moodEmoji", "{vm.emoji}" }
                span { class: "mood-value", id: "moodValue", "{vm.value}/10" }
            }
            input {
                id: "moodSlider",
                r#type: "range",
                min: "1",
                max: "10",
                value: "{vm.value}",
                oninput: move |evt| {
                    if let Some(next) = evt.value().parse::<u8>().ok().and_then(|v| MoodScore::new(v).ok()) {
                        score.set(next);
                    }
                },
            }
            button {
                class: "primary-btn",
                onclick: move |_| {
                    let notification = hub.write().save_mood(score());
                    page.notify(&notification);
                },
                "Save Mood"
            }
            div { class: "mood-stats",
                p { "Entries: {vm.total_entries}" }
                p { "Average: {vm.average}" }
            }
        }
    }
}

// ─── Journal ───────────────────────────────────────────────────────────────────

#[component]
fn JournalPanel() -> Element {
    let page = use_context::<PageState>();
    let mut hub = page.hub;
    let mut text = use_signal(String::new);
    let mut tags = use_signal(TagSelection::default);
    let stats = map_journal_stats(&hub.read());
    let selection = tags();

    let save = move |_: MouseEvent| {
        let draft = JournalDraft::new(text()).with_tags(tags.read().to_vec());
        let result = hub.write().save_journal(draft);
        match result {
            Ok(notification) => {
                text.set(String::new());
                tags.set(TagSelection::default());
                page.notify(&notification);
            }
            Err(err) => page.notify(&Notification::new(err.user_message())),
        }
    };

    rsx! {
        div { class: "tab-panel journal-panel",
            h3 { "Journal" }
            div { class: "journal-tags",
                for tag in JOURNAL_TAGS {
                    button {
                        key: "{tag}",
                        class: if selection.is_active(tag) { "tag-btn active" } else { "tag-btn" },
                        onclick: move |_| tags.write().toggle(tag),
                        "{tag}"
                    }
                }
            }
            textarea {
                id: "journalText",
                placeholder: "Write about your day...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            button { class: "primary-btn", onclick: save, "Save Entry" }
            div { class: "journal-stats",
                p { "Total entries: {stats.total}" }
                p { "This week: {stats.this_week}" }
                if let Some(saved) = stats.last_saved {
                    p { "Last saved: {saved}" }
                }
            }
        }
    }
}

// ─── Habits ────────────────────────────────────────────────────────────────────

#[component]
fn HabitsPanel() -> Element {
    let page = use_context::<PageState>();
    let mut hub = page.hub;
    let mut new_habit = use_signal(String::new);
    let rows = map_habits(&hub.read());

    // The next state comes from the row, not the DOM event.
    let toggle = use_callback(move |(index, checked): (usize, bool)| {
        let result = hub.write().check_habit(index, checked);
        match result {
            Ok(Some(notification)) => page.notify(&notification),
            Ok(None) => {}
            Err(err) => page.notify(&Notification::new(err.user_message())),
        }
    });

    let add = move |_: MouseEvent| {
        let result = hub.write().add_habit(&new_habit.read());
        match result {
            Ok(notification) => {
                new_habit.set(String::new());
                page.notify(&notification);
            }
            Err(err) => page.notify(&Notification::new(err.user_message())),
        }
    };

    rsx! {
        div { class: "tab-panel habits-panel",
            h3 { "Daily Habits" }
            ul { class: "habit-list",
                for row in rows {
                    li { key: "{row.index}", class: "habit-item",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: row.checked,
                                onchange: move |_| toggle.call((row.index, !row.checked)),
                            }
                            span { class: "habit-name", "{row.name}" }
                        }
                        span { class: "habit-streak", "{row.streak} day streak" }
                    }
                }
            }
            div { class: "habit-add",
                input {
                    id: "newHabit",
                    r#type: "text",
                    placeholder: "Add a new habit",
                    value: "{new_habit}",
                    oninput: move |evt| new_habit.set(evt.value()),
                }
                button { class: "primary-btn", onclick: add, "Add Habit" }
            }
        }
    }
}

// ─── Breathing ─────────────────────────────────────────────────────────────────

#[component]
fn BreathingPanel() -> Element {
    let page = use_context::<PageState>();
    let mut hub = page.hub;
    let mut phase = use_signal(|| None::<BreathingPhase>);
    let mut running = use_signal(|| false);
    // Bumped on every start/stop so a stale loop notices it was superseded.
    let mut run_id = use_signal(|| 0_u64);
    let selected = hub.read().pattern();

    let toggle_session = move |_: MouseEvent| {
        let id = run_id() + 1;
        run_id.set(id);
        if running() {
            running.set(false);
            phase.set(None);
            return;
        }
        running.set(true);
        spawn(async move {
            let session = BreathingSession::default();
            let steps = session.cycles() * 3;
            for step in 0..steps {
                phase.set(session.phase_at(session.phase_len() * step));
                tokio::time::sleep(session.phase_len()).await;
                if run_id() != id {
                    return;
                }
            }
            running.set(false);
            phase.set(None);
            let notification = hub.write().finish_breathing();
            page.notify(&notification);
        });
    };

    rsx! {
        div { class: "tab-panel breathing-panel",
            h3 { "{selected.name()}" }
            div { class: "breathing-options",
                for pattern in BreathingPattern::ALL {
                    button {
                        key: "{pattern.key()}",
                        class: if pattern == selected { "breathing-option active" } else { "breathing-option" },
                        "data-pattern": pattern.key(),
                        onclick: move |_| hub.write().select_pattern(pattern),
                        "{pattern.name()}"
                    }
                }
            }
            button {
                class: if running() { "breathing-circle active" } else { "breathing-circle" },
                id: "breathingBtn",
                onclick: toggle_session,
                "{breathing_label(phase())}"
            }
        }
    }
}

// ─── Affirmations ──────────────────────────────────────────────────────────────

#[component]
fn AffirmationsPanel() -> Element {
    let page = use_context::<PageState>();
    let mut hub = page.hub;
    let mut focus = use_signal(|| AFFIRMATION_FOCUSES[0]);
    let text = hub.read().affirmation();

    rsx! {
        div { class: "tab-panel affirmations-panel",
            h3 { "Daily Affirmation" }
            div { class: "affirmation-focus",
                for item in AFFIRMATION_FOCUSES {
                    button {
                        key: "{item}",
                        class: if focus() == item { "tag-btn active" } else { "tag-btn" },
                        onclick: move |_| focus.set(item),
                        "{item}"
                    }
                }
            }
            blockquote { class: "affirmation-text", id: "affirmationText", "{text}" }
            button {
                class: "primary-btn",
                onclick: move |_| {
                    let notification = hub.write().next_affirmation();
                    page.notify(&notification);
                },
                "New Affirmation"
            }
        }
    }
}
