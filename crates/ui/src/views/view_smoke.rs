use std::time::Duration;

use dioxus::prelude::{ReadableExt, WritableExt};
use services::NOTIFICATION_TTL;
use services::Notification;
use services::PRESENCE_TICK;
use wellness_core::model::PlotId;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn home_view_posts_welcome_after_delay() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let html = harness.render();
    assert!(html.contains("12 online"), "missing online count in {html}");
    assert!(!html.contains("Welcome to NeuraMate"), "welcome shown too early in {html}");

    harness.drive_for(Duration::from_millis(1500)).await;
    let html = harness.render();
    assert!(html.contains("Welcome to NeuraMate"), "missing welcome in {html}");
    assert!(html.contains("Yuvaa"), "missing assistant name in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn home_view_resolves_each_pending_reply() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.act(|page| {
        assert!(page.send_message("I feel anxious"));
        assert!(page.send_message("hello"));
        assert!(!page.send_message("   "));
    });
    let html = harness.render();
    assert!(html.contains("I feel anxious"), "missing user message in {html}");
    assert!(html.contains("typing-dots"), "missing typing indicator in {html}");

    harness.drive_for(Duration::from_millis(100)).await;
    let html = harness.render();
    assert!(
        html.contains("anxiety can be overwhelming"),
        "missing anxiety reply in {html}"
    );
    assert!(
        html.contains("your mental health journey"),
        "missing greeting reply in {html}"
    );
    assert!(!html.contains("typing-dots"), "typing indicator left in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn presence_ticks_while_chat_is_not_mounted() {
    let mut harness = setup_view_harness(ViewKind::Faq);
    assert_eq!(harness.read(|page| page.presence.read().ticks()), 0);

    harness
        .drive_for(PRESENCE_TICK * 3 + Duration::from_secs(1))
        .await;
    assert_eq!(harness.read(|page| page.presence.read().ticks()), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn garden_view_renders_empty_garden() {
    let harness = setup_view_harness(ViewKind::Garden);
    let html = harness.render();
    assert_eq!(html.matches("plant-plot empty").count(), 12, "plots in {html}");
    assert!(html.contains("Green Thumb"), "missing achievement in {html}");
    assert!(html.contains("0/1"), "missing achievement progress in {html}");
    assert!(html.contains("Locked"), "missing locked label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn garden_view_reflects_grown_plant_and_unlock() {
    let mut harness = setup_view_harness(ViewKind::Garden);
    harness.act(|page| {
        let mut garden = page.garden;
        let plot = PlotId::new(1).expect("plot");
        for _ in 0..4 {
            let update = garden.write().water_plot(plot);
            page.notify_all(&update.notifications);
        }
    });
    let html = harness.render();
    assert!(html.contains("plant-plot grown"), "missing grown plot in {html}");
    assert!(html.contains("fas fa-tree"), "missing tree icon in {html}");
    assert!(html.contains("Unlocked!"), "missing unlocked card in {html}");
    assert!(
        html.contains("Achievement Unlocked: Green Thumb"),
        "missing unlock toast in {html}"
    );
    assert!(html.contains("Growth: 100%"), "missing growth toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hub_view_opens_on_mood_tracker() {
    let harness = setup_view_harness(ViewKind::Hub);
    let html = harness.render();
    assert!(html.contains("tab-btn active"), "missing active tab in {html}");
    assert!(html.contains("7/10"), "missing default mood in {html}");
    assert!(html.contains("😄"), "missing mood emoji in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn faq_view_starts_collapsed() {
    let harness = setup_view_harness(ViewKind::Faq);
    let html = harness.render();
    assert!(html.contains("Who is Yuvaa?"), "missing question in {html}");
    assert!(!html.contains("faq-answer"), "answer open by default in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn contact_view_renders_form() {
    let harness = setup_view_harness(ViewKind::Contact);
    let html = harness.render();
    assert!(html.contains("contactForm"), "missing form in {html}");
    assert!(html.contains("Send Message"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn toast_disappears_after_ttl() {
    let mut harness = setup_view_harness(ViewKind::Faq);
    harness.act(|page| page.notify(&Notification::new("Mood entry saved: 7/10")));
    let html = harness.render();
    assert!(html.contains("Mood entry saved: 7/10"), "missing toast in {html}");

    harness
        .drive_for(NOTIFICATION_TTL + Duration::from_millis(500))
        .await;
    let html = harness.render();
    assert!(!html.contains("Mood entry saved"), "toast still shown in {html}");
}
