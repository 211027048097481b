use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus::dioxus_core::spawn_forever;
use services::responder::{REPLY_DELAY_MAX, REPLY_DELAY_MIN};
use services::{
    ChatService, Clock, ContactService, GardenService, HubService, Notification, PRESENCE_TICK,
    PresenceService, rng_from_seed,
};
use wellness_core::model::{DailyActivity, default_daily_activities};

use crate::vm::{ChatLog, ToastQueue};

/// What the composition root (`crates/app`) supplies to the UI.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String {
        "NeuraMate".to_string()
    }

    /// Seed for every random source; `None` uses OS entropy.
    fn rng_seed(&self) -> Option<u64>;

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn reply_delay(&self) -> (Duration, Duration) {
        (REPLY_DELAY_MIN, REPLY_DELAY_MAX)
    }

    fn daily_activities(&self) -> Vec<DailyActivity> {
        default_daily_activities()
    }
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    rng_seed: Option<u64>,
    clock: Clock,
    reply_delay: (Duration, Duration),
    daily_activities: Arc<Vec<DailyActivity>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            rng_seed: app.rng_seed(),
            clock: app.clock(),
            reply_delay: app.reply_delay(),
            daily_activities: Arc::new(app.daily_activities()),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Separate, reproducible streams per service when seeded.
    fn stream_seed(&self, stream: u64) -> Option<u64> {
        self.rng_seed.map(|seed| seed.wrapping_add(stream))
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Page-lifetime state: every controller plus the chat log and toasts.
///
/// Created once by the root component and shared through context; signals are
/// `Copy`, so handlers capture it by value.
#[derive(Clone, Copy, PartialEq)]
pub struct PageState {
    pub chat: Signal<ChatService>,
    pub chat_log: Signal<ChatLog>,
    pub garden: Signal<GardenService>,
    pub hub: Signal<HubService>,
    pub contact: Signal<ContactService>,
    pub presence: Signal<PresenceService>,
    pub toasts: Signal<ToastQueue>,
}

impl PageState {
    /// Must be called inside a component scope (the signals are owned by it).
    ///
    /// Also starts the online-count ticker, which runs for the page's lifetime.
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        let (min, max) = ctx.reply_delay;
        let chat = ChatService::new(rng_from_seed(ctx.stream_seed(0)));
        let chat = match chat.with_reply_delay(min, max) {
            Ok(chat) => chat,
            Err(err) => {
                tracing::warn!(%err, "ignoring reply delay override");
                ChatService::new(rng_from_seed(ctx.stream_seed(0)))
            }
        };

        let page = Self {
            chat: Signal::new(chat),
            chat_log: Signal::new(ChatLog::default()),
            garden: Signal::new(GardenService::new(ctx.daily_activities.as_ref().clone())),
            hub: Signal::new(HubService::new(ctx.clock, rng_from_seed(ctx.stream_seed(1)))),
            contact: Signal::new(ContactService::new()),
            presence: Signal::new(PresenceService::new(rng_from_seed(ctx.stream_seed(2)))),
            toasts: Signal::new(ToastQueue::default()),
        };
        page.start_presence_ticker();
        page
    }

    fn start_presence_ticker(self) {
        let mut presence = self.presence;
        spawn_forever(async move {
            loop {
                tokio::time::sleep(PRESENCE_TICK).await;
                let count = presence.write().tick();
                tracing::trace!(online = count.value(), "presence tick");
            }
        });
    }

    /// Post a user message and schedule its reply. Blank input is ignored.
    ///
    /// Each reply lands on its own timer, even if the chat view is gone by then.
    pub fn send_message(self, text: &str) -> bool {
        let mut chat = self.chat;
        let mut chat_log = self.chat_log;
        let Some(pending) = chat.write().submit(text) else {
            return false;
        };
        chat_log.write().push(&pending.user);
        chat_log.write().begin_reply();
        spawn_forever(async move {
            tokio::time::sleep(pending.delay).await;
            chat_log.write().finish_reply(&pending.reply);
        });
        true
    }

    /// Show a toast and schedule its removal.
    ///
    /// The timer runs at the root scope so it outlives the view that raised it.
    pub fn notify(self, notification: &Notification) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(notification.message());
        let ttl = notification.ttl();
        spawn_forever(async move {
            tokio::time::sleep(ttl).await;
            toasts.write().dismiss(id);
        });
    }

    pub fn notify_all(self, notifications: &[Notification]) {
        for notification in notifications {
            self.notify(notification);
        }
    }
}
