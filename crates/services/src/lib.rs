#![forbid(unsafe_code)]

pub mod chat_service;
pub mod contact_service;
pub mod error;
pub mod garden_service;
pub mod hub_service;
pub mod notification;
pub mod presence;
pub mod responder;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use wellness_core::Clock;

pub use chat_service::{ChatService, PendingReply, WELCOME_DELAY};
pub use contact_service::ContactService;
pub use error::{ChatError, ContactServiceError, GardenError, HubError};
pub use garden_service::{GardenService, GardenUpdate};
pub use hub_service::HubService;
pub use notification::{NOTIFICATION_TTL, Notification};
pub use presence::{PRESENCE_TICK, PresenceService};
pub use responder::{Topic, respond};

/// Random source for the services: deterministic when seeded, OS entropy otherwise.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
