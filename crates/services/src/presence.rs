use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use wellness_core::model::OnlineCount;

/// How often the online counter drifts.
pub const PRESENCE_TICK: Duration = Duration::from_secs(30);

/// Simulated online-user counter.
pub struct PresenceService {
    rng: StdRng,
    count: OnlineCount,
    ticks: u64,
}

impl PresenceService {
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            count: OnlineCount::default(),
            ticks: 0,
        }
    }

    #[must_use]
    pub fn count(&self) -> OnlineCount {
        self.count
    }

    /// Number of drifts applied so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drift by -1, 0 or +1 with equal probability.
    pub fn tick(&mut self) -> OnlineCount {
        self.ticks += 1;
        let delta = self.rng.random_range(-1..=1);
        self.count = self.count.drift(delta);
        self.count
    }
}
