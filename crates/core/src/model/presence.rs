/// Simulated "people online" counter shown in the chat header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnlineCount(u32);

impl OnlineCount {
    pub const MIN: u32 = 8;
    pub const MAX: u32 = 20;
    pub const INITIAL: u32 = 12;

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Shift the count by `delta`, staying within `MIN..=MAX`.
    #[must_use]
    pub fn drift(self, delta: i32) -> Self {
        let next = i64::from(self.0) + i64::from(delta);
        let clamped = next.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u32::try_from(clamped).unwrap_or(Self::MIN))
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{} online", self.0)
    }
}

impl Default for OnlineCount {
    fn default() -> Self {
        Self(Self::INITIAL)
    }
}
