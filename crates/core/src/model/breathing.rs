use std::time::Duration;

/// Guided breathing styles offered in the hub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BreathingPattern {
    #[default]
    FourSevenEight,
    Box,
    QuickCalm,
}

impl BreathingPattern {
    pub const ALL: [BreathingPattern; 3] = [
        BreathingPattern::FourSevenEight,
        BreathingPattern::Box,
        BreathingPattern::QuickCalm,
    ];

    /// Key used by the option buttons.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            BreathingPattern::FourSevenEight => "4-7-8",
            BreathingPattern::Box => "box",
            BreathingPattern::QuickCalm => "quick",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pattern| pattern.key() == key)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BreathingPattern::FourSevenEight => "4-7-8 Breathing Pattern",
            BreathingPattern::Box => "Box Breathing Pattern",
            BreathingPattern::QuickCalm => "Quick Calm Pattern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingPhase {
    In,
    Hold,
    Out,
}

impl BreathingPhase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BreathingPhase::In => "Breathe In",
            BreathingPhase::Hold => "Hold",
            BreathingPhase::Out => "Breathe Out",
        }
    }
}

/// Button label when no session is running.
pub const IDLE_LABEL: &str = "Breathe";

/// Fixed schedule of a guided session: each cycle is in, hold, out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingSession {
    cycles: u32,
    phase_len: Duration,
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self {
            cycles: 3,
            phase_len: Duration::from_secs(2),
        }
    }
}

impl BreathingSession {
    #[must_use]
    pub fn new(cycles: u32, phase_len: Duration) -> Self {
        Self { cycles, phase_len }
    }

    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    #[must_use]
    pub fn phase_len(&self) -> Duration {
        self.phase_len
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.phase_len * 3 * self.cycles
    }

    /// Phase at `elapsed` since start, or `None` once the session is over.
    #[must_use]
    pub fn phase_at(&self, elapsed: Duration) -> Option<BreathingPhase> {
        if self.phase_len.is_zero() || elapsed >= self.total() {
            return None;
        }
        let step = elapsed.as_millis() / self.phase_len.as_millis();
        Some(match step % 3 {
            0 => BreathingPhase::In,
            1 => BreathingPhase::Hold,
            _ => BreathingPhase::Out,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_keys_round_trip() {
        for pattern in BreathingPattern::ALL {
            assert_eq!(BreathingPattern::from_key(pattern.key()), Some(pattern));
        }
        assert_eq!(BreathingPattern::from_key("square"), None);
        assert_eq!(BreathingPattern::Box.name(), "Box Breathing Pattern");
    }

    #[test]
    fn default_session_runs_three_six_second_cycles() {
        let session = BreathingSession::default();
        assert_eq!(session.total(), Duration::from_secs(18));

        let at = |secs: u64| session.phase_at(Duration::from_secs(secs));
        assert_eq!(at(0), Some(BreathingPhase::In));
        assert_eq!(at(2), Some(BreathingPhase::Hold));
        assert_eq!(at(4), Some(BreathingPhase::Out));
        assert_eq!(at(6), Some(BreathingPhase::In));
        assert_eq!(at(17), Some(BreathingPhase::Out));
        assert_eq!(at(18), None);
    }

    #[test]
    fn zero_length_phase_never_runs() {
        let session = BreathingSession::new(3, Duration::ZERO);
        assert_eq!(session.phase_at(Duration::ZERO), None);
    }
}
