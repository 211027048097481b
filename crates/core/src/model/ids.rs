use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of plots in the garden.
pub const PLOT_COUNT: u8 = 12;

/// Identifier of one of the fixed garden plots (1-based, `1..=PLOT_COUNT`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotId(u8);

impl PlotId {
    /// Creates a new `PlotId`
    ///
    /// # Errors
    ///
    /// Returns `PlotError::OutOfRange` if `id` is not in `1..=PLOT_COUNT`.
    pub fn new(id: u8) -> Result<Self, PlotError> {
        if (1..=PLOT_COUNT).contains(&id) {
            Ok(Self(id))
        } else {
            Err(PlotError::OutOfRange(id))
        }
    }

    /// Returns the underlying plot number
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-based slot index.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Every plot, in display order.
    pub fn all() -> impl Iterator<Item = PlotId> {
        (1..=PLOT_COUNT).map(PlotId)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlotError {
    #[error("plot {0} does not exist (expected 1..=12)")]
    OutOfRange(u8),
    #[error("invalid plot id: {0}")]
    Parse(String),
}

/// Identifier of a daily activity (trimmed, non-empty).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(pub(crate) String);

impl ActivityId {
    /// Creates a validated `ActivityId`
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::EmptyId` if the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ActivityError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ActivityError::EmptyId);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityError {
    #[error("activity id cannot be empty")]
    EmptyId,
}

impl fmt::Debug for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlotId({})", self.0)
    }
}

impl fmt::Debug for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

impl FromStr for PlotId {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = raw
            .parse::<u8>()
            .map_err(|_| PlotError::Parse(raw.to_string()))?;
        Self::new(value)
    }
}

impl FromStr for ActivityId {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_id_accepts_only_known_plots() {
        assert!(PlotId::new(1).is_ok());
        assert!(PlotId::new(12).is_ok());
        assert_eq!(PlotId::new(0), Err(PlotError::OutOfRange(0)));
        assert_eq!(PlotId::new(13), Err(PlotError::OutOfRange(13)));
    }

    #[test]
    fn plot_id_parses_from_markup_attribute() {
        let plot: PlotId = " 7 ".parse().unwrap();
        assert_eq!(plot.value(), 7);
        assert_eq!(plot.index(), 6);
        assert!(matches!("seven".parse::<PlotId>(), Err(PlotError::Parse(_))));
    }

    #[test]
    fn all_plots_are_listed_in_order() {
        let ids: Vec<u8> = PlotId::all().map(|plot| plot.value()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn activity_id_is_trimmed_and_non_empty() {
        assert_eq!(ActivityId::new("  meditation ").unwrap().as_str(), "meditation");
        assert_eq!(ActivityId::new("   "), Err(ActivityError::EmptyId));
    }
}
