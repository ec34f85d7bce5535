//! Record identifiers and their generator.
//!
//! Identifiers are millisecond timestamps at creation time, kept strictly
//! increasing by bumping past the previous id whenever the clock repeats
//! or runs backwards. Seed records use small fixed ids, which the
//! generator also skips past on load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single record within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw integer id (used by seeds and tests).
    #[must_use]
    pub fn from_raw(id: u64) -> Self {
        RecordId(id)
    }

    /// The raw integer value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(RecordId)
    }
}

/// Monotonic id source. One generator per store instance.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that will never emit an id at or below any id
    /// already present in `existing`.
    #[must_use]
    pub fn seeded(existing: impl IntoIterator<Item = RecordId>) -> Self {
        let last = existing
            .into_iter()
            .map(RecordId::as_u64)
            .max()
            .unwrap_or(0);
        IdGenerator { last }
    }

    /// Next identifier: the current millisecond clock, bumped when the
    /// clock has not advanced past the previous id.
    pub fn next_id(&mut self) -> RecordId {
        let now = chrono::Utc::now().timestamp_millis().unsigned_abs();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        RecordId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut generator = IdGenerator::default();
        let a = generator.next_id();
        let b = generator.next_id();
        let c = generator.next_id();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_seeded_skips_existing() {
        let far_future = RecordId::from_raw(u64::MAX - 10);
        let mut generator = IdGenerator::seeded([RecordId::from_raw(3), far_future]);
        assert!(generator.next_id() > far_future);
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let id = RecordId::from_raw(1_736_899_200_000);
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = RecordId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }
}
