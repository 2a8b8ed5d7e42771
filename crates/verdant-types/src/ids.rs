//! Type-safe leaf identifier.
//!
//! Leaf ids are small integers assigned by the leaf population: the first
//! leaf is `1` and every new leaf takes `max existing id + 1`. Ids are never
//! reused while a higher id is still alive.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a leaf on the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LeafId(pub u32);

impl LeafId {
    /// The id given to the first leaf of an empty population.
    pub const FIRST: Self = Self(1);

    /// Return the id that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for LeafId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "leaf#{}", self.0)
    }
}

impl From<u32> for LeafId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<LeafId> for u32 {
    fn from(id: LeafId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(LeafId::FIRST.next(), LeafId(2));
    }

    #[test]
    fn next_saturates() {
        assert_eq!(LeafId(u32::MAX).next(), LeafId(u32::MAX));
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(LeafId(7).to_string(), "leaf#7");
    }
}
