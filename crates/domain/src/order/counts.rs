//! Multiset of donut kinds.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::DonutKind;
use crate::error::ShopError;

use super::descriptor;

/// A bag of donut kinds: each kind maps to a non-negative occurrence count.
///
/// Used both for the shop's inventory and for the counts requested by an
/// order. Kinds with zero occurrences are never stored, and iteration follows
/// kind declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonutCounts(BTreeMap<DonutKind, u64>);

impl DonutCounts {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `CODE:COUNT,CODE:COUNT` descriptor.
    pub fn parse(descriptor: &str) -> Result<Self, ShopError> {
        descriptor::parse(descriptor)
    }

    /// Returns how many of `kind` the bag holds.
    pub fn occurrences_of(&self, kind: DonutKind) -> u64 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    /// Adds `count` occurrences of `kind`.
    pub fn add_occurrences(&mut self, kind: DonutKind, count: u64) {
        if count == 0 {
            return;
        }
        let entry = self.0.entry(kind).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Removes `count` occurrences of `kind`.
    ///
    /// Returns false and leaves the bag untouched if fewer than `count` are
    /// held.
    pub fn remove_occurrences(&mut self, kind: DonutKind, count: u64) -> bool {
        let held = self.occurrences_of(kind);
        if held < count {
            return false;
        }
        if held == count {
            self.0.remove(&kind);
        } else {
            self.0.insert(kind, held - count);
        }
        true
    }

    /// Returns the total number of donuts across all kinds, capped at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Returns the number of distinct kinds held.
    pub fn distinct_kinds(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag holds nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(kind, occurrences)` pairs in kind declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DonutKind, u64)> + '_ {
        self.0.iter().map(|(kind, count)| (*kind, *count))
    }

    /// Expands the bag into one entry per donut, in kind declaration order.
    pub fn expand(&self) -> impl Iterator<Item = DonutKind> + '_ {
        self.iter()
            .flat_map(|(kind, count)| std::iter::repeat_n(kind, count as usize))
    }
}

impl FromStr for DonutCounts {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonutCounts::parse(s)
    }
}

impl FromIterator<(DonutKind, u64)> for DonutCounts {
    fn from_iter<I: IntoIterator<Item = (DonutKind, u64)>>(iter: I) -> Self {
        let mut counts = DonutCounts::new();
        for (kind, count) in iter {
            counts.add_occurrences(kind, count);
        }
        counts
    }
}

impl std::fmt::Display for DonutCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (kind, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}={count}")?;
        }
        f.write_str("}")
    }
}
