// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The static rank table: curated screens get curated ranks.
//!
//! Rank domains are bucketed by provenance, not by score. A curated screen at
//! rank 20 still sorts ahead of every uncurated screen, because the fallback
//! sits far above the curated range. Getting the constants wrong here quietly
//! reshuffles search results, hence the compile-time pins in `contracts.rs`.
//!
//! # Rank domains
//!
//! | Domain             | Values   | Who lands here                          |
//! |--------------------|----------|-----------------------------------------|
//! | undefined sentinel | `-1`     | payload rows not yet ranked             |
//! | curated            | `1..=20` | screens in the catalog (`ScreenId`)     |
//! | others             | `1024`   | any identifier absent from the table    |
//! | dynamic groups     | `2049..` | provider authorities, via the allocator |
//!
//! # Key invariant: domain separation
//!
//! The constants satisfy (pinned at compile time):
//!
//! ```text
//! curated max (20) < RANK_OTHERS (1024) < BASE_RANK_DEFAULT (2048)
//! ```
//!
//! So curated screens sort first, the fallback bucket second, and dynamic
//! authority groups last, with room to spare in each gap.

use crate::screen::ScreenId;
use std::collections::HashMap;

// =============================================================================
// RANK CONSTANTS
// =============================================================================
// DO NOT CHANGE without revisiting the const assertions in contracts.rs and
// the domain tests in tests/property.rs. Published payloads depend on these.

/// Sentinel for "no rank assigned yet". Never returned by any lookup here;
/// indexing payloads use it as their pre-ranking default.
pub const RANK_UNDEFINED: i32 = -1;

/// Rank for every identifier the curated table does not know.
///
/// Numerically above every curated rank, so unknown screens sort after all
/// known ones while still forming a single stable bucket.
pub const RANK_OTHERS: i32 = 1024;

/// Starting threshold for the base-rank allocator cursor.
///
/// Chosen above [`RANK_OTHERS`] so dynamically discovered authorities always
/// sort after both the curated range and the fallback bucket. The threshold
/// itself is never issued: the cursor pre-increments, so the first dynamic
/// authority receives `2049`.
pub const BASE_RANK_DEFAULT: i32 = 2048;

// =============================================================================
// STATIC RANK TABLE
// =============================================================================

/// Immutable identifier-to-rank mapping, populated once at construction.
///
/// Ranks need not be unique: sibling screens of one conceptual category share
/// a value (all four notification screens rank 8). No ordering is implied
/// among same-rank identifiers - that tie-break belongs to the result sorter.
#[derive(Debug, Clone)]
pub struct RankTable {
    by_identifier: HashMap<&'static str, i32>,
}

impl RankTable {
    /// The standard table: every screen in the curated catalog, keyed by its
    /// stable name, ranked by its category.
    pub fn curated() -> Self {
        Self::from_entries(ScreenId::ALL.iter().map(|s| (s.name(), s.rank())))
    }

    /// Build a table from explicit `(identifier, rank)` pairs.
    ///
    /// Later pairs win on duplicate identifiers; distinct identifiers may
    /// freely share a rank. Embedders with their own catalog use this, the
    /// standard catalog goes through [`RankTable::curated`].
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, i32)>) -> Self {
        Self {
            by_identifier: entries.into_iter().collect(),
        }
    }

    /// Look up the display rank for an identifier.
    ///
    /// Curated identifiers return their curated rank; everything else returns
    /// [`RANK_OTHERS`]. Absence is a normal, expected case - there is no error
    /// path, and this never returns [`RANK_UNDEFINED`].
    pub fn rank_for(&self, identifier: &str) -> i32 {
        self.by_identifier
            .get(identifier)
            .copied()
            .unwrap_or(RANK_OTHERS)
    }

    /// Is this identifier in the curated table?
    pub fn is_curated(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// Number of curated identifiers (not categories).
    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    /// True for a table with no entries, where every lookup falls back.
    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::curated()
    }
}
