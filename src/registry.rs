// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One object owning both halves of the rank state.
//!
//! The static table and the dynamic allocator answer different questions, but
//! callers almost always need both while assembling a result list. The
//! registry bundles them so the aggregation pipeline threads a single handle
//! around instead of two, and so tests can spin up isolated rank spaces
//! instead of sharing process-wide statics.
//!
//! The registry is `Sync`: the table is immutable after construction and the
//! allocator locks internally. Share one instance via `Arc`; cloning the
//! registry itself would fork the dynamic rank space, which is almost never
//! what you want, so it does not implement `Clone`.

use crate::ranking::{BaseRankAllocator, RankTable};
use crate::screen::ScreenId;

/// Static table plus dynamic allocator behind one handle.
#[derive(Debug, Default)]
pub struct RankRegistry {
    table: RankTable,
    allocator: BaseRankAllocator,
}

impl RankRegistry {
    /// Registry with the curated screen table and a fresh allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a caller-supplied table. The allocator always starts
    /// fresh; there is no such thing as a pre-populated dynamic side.
    pub fn with_table(table: RankTable) -> Self {
        Self {
            table,
            allocator: BaseRankAllocator::new(),
        }
    }

    /// Sort rank for a screen identifier string. Unknown identifiers get the
    /// fallback rank, never an error.
    pub fn rank_for(&self, identifier: &str) -> i32 {
        self.table.rank_for(identifier)
    }

    /// Sort rank for a known screen. Infallible: every [`ScreenId`] is in the
    /// curated table by construction.
    pub fn rank_for_screen(&self, screen: ScreenId) -> i32 {
        self.table.rank_for(screen.name())
    }

    /// Base rank for a result-source authority, assigning one on first sight.
    pub fn base_rank_for(&self, authority: &str) -> i32 {
        self.allocator.base_rank_for(authority)
    }

    /// The static side, for introspection.
    pub fn table(&self) -> &RankTable {
        &self.table
    }

    /// The dynamic side, for introspection.
    pub fn allocator(&self) -> &BaseRankAllocator {
        &self.allocator
    }
}
