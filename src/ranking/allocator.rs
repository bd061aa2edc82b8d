// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dynamic base-rank allocator: one offset per result source.
//!
//! Search aggregates results from several providers at once, and each
//! provider's group needs a numeric offset so groups never interleave. The
//! settings app's own results sit at offset 0; every other authority gets the
//! next free integer above [`BASE_RANK_DEFAULT`] the first time it shows up,
//! and that same integer forever after.
//!
//! The interesting part is what happens when two aggregation threads discover
//! the same authority at the same moment. The read-or-create sequence - check
//! the map, bump the cursor, insert - must be one critical section, or both
//! threads mint a rank and the authority ends up with two. One
//! [`parking_lot::Mutex`] guards the cursor and the map together; there is no
//! lock-free fast path, because the lock is held for a map probe and at most
//! one insert.
//!
//! Assigned base ranks are never reused, never reassigned, and never removed.
//! The allocator only grows, monotonically, for the life of the process.

use parking_lot::Mutex;
use std::collections::HashMap;

use super::table::BASE_RANK_DEFAULT;

/// The distinguished authority for the settings app's own results.
///
/// Pre-registered at base rank 0 before any dynamic call, so built-in results
/// always group first.
pub const SETTINGS_AUTHORITY: &str = "com.android.settings";

/// Cursor plus map, guarded together.
///
/// Keeping both under one lock is the whole correctness story: a cursor bump
/// must never be visible without its matching insert.
#[derive(Debug)]
struct AllocatorState {
    /// Highest base rank issued so far. Starts at [`BASE_RANK_DEFAULT`],
    /// which itself is never handed out.
    cursor: i32,
    /// Authority -> assigned base rank. Entries are never removed.
    base_ranks: HashMap<String, i32>,
}

/// Thread-safe base-rank registry for result-source authorities.
///
/// `Sync` by construction; share one instance via `Arc` across aggregation
/// threads. Two allocators are two independent rank spaces - results ranked
/// against different allocators cannot be meaningfully merged.
#[derive(Debug)]
pub struct BaseRankAllocator {
    state: Mutex<AllocatorState>,
}

impl BaseRankAllocator {
    /// Create an allocator with the settings authority pre-registered at 0.
    pub fn new() -> Self {
        let mut base_ranks = HashMap::new();
        base_ranks.insert(SETTINGS_AUTHORITY.to_string(), 0);
        Self {
            state: Mutex::new(AllocatorState {
                cursor: BASE_RANK_DEFAULT,
                base_ranks,
            }),
        }
    }

    /// Return the base rank for `authority`, assigning one if needed.
    ///
    /// Read-or-create, not a pure read: the first call for an unseen
    /// authority increments the shared cursor and records the new value; every
    /// later call returns that same value. The whole check-then-act sequence
    /// runs under the lock, so concurrent first calls for one authority agree
    /// and concurrent calls for distinct authorities get distinct, consecutive
    /// values.
    pub fn base_rank_for(&self, authority: &str) -> i32 {
        let mut state = self.state.lock();
        if let Some(&base) = state.base_ranks.get(authority) {
            return base;
        }
        state.cursor += 1;
        let assigned = state.cursor;
        state.base_ranks.insert(authority.to_string(), assigned);
        assigned
    }

    /// Has this authority been assigned a base rank already?
    ///
    /// Snapshot semantics: a `false` can be stale by the time you act on it.
    /// Use [`BaseRankAllocator::base_rank_for`] when you need the rank.
    pub fn is_assigned(&self, authority: &str) -> bool {
        self.state.lock().base_ranks.contains_key(authority)
    }

    /// Highest base rank issued so far.
    ///
    /// Equals [`BASE_RANK_DEFAULT`] until the first dynamic assignment. The
    /// seed authority's 0 does not count: it was never issued by the cursor.
    pub fn current_base_rank(&self) -> i32 {
        self.state.lock().cursor
    }

    /// Number of registered authorities, the seed included.
    pub fn assigned_len(&self) -> usize {
        self.state.lock().base_ranks.len()
    }
}

impl Default for BaseRankAllocator {
    fn default() -> Self {
        Self::new()
    }
}
