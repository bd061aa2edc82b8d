//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::ranking::{BaseRankAllocator, RankTable};

/// Deterministic, pairwise-distinct provider authority strings.
///
/// This is the canonical way tests mint fresh authorities.
pub fn provider_authority(n: usize) -> String {
    format!("com.example.provider.p{}", n)
}

/// A small hand-built table: two identifiers sharing a rank, one alone.
///
/// Useful when a test needs many-to-one behavior without dragging in the
/// full curated table.
pub fn tiny_table() -> RankTable {
    RankTable::from_entries([("alpha", 1), ("beta", 2), ("beta.child", 2)])
}

/// Assign base ranks to `count` fresh authorities, in order.
///
/// Returns the assigned values. Starts from `provider_authority(0)`, so call
/// it once per allocator unless overlap is the point of the test.
pub fn assign_batch(allocator: &BaseRankAllocator, count: usize) -> Vec<i32> {
    (0..count)
        .map(|n| allocator.base_rank_for(&provider_authority(n)))
        .collect()
}
