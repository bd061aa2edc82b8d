//! Runtime contracts for the rank number line.
//!
//! This module provides debug-mode assertions that verify the numeric
//! invariants the rest of the crate leans on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Pin the **domain separation** that makes ranks comparable at all
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Sorting only works because the four rank domains never overlap. Every
//! function here verifies one slice of that claim.
//!
//! | Contract Function        | Invariant                                      |
//! |--------------------------|------------------------------------------------|
//! | `check_rank_domains`     | undefined < curated < others < dynamic         |
//! | `check_curated_rank`     | curated ranks lie in `1..=ScreenCategory::COUNT` |
//! | `check_display_rank`     | table lookups return curated or fallback, only |
//! | `check_base_rank`        | base ranks are the seed's 0 or above the threshold |
//! | `check_table_complete`   | every known screen is in the curated table     |
//!
//! # Usage
//!
//! ```ignore
//! use ordo::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_display_rank(registry.rank_for(identifier));
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the rank domains are separated.
/// This is evaluated at compile time - if it fails, the crate won't build.
const _: () = {
    const HIGHEST_CURATED: i32 = crate::screen::ScreenCategory::COUNT as i32;

    // INVARIANT: undefined sits below every real rank
    assert!(crate::ranking::RANK_UNDEFINED < 0);
    assert!(crate::ranking::RANK_UNDEFINED < 1);

    // INVARIANT: curated_below_others
    // every curated rank sorts ahead of the fallback
    assert!(HIGHEST_CURATED < crate::ranking::RANK_OTHERS); // 20 < 1024 ✓

    // INVARIANT: others_below_dynamic
    // the fallback sorts ahead of every dynamically assigned base rank
    assert!(crate::ranking::RANK_OTHERS < crate::ranking::BASE_RANK_DEFAULT + 1); // 1024 < 2049 ✓
};

use crate::ranking::{RankTable, BASE_RANK_DEFAULT, RANK_OTHERS, RANK_UNDEFINED};
use crate::screen::{ScreenCategory, ScreenId};

// ============================================================================
// DOMAIN CONTRACTS
// ============================================================================

/// Check that the rank number line is carved up the way sorting assumes.
///
/// The constants are checked at compile time too; this runtime mirror exists
/// so a contract sweep over live state can include the constants without
/// special-casing them.
///
/// # Panics (debug builds only)
/// Panics if any pair of domains touches or overlaps.
#[inline]
pub fn check_rank_domains() {
    let highest_curated = ScreenCategory::COUNT as i32;

    debug_assert!(
        RANK_UNDEFINED < 0,
        "Contract violation: rank_domain_separation - \
         RANK_UNDEFINED {} is not negative",
        RANK_UNDEFINED
    );
    debug_assert!(
        highest_curated < RANK_OTHERS,
        "Contract violation: rank_domain_separation - \
         highest curated rank {} >= RANK_OTHERS {}",
        highest_curated,
        RANK_OTHERS
    );
    debug_assert!(
        RANK_OTHERS < BASE_RANK_DEFAULT + 1,
        "Contract violation: rank_domain_separation - \
         RANK_OTHERS {} >= first dynamic rank {}",
        RANK_OTHERS,
        BASE_RANK_DEFAULT + 1
    );
}

/// Check that a rank belongs to the curated domain.
///
/// # Panics (debug builds only)
/// Panics if `rank` is outside `1..=ScreenCategory::COUNT`.
#[inline]
pub fn check_curated_rank(rank: i32) {
    debug_assert!(
        rank >= 1 && rank <= ScreenCategory::COUNT as i32,
        "Contract violation: curated_rank_bounds - \
         rank {} outside 1..={}",
        rank,
        ScreenCategory::COUNT
    );
}

/// Check that a rank could have come out of a table lookup.
///
/// Table lookups are total and return either a curated rank or
/// [`RANK_OTHERS`]. Anything else means the table was built with entries
/// outside the curated domain, or the value came from somewhere else entirely.
///
/// # Panics (debug builds only)
/// Panics if `rank` is neither curated nor the fallback.
#[inline]
pub fn check_display_rank(rank: i32) {
    debug_assert!(
        rank == RANK_OTHERS || (rank >= 1 && rank <= ScreenCategory::COUNT as i32),
        "Contract violation: display_rank_domain - \
         rank {} is neither curated nor RANK_OTHERS {}",
        rank,
        RANK_OTHERS
    );
}

/// Check that a base rank could have come out of the allocator.
///
/// The allocator issues exactly two kinds of value: 0 for the seed authority
/// and cursor values strictly above [`BASE_RANK_DEFAULT`] for everyone else.
/// The threshold itself is never issued.
///
/// # Panics (debug builds only)
/// Panics if `base` is neither the seed's 0 nor above the threshold.
#[inline]
pub fn check_base_rank(base: i32) {
    debug_assert!(
        base == 0 || base > BASE_RANK_DEFAULT,
        "Contract violation: base_rank_domain - \
         base {} is neither 0 nor > BASE_RANK_DEFAULT {}",
        base,
        BASE_RANK_DEFAULT
    );
}

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that a table covers every known screen at its curated rank.
///
/// Holds for [`RankTable::curated`] by construction. Caller-supplied tables
/// may legitimately fail this; only sweep tables that claim to be complete.
///
/// # Panics (debug builds only)
/// Panics if any screen is missing or ranked off its curated value.
#[inline]
pub fn check_table_complete(table: &RankTable) {
    for screen in ScreenId::ALL {
        let rank = table.rank_for(screen.name());
        debug_assert!(
            rank != RANK_OTHERS,
            "Contract violation: table_covers_screens - \
             screen '{}' fell through to RANK_OTHERS",
            screen.name()
        );
        debug_assert_eq!(
            rank,
            screen.rank(),
            "Contract violation: table_covers_screens - \
             screen '{}' ranked {} (expected {})",
            screen.name(),
            rank,
            screen.rank()
        );
    }
}
