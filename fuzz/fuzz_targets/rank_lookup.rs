// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for static rank lookup totality.
//!
//! The table must accept any string the indexing pipeline could ever hand it
//! and answer from exactly two domains: a curated rank or the fallback. No
//! panic, no third kind of answer, no state change - whatever bytes the
//! fuzzer invents.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ordo::{RankTable, ScreenCategory, ScreenId, RANK_OTHERS};

fuzz_target!(|identifier: &[u8]| {
    // Convert to string, handling invalid UTF-8
    let identifier = String::from_utf8_lossy(identifier);

    let table = RankTable::curated();
    let rank = table.rank_for(&identifier);

    // INVARIANT 1: Lookups are total and land in the static domain
    assert!(
        rank == RANK_OTHERS || (rank >= 1 && rank <= ScreenCategory::COUNT as i32),
        "rank {} for '{}' is neither curated nor the fallback",
        rank,
        identifier
    );

    // INVARIANT 2: is_curated agrees with the returned rank
    assert_eq!(
        table.is_curated(&identifier),
        rank != RANK_OTHERS,
        "is_curated disagrees with rank {} for '{}'",
        rank,
        identifier
    );

    // INVARIANT 3: Enum resolution agrees with the table
    match ScreenId::from_name(&identifier) {
        Some(screen) => assert_eq!(rank, screen.rank()),
        None => assert_eq!(rank, RANK_OTHERS),
    }

    // INVARIANT 4: Lookups are pure - asking again changes nothing
    assert_eq!(table.rank_for(&identifier), rank);
    assert_eq!(table.len(), ScreenId::ALL.len());
});
