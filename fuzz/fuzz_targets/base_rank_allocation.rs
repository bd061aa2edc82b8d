// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for base-rank allocation against a model.
//!
//! The allocator's whole contract is read-or-create: one rank per authority,
//! forever, with the cursor stepping by exactly one per fresh authority. A
//! plain HashMap mirror replays every call; any divergence between the
//! allocator and the mirror is a bug. The input shape is biased toward
//! repeats - idempotence bugs only show up when an authority comes back.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ordo::{BaseRankAllocator, BASE_RANK_DEFAULT, SETTINGS_AUTHORITY};
use std::collections::HashMap;

/// One allocation call, drawn from a pool small enough to force repeats.
#[derive(Debug, Clone)]
struct AuthorityPick(String);

impl<'a> arbitrary::Arbitrary<'a> for AuthorityPick {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let authority = match u.int_in_range(0..=9)? {
            // The seed, often enough to matter
            0 | 1 => SETTINGS_AUTHORITY.to_string(),
            // A small recurring pool, so most calls are re-sights
            2..=6 => format!("com.example.provider.p{}", u.int_in_range(0..=7u8)?),
            // Spellings adjacent to the seed, which must NOT be the seed
            7 => "com.android.Settings".to_string(),
            8 => String::new(),
            // Fresh-ish random lowercase authority
            _ => {
                let len = u.int_in_range(1..=16)?;
                let bytes: Vec<u8> = (0..len)
                    .map(|_| u.int_in_range(b'a'..=b'z'))
                    .collect::<Result<_, _>>()?;
                String::from_utf8(bytes).unwrap_or_default()
            }
        };
        Ok(AuthorityPick(authority))
    }
}

fuzz_target!(|script: Vec<AuthorityPick>| {
    let allocator = BaseRankAllocator::new();

    // The model the allocator must agree with, seeded the same way.
    let mut model: HashMap<String, i32> = HashMap::new();
    model.insert(SETTINGS_AUTHORITY.to_string(), 0);
    let mut model_cursor = BASE_RANK_DEFAULT;

    for AuthorityPick(authority) in script {
        let cursor_before = allocator.current_base_rank();
        let was_known = model.contains_key(&authority);
        let assigned = allocator.base_rank_for(&authority);

        // INVARIANT 1: The answer matches the read-or-create model exactly
        let expected = *model.entry(authority.clone()).or_insert_with(|| {
            model_cursor += 1;
            model_cursor
        });
        assert_eq!(
            assigned, expected,
            "allocator diverged from model for '{}'",
            authority
        );

        // INVARIANT 2: Domain - the seed's 0 or strictly above the threshold
        assert!(
            assigned == 0 || assigned > BASE_RANK_DEFAULT,
            "base rank {} for '{}' outside the dynamic domain",
            assigned,
            authority
        );

        // INVARIANT 3: The cursor steps by exactly one per fresh authority,
        // and never for a re-sight
        let cursor_after = allocator.current_base_rank();
        if was_known {
            assert_eq!(cursor_after, cursor_before);
        } else {
            assert_eq!(cursor_after, cursor_before + 1);
            assert_eq!(cursor_after, assigned);
        }
    }

    // INVARIANT 4: Injectivity - no two authorities share a rank
    let mut by_rank: HashMap<i32, &String> = HashMap::new();
    for (authority, rank) in &model {
        if let Some(other) = by_rank.insert(*rank, authority) {
            panic!("rank {} assigned to both '{}' and '{}'", rank, other, authority);
        }
        // And the allocator still agrees after all the traffic.
        assert_eq!(allocator.base_rank_for(authority), *rank);
    }

    // INVARIANT 5: Registration count matches the model
    assert_eq!(allocator.assigned_len(), model.len());
});
