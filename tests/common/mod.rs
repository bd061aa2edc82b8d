//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use ordo::{BASE_RANK_DEFAULT, RANK_OTHERS};

// Re-export canonical test utilities from ordo::testing
pub use ordo::testing::{assign_batch, provider_authority, tiny_table};

// ============================================================================
// WELL-KNOWN IDENTIFIERS
// ============================================================================

/// A curated screen with rank 1.
pub const WIFI_SCREEN: &str = "com.android.settings.wifi.WifiSettings";

/// A curated screen that shares its rank with three siblings.
pub const ZEN_MODE_SCREEN: &str = "com.android.settings.notification.ZenModeSettings";

/// An identifier no curated table knows about.
pub const UNKNOWN_SCREEN: &str = "com.example.vendor.ExtraSettings";

// ============================================================================
// INVARIANT HELPERS
// ============================================================================

/// Assert that `values` is exactly `start+1, start+2, ...` in order.
///
/// This is the shape every burst of fresh dynamic assignments must take.
pub fn assert_consecutive_from(values: &[i32], start: i32) {
    for (offset, &value) in values.iter().enumerate() {
        assert_eq!(
            value,
            start + 1 + offset as i32,
            "INVARIANT VIOLATED: assignment {} is {} (expected {})",
            offset,
            value,
            start + 1 + offset as i32
        );
    }
}

/// Assert that a rank belongs to the static side of the number line.
pub fn assert_static_rank(rank: i32) {
    assert!(
        rank == RANK_OTHERS || (1..=20).contains(&rank),
        "INVARIANT VIOLATED: rank {} is neither curated nor the fallback",
        rank
    );
}

/// Assert that a rank belongs to the dynamic side of the number line.
pub fn assert_dynamic_rank(base: i32) {
    assert!(
        base == 0 || base > BASE_RANK_DEFAULT,
        "INVARIANT VIOLATED: base rank {} is neither the seed nor above the threshold",
        base
    );
}
