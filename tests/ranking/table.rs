//! Static table behavior through the public API.
//!
//! Tests that:
//! - Lookups are total: every string gets a rank, unknown strings get the fallback
//! - The curated table covers every known screen at its category rank
//! - Caller-supplied tables behave like the curated one, minus the coverage

use super::common::{assert_static_rank, tiny_table, UNKNOWN_SCREEN, WIFI_SCREEN, ZEN_MODE_SCREEN};
use ordo::{RankTable, ScreenCategory, ScreenId, RANK_OTHERS};

// ============================================================================
// CURATED TABLE
// ============================================================================

#[test]
fn test_curated_table_covers_every_screen() {
    let table = RankTable::curated();
    assert_eq!(table.len(), ScreenId::ALL.len());

    for screen in ScreenId::ALL {
        assert!(table.is_curated(screen.name()));
        assert_eq!(table.rank_for(screen.name()), screen.rank());
    }
}

#[test]
fn test_well_known_screens_rank_where_expected() {
    let table = RankTable::curated();
    assert_eq!(table.rank_for(WIFI_SCREEN), 1);
    assert_eq!(table.rank_for(ZEN_MODE_SCREEN), ScreenCategory::Notifications.rank());
    assert_eq!(
        table.rank_for("com.android.settings.DeviceInfoSettings"),
        ScreenCategory::COUNT as i32
    );
}

#[test]
fn test_unknown_identifiers_get_the_fallback() {
    let table = RankTable::curated();
    assert_eq!(table.rank_for(UNKNOWN_SCREEN), RANK_OTHERS);
    assert_eq!(table.rank_for(""), RANK_OTHERS);
    assert!(!table.is_curated(UNKNOWN_SCREEN));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = RankTable::curated();
    assert_eq!(table.rank_for(&WIFI_SCREEN.to_lowercase()), RANK_OTHERS);
}

#[test]
fn test_every_lookup_lands_in_the_static_domain() {
    let table = RankTable::curated();
    for screen in ScreenId::ALL {
        assert_static_rank(table.rank_for(screen.name()));
    }
    assert_static_rank(table.rank_for(UNKNOWN_SCREEN));
}

#[test]
fn test_repeated_lookups_agree() {
    // The table is read-only; a miss must not insert anything.
    let table = RankTable::curated();
    assert_eq!(table.rank_for(UNKNOWN_SCREEN), RANK_OTHERS);
    assert_eq!(table.rank_for(UNKNOWN_SCREEN), RANK_OTHERS);
    assert_eq!(table.len(), ScreenId::ALL.len());
}

#[test]
fn test_default_is_the_curated_table() {
    let table = RankTable::default();
    assert_eq!(table.len(), RankTable::curated().len());
    assert_eq!(table.rank_for(WIFI_SCREEN), 1);
}

// ============================================================================
// CALLER-SUPPLIED TABLES
// ============================================================================

#[test]
fn test_custom_table_many_to_one() {
    let table = tiny_table();
    assert_eq!(table.rank_for("alpha"), 1);
    assert_eq!(table.rank_for("beta"), table.rank_for("beta.child"));
    assert_eq!(table.rank_for("gamma"), RANK_OTHERS);
}

#[test]
fn test_custom_table_does_not_know_curated_screens() {
    let table = tiny_table();
    assert_eq!(table.rank_for(WIFI_SCREEN), RANK_OTHERS);
}

#[test]
fn test_empty_table_sends_everything_to_the_fallback() {
    let table = RankTable::from_entries([]);
    assert!(table.is_empty());
    assert_eq!(table.rank_for(WIFI_SCREEN), RANK_OTHERS);
    assert_eq!(table.rank_for("anything at all"), RANK_OTHERS);
}
