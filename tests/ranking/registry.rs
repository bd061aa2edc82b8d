//! Registry behavior: one handle over both halves, plus wire formats.

use super::common::{tiny_table, UNKNOWN_SCREEN, WIFI_SCREEN};
use ordo::{
    RankRegistry, RankTable, ScreenCategory, ScreenId, BASE_RANK_DEFAULT, RANK_OTHERS,
    SETTINGS_AUTHORITY,
};

// ============================================================================
// DELEGATION
// ============================================================================

#[test]
fn test_registry_delegates_to_both_sides() {
    let registry = RankRegistry::new();
    assert_eq!(registry.rank_for(WIFI_SCREEN), 1);
    assert_eq!(registry.rank_for(UNKNOWN_SCREEN), RANK_OTHERS);
    assert_eq!(registry.base_rank_for(SETTINGS_AUTHORITY), 0);
    assert_eq!(
        registry.base_rank_for("com.example.provider.A"),
        BASE_RANK_DEFAULT + 1
    );
}

#[test]
fn test_screen_lookup_agrees_with_string_lookup() {
    let registry = RankRegistry::new();
    for screen in ScreenId::ALL {
        assert_eq!(registry.rank_for_screen(screen), registry.rank_for(screen.name()));
    }
}

#[test]
fn test_accessors_expose_live_state() {
    let registry = RankRegistry::new();
    registry.base_rank_for("com.example.provider.A");
    assert_eq!(registry.allocator().assigned_len(), 2);
    assert_eq!(registry.table().len(), ScreenId::ALL.len());
}

#[test]
fn test_custom_table_registry() {
    let registry = RankRegistry::with_table(tiny_table());
    assert_eq!(registry.rank_for("alpha"), 1);
    assert_eq!(registry.rank_for(WIFI_SCREEN), RANK_OTHERS);
    // The dynamic side is stock regardless of the table.
    assert_eq!(registry.base_rank_for(SETTINGS_AUTHORITY), 0);
}

// ============================================================================
// RESULT PAGE ORDERING
// ============================================================================

#[test]
fn test_result_page_orders_curated_then_others_then_dynamic() {
    let registry = RankRegistry::new();

    let mut page = vec![
        ("ext-second", registry.base_rank_for("com.example.provider.second")),
        ("zen-mode", registry.rank_for("com.android.settings.notification.ZenModeSettings")),
        ("vendor-extra", registry.rank_for(UNKNOWN_SCREEN)),
        ("wifi", registry.rank_for(WIFI_SCREEN)),
        ("ext-first", registry.base_rank_for("com.example.provider.first")),
        ("device-info", registry.rank_for("com.android.settings.DeviceInfoSettings")),
    ];
    page.sort_by_key(|&(_, rank)| rank);
    let order: Vec<&str> = page.iter().map(|&(label, _)| label).collect();

    // "second" was discovered before "first", so it sorts ahead of it.
    assert_eq!(
        order,
        vec!["wifi", "zen-mode", "device-info", "vendor-extra", "ext-second", "ext-first"]
    );
}

// ============================================================================
// WIRE FORMATS
// ============================================================================

#[test]
fn test_screen_ids_serialize_as_kebab_case() {
    let encoded = serde_json::to_string(&ScreenId::InputMethodAndLanguage).unwrap();
    assert_eq!(encoded, "\"input-method-and-language\"");

    let encoded = serde_json::to_string(&ScreenCategory::PowerUsage).unwrap();
    assert_eq!(encoded, "\"power-usage\"");
}

#[test]
fn test_screen_ids_round_trip_through_json() {
    let encoded = serde_json::to_string(&ScreenId::ALL.to_vec()).unwrap();
    let decoded: Vec<ScreenId> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, ScreenId::ALL.to_vec());
}

#[test]
fn test_unknown_screen_payloads_are_rejected() {
    let err = serde_json::from_str::<ScreenId>("\"flux-capacitor\"");
    assert!(err.is_err());
}

#[test]
fn test_table_lookups_do_not_require_the_enum() {
    // Payload identifiers arrive as arbitrary strings; the table must accept
    // them directly, without a ScreenId round trip.
    let table = RankTable::curated();
    let raw: String = serde_json::from_str("\"com.android.settings.wifi.WifiSettings\"").unwrap();
    assert_eq!(table.rank_for(&raw), 1);
}
