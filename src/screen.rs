// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Screen identity: which settings screen is a search result about?
//!
//! The indexing pipeline hands us fully qualified screen names as strings
//! ("com.android.settings.wifi.WifiSettings"). Strings are a fine wire format
//! and a terrible source of truth, so the curated catalog lives here as two
//! enums instead:
//!
//! - [`ScreenId`] - one variant per curated screen, carrying its stable
//!   string name.
//! - [`ScreenCategory`] - one variant per curated rank, 1 through 20.
//!
//! The mapping is many-to-one on purpose: the four notification screens all
//! rank as [`ScreenCategory::Notifications`], the two wifi screens as
//! [`ScreenCategory::Wifi`]. Sibling screens within a category are unordered -
//! tie-breaking is the result sorter's problem, not ours.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - Every `ScreenId` resolves to exactly one category, and
//!   `from_name(id.name()) == Some(id)` for all of [`ScreenId::ALL`].
//! - Category ranks are distinct and cover `1..=ScreenCategory::COUNT` with
//!   no holes. `contracts::check_table_complete` re-checks this in debug
//!   builds; the property suite re-checks it for release.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

// =============================================================================
// CATEGORIES: one per curated rank
// =============================================================================

/// Curated rank category. Declaration order is rank order: `Wifi` is rank 1,
/// `DeviceInfo` is rank 20.
///
/// The derived `Ord` therefore agrees with [`ScreenCategory::rank`], which is
/// convenient and tested - if you reorder variants without updating `rank()`,
/// the property suite will catch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenCategory {
    Wifi,
    Bluetooth,
    DataUsage,
    Wireless,
    Home,
    Display,
    Wallpaper,
    Notifications,
    Memory,
    PowerUsage,
    Users,
    Location,
    Security,
    InputMethods,
    Privacy,
    DateTime,
    Accessibility,
    Printing,
    Development,
    DeviceInfo,
}

impl ScreenCategory {
    /// Number of curated categories. Curated ranks cover `1..=COUNT`.
    pub const COUNT: usize = 20;

    /// Every category, in rank order.
    pub const ALL: [ScreenCategory; Self::COUNT] = [
        ScreenCategory::Wifi,
        ScreenCategory::Bluetooth,
        ScreenCategory::DataUsage,
        ScreenCategory::Wireless,
        ScreenCategory::Home,
        ScreenCategory::Display,
        ScreenCategory::Wallpaper,
        ScreenCategory::Notifications,
        ScreenCategory::Memory,
        ScreenCategory::PowerUsage,
        ScreenCategory::Users,
        ScreenCategory::Location,
        ScreenCategory::Security,
        ScreenCategory::InputMethods,
        ScreenCategory::Privacy,
        ScreenCategory::DateTime,
        ScreenCategory::Accessibility,
        ScreenCategory::Printing,
        ScreenCategory::Development,
        ScreenCategory::DeviceInfo,
    ];

    /// The curated rank, a small positive integer in `1..=COUNT`.
    ///
    /// Lower rank sorts earlier. These values are load-bearing for result
    /// ordering and pinned by `contracts.rs`; renumbering them reshuffles
    /// every search results page.
    pub fn rank(self) -> i32 {
        match self {
            ScreenCategory::Wifi => 1,
            ScreenCategory::Bluetooth => 2,
            ScreenCategory::DataUsage => 3,
            ScreenCategory::Wireless => 4,
            ScreenCategory::Home => 5,
            ScreenCategory::Display => 6,
            ScreenCategory::Wallpaper => 7,
            ScreenCategory::Notifications => 8,
            ScreenCategory::Memory => 9,
            ScreenCategory::PowerUsage => 10,
            ScreenCategory::Users => 11,
            ScreenCategory::Location => 12,
            ScreenCategory::Security => 13,
            ScreenCategory::InputMethods => 14,
            ScreenCategory::Privacy => 15,
            ScreenCategory::DateTime => 16,
            ScreenCategory::Accessibility => 17,
            ScreenCategory::Printing => 18,
            ScreenCategory::Development => 19,
            ScreenCategory::DeviceInfo => 20,
        }
    }

    /// Lowercase string form, matching the serde `kebab-case` convention.
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenCategory::Wifi => "wifi",
            ScreenCategory::Bluetooth => "bluetooth",
            ScreenCategory::DataUsage => "data-usage",
            ScreenCategory::Wireless => "wireless",
            ScreenCategory::Home => "home",
            ScreenCategory::Display => "display",
            ScreenCategory::Wallpaper => "wallpaper",
            ScreenCategory::Notifications => "notifications",
            ScreenCategory::Memory => "memory",
            ScreenCategory::PowerUsage => "power-usage",
            ScreenCategory::Users => "users",
            ScreenCategory::Location => "location",
            ScreenCategory::Security => "security",
            ScreenCategory::InputMethods => "input-methods",
            ScreenCategory::Privacy => "privacy",
            ScreenCategory::DateTime => "date-time",
            ScreenCategory::Accessibility => "accessibility",
            ScreenCategory::Printing => "printing",
            ScreenCategory::Development => "development",
            ScreenCategory::DeviceInfo => "device-info",
        }
    }
}

// =============================================================================
// SCREENS: one per curated entry
// =============================================================================

/// A curated settings screen.
///
/// Each variant carries a stable string name - the fully qualified identifier
/// the indexing payloads already use. Nested screens keep the `$` separator
/// their host module emits (see [`ScreenId::ChooseLock`]).
///
/// Screens outside this catalog are not an error anywhere in the crate; they
/// simply rank as "others" (see `ranking::RANK_OTHERS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    Wifi,
    AdvancedWifi,
    Bluetooth,
    DataUsage,
    Wireless,
    Home,
    Display,
    WallpaperType,
    Notifications,
    NotificationDisplay,
    OtherSounds,
    ZenMode,
    Memory,
    PowerUsage,
    Users,
    Location,
    Security,
    ChooseLock,
    InputMethodAndLanguage,
    Privacy,
    DateTime,
    Accessibility,
    Printing,
    Development,
    DeviceInfo,
}

/// Name-to-screen resolution table, built once before any concurrent reader
/// exists and immutable afterward.
static SCREENS_BY_NAME: LazyLock<HashMap<&'static str, ScreenId>> = LazyLock::new(|| {
    ScreenId::ALL
        .iter()
        .map(|screen| (screen.name(), *screen))
        .collect()
});

impl ScreenId {
    /// Every curated screen, grouped by category.
    pub const ALL: [ScreenId; 25] = [
        ScreenId::Wifi,
        ScreenId::AdvancedWifi,
        ScreenId::Bluetooth,
        ScreenId::DataUsage,
        ScreenId::Wireless,
        ScreenId::Home,
        ScreenId::Display,
        ScreenId::WallpaperType,
        ScreenId::Notifications,
        ScreenId::NotificationDisplay,
        ScreenId::OtherSounds,
        ScreenId::ZenMode,
        ScreenId::Memory,
        ScreenId::PowerUsage,
        ScreenId::Users,
        ScreenId::Location,
        ScreenId::Security,
        ScreenId::ChooseLock,
        ScreenId::InputMethodAndLanguage,
        ScreenId::Privacy,
        ScreenId::DateTime,
        ScreenId::Accessibility,
        ScreenId::Printing,
        ScreenId::Development,
        ScreenId::DeviceInfo,
    ];

    /// The stable, fully qualified identifier for this screen.
    ///
    /// This is the wire format: indexing payloads key their rows by these
    /// strings, so they must never change once published.
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Wifi => "com.android.settings.wifi.WifiSettings",
            ScreenId::AdvancedWifi => "com.android.settings.wifi.AdvancedWifiSettings",
            ScreenId::Bluetooth => "com.android.settings.bluetooth.BluetoothSettings",
            ScreenId::DataUsage => "com.android.settings.DataUsageSummary",
            ScreenId::Wireless => "com.android.settings.WirelessSettings",
            ScreenId::Home => "com.android.settings.HomeSettings",
            ScreenId::Display => "com.android.settings.DisplaySettings",
            ScreenId::WallpaperType => "com.android.settings.WallpaperTypeSettings",
            ScreenId::Notifications => "com.android.settings.notification.NotificationSettings",
            ScreenId::NotificationDisplay => {
                "com.android.settings.notification.NotificationDisplaySettings"
            }
            ScreenId::OtherSounds => "com.android.settings.notification.OtherSoundSettings",
            ScreenId::ZenMode => "com.android.settings.notification.ZenModeSettings",
            ScreenId::Memory => "com.android.settings.deviceinfo.Memory",
            ScreenId::PowerUsage => "com.android.settings.fuelgauge.PowerUsageSummary",
            ScreenId::Users => "com.android.settings.users.UserSettings",
            ScreenId::Location => "com.android.settings.location.LocationSettings",
            ScreenId::Security => "com.android.settings.SecuritySettings",
            ScreenId::ChooseLock => {
                "com.android.settings.ChooseLockGeneric$ChooseLockGenericFragment"
            }
            ScreenId::InputMethodAndLanguage => {
                "com.android.settings.inputmethod.InputMethodAndLanguageSettings"
            }
            ScreenId::Privacy => "com.android.settings.PrivacySettings",
            ScreenId::DateTime => "com.android.settings.DateTimeSettings",
            ScreenId::Accessibility => "com.android.settings.accessibility.AccessibilitySettings",
            ScreenId::Printing => "com.android.settings.print.PrintSettingsFragment",
            ScreenId::Development => "com.android.settings.DevelopmentSettings",
            ScreenId::DeviceInfo => "com.android.settings.DeviceInfoSettings",
        }
    }

    /// Which category (and therefore which curated rank) this screen belongs
    /// to. Many-to-one: siblings of one conceptual category share a value.
    pub fn category(self) -> ScreenCategory {
        match self {
            ScreenId::Wifi | ScreenId::AdvancedWifi => ScreenCategory::Wifi,
            ScreenId::Bluetooth => ScreenCategory::Bluetooth,
            ScreenId::DataUsage => ScreenCategory::DataUsage,
            ScreenId::Wireless => ScreenCategory::Wireless,
            ScreenId::Home => ScreenCategory::Home,
            ScreenId::Display => ScreenCategory::Display,
            ScreenId::WallpaperType => ScreenCategory::Wallpaper,
            ScreenId::Notifications
            | ScreenId::NotificationDisplay
            | ScreenId::OtherSounds
            | ScreenId::ZenMode => ScreenCategory::Notifications,
            ScreenId::Memory => ScreenCategory::Memory,
            ScreenId::PowerUsage => ScreenCategory::PowerUsage,
            ScreenId::Users => ScreenCategory::Users,
            ScreenId::Location => ScreenCategory::Location,
            ScreenId::Security | ScreenId::ChooseLock => ScreenCategory::Security,
            ScreenId::InputMethodAndLanguage => ScreenCategory::InputMethods,
            ScreenId::Privacy => ScreenCategory::Privacy,
            ScreenId::DateTime => ScreenCategory::DateTime,
            ScreenId::Accessibility => ScreenCategory::Accessibility,
            ScreenId::Printing => ScreenCategory::Printing,
            ScreenId::Development => ScreenCategory::Development,
            ScreenId::DeviceInfo => ScreenCategory::DeviceInfo,
        }
    }

    /// Shorthand for `category().rank()`.
    #[inline]
    pub fn rank(self) -> i32 {
        self.category().rank()
    }

    /// Resolve a string identifier to its curated screen, if any.
    ///
    /// Lookup is exact: no normalization, no prefix matching. Unknown names
    /// return `None`, which callers map to the fallback rank rather than
    /// treating as a failure.
    pub fn from_name(name: &str) -> Option<ScreenId> {
        SCREENS_BY_NAME.get(name).copied()
    }
}
