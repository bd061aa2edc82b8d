//! Deterministic sort ranks for settings search results.
//!
//! This crate answers one question, twice: "where does this result sort?"
//! For built-in settings screens the answer is a curated table. For results
//! contributed by external providers the answer is a base rank minted at
//! runtime, one per provider authority, stable for the life of the process.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌───────────────┐
//! │  screen.rs   │────▶│     ranking/      │────▶│  registry.rs  │
//! │  (ScreenId,  │     │ (RankTable,       │     │ (RankRegistry)│
//! │ScreenCategory)│    │ BaseRankAllocator)│     │               │
//! └──────────────┘     └──────────────────┘     └───────────────┘
//!        │                      │                       │
//!        ▼                      ▼                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       contracts.rs                          │
//! │   (rank domain separation - compile-time and debug checks)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # The rank number line
//!
//! Every rank in the system lives in exactly one of four disjoint domains,
//! so a plain integer sort groups results correctly with no further logic:
//!
//! ```text
//!   -1          1 ..= 20         1024          2049, 2050, ...
//!   undefined   curated screens  everything    dynamic providers
//!               (smaller sorts   else          (first seen, first
//!                earlier)                       ranked)
//! ```
//!
//! | Rust Module | Owns                           | Key Property                  |
//! |-------------|--------------------------------|-------------------------------|
//! | `screen`    | screen identity                | names round-trip, ranks total |
//! | `ranking`   | static table, dynamic allocator| lookups total, allocation idempotent |
//! | `registry`  | one handle over both           | `Sync`, isolated rank spaces  |
//! | `contracts` | domain separation checks       | domains never overlap         |
//!
//! # Usage
//!
//! ```ignore
//! use ordo::{RankRegistry, ScreenId};
//!
//! let registry = RankRegistry::new();
//!
//! // Static side: total lookup, unknown screens fall back.
//! let rank = registry.rank_for("com.android.settings.wifi.WifiSettings");
//!
//! // Dynamic side: first call assigns, later calls agree.
//! let base = registry.base_rank_for("com.example.provider");
//! ```

// Module declarations
pub mod contracts;
mod ranking;
mod registry;
mod screen;
pub mod testing;

// Re-exports for public API
pub use ranking::{
    BaseRankAllocator, RankTable, BASE_RANK_DEFAULT, RANK_OTHERS, RANK_UNDEFINED,
    SETTINGS_AUTHORITY,
};
pub use registry::RankRegistry;
pub use screen::{ScreenCategory, ScreenId};
