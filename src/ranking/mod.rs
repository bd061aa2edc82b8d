// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how search results get their sort keys.
//!
//! Two sources of truth, two modules. [`table`] holds the static side: curated
//! ranks for the screens we ship, plus the fallback for everything else.
//! [`allocator`] holds the dynamic side: base-rank offsets minted at runtime
//! for external result sources. The numeric domains never overlap, so a rank's
//! magnitude already tells you where it came from.

mod allocator;
mod table;

pub use allocator::{BaseRankAllocator, SETTINGS_AUTHORITY};
pub use table::{RankTable, BASE_RANK_DEFAULT, RANK_OTHERS, RANK_UNDEFINED};
