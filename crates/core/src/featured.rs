//! Featured-set ("carousel") rules.
//!
//! Membership (`featured`) and position (`sort_order`) are separate fields.
//! Only items that are both featured and published are visible, and among
//! those the order is `sort_order` ascending, then `created_at` descending.
//! The storage backends (PostgreSQL and the in-memory store) both defer to
//! the helpers here so they agree on that order.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{DbId, Timestamp};

/// Number of featured items returned when the caller gives no limit.
pub const DEFAULT_CAROUSEL_LIMIT: i64 = 5;

/// Upper bound on a single featured-list request.
pub const MAX_CAROUSEL_LIMIT: i64 = 50;

/// `sort_order` assigned to the first item appended to an empty featured set.
pub const FIRST_SORT_ORDER: i32 = 0;

/// Clamp a requested carousel size to `[1, MAX_CAROUSEL_LIMIT]`.
pub fn clamp_carousel_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_CAROUSEL_LIMIT)
        .clamp(1, MAX_CAROUSEL_LIMIT)
}

/// `sort_order` for an item being appended after the current featured set.
///
/// `current_max` is the largest `sort_order` among featured items, if any.
pub fn appended_sort_order(current_max: Option<i32>) -> i32 {
    match current_max {
        Some(max) => max.saturating_add(1),
        None => FIRST_SORT_ORDER,
    }
}

/// Share of published news that is featured, as a rounded percentage.
///
/// Defined as 0 when there is no published news at all.
pub fn featured_percentage(featured_count: i64, total_count: i64) -> i64 {
    if total_count <= 0 {
        return 0;
    }
    (100.0 * featured_count as f64 / total_count as f64).round() as i64
}

/// Sort key of a featured item.
///
/// The derived ordering is the display order: `sort_order` ascending, then
/// newest first, then highest id first so equal timestamps stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedKey {
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub id: DbId,
}

impl Ord for FeaturedKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_order
            .cmp(&other.sort_order)
            .then_with(|| other.created_at.cmp(&self.created_at))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FeaturedKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One position assignment produced by [`plan_reorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortAssignment {
    pub id: DbId,
    pub sort_order: i32,
}

/// Turn a client-supplied id list into `sort_order` assignments.
///
/// Position `i` in the list receives `sort_order = i`. Repeated ids keep
/// their first position only, so the relative order of distinct ids is
/// exactly the order in which they first appear.
pub fn plan_reorder(ids_in_order: &[DbId]) -> Vec<SortAssignment> {
    let mut seen = HashSet::with_capacity(ids_in_order.len());
    ids_in_order
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .enumerate()
        .map(|(index, id)| SortAssignment {
            id,
            sort_order: i32::try_from(index).unwrap_or(i32::MAX),
        })
        .collect()
}

/// Reject an empty reorder request.
pub fn validate_reorder_ids(ids: &[DbId]) -> Result<(), String> {
    if ids.is_empty() {
        return Err("newsIds must be a non-empty array of news ids".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
