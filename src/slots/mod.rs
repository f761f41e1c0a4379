//! Appointment slot search against existing bookings.
//!
//! Tiles a search window with fixed-length candidate slots and keeps
//! those no existing booking overlaps, under the half-open rule
//! (touching endpoints do not conflict).
//!
//! # Strategies
//!
//! Two selectable lookup strategies must return the identical ordered
//! slot list; they differ only in how each candidate is checked, and
//! the measured elapsed time is returned so callers can compare them:
//!
//! - **`LinearScan`**: every existing interval checked per candidate
//! - **`SortedIndex`**: intervals pre-sorted by start once; a binary
//!   search prunes each candidate's scan to intervals starting before
//!   the candidate ends
//!
//! # Complexity
//! O(N·M) worst case for N candidates and M bookings; keep N·M within
//! roughly 10⁸ (single-day windows are far below this).

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::models::{AvailableSlot, SlotSearchResult, TimeInterval};
use crate::validation::{
    validate_slot_query, ValidationError, ValidationErrorKind,
};

/// Lookup strategy for the availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotSearchStrategy {
    /// Check every existing interval for each candidate.
    #[default]
    LinearScan,
    /// Pre-sort intervals by start; binary-search each candidate's
    /// relevant prefix.
    SortedIndex,
}

impl SlotSearchStrategy {
    /// Canonical tag for this strategy.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::LinearScan => "linear-scan",
            Self::SortedIndex => "sorted-index",
        }
    }

    /// Parses a strategy tag.
    ///
    /// Unrecognized tags are a validation error, never a silent
    /// fallback.
    pub fn from_tag(tag: &str) -> Result<Self, ValidationError> {
        match tag {
            "linear-scan" => Ok(Self::LinearScan),
            "sorted-index" => Ok(Self::SortedIndex),
            other => Err(ValidationError::new(
                ValidationErrorKind::UnknownStrategy,
                format!("Unknown slot-search strategy tag: '{other}'"),
            )),
        }
    }
}

/// Parameters of a slot search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuery {
    /// Search window start (ms, inclusive).
    pub window_start_ms: i64,
    /// Search window end (ms, exclusive).
    pub window_end_ms: i64,
    /// Candidate slot length (ms, positive).
    pub slot_length_ms: i64,
    /// Lookup strategy to run.
    pub strategy: SlotSearchStrategy,
}

impl SlotQuery {
    /// Creates a new query.
    pub fn new(window_start_ms: i64, window_end_ms: i64, slot_length_ms: i64) -> Self {
        Self {
            window_start_ms,
            window_end_ms,
            slot_length_ms,
            strategy: SlotSearchStrategy::default(),
        }
    }

    /// Sets the lookup strategy.
    pub fn with_strategy(mut self, strategy: SlotSearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Slot availability finder.
///
/// Stateless; one instance may serve any number of calls.
///
/// # Example
///
/// ```
/// use clinic_optim::models::TimeInterval;
/// use clinic_optim::slots::{SlotAvailabilityFinder, SlotQuery};
///
/// // One booking at 09:00-09:30 inside a 09:00-10:30 window.
/// let h = 3_600_000i64;
/// let booked = vec![TimeInterval::new(9 * h, 9 * h + h / 2)];
/// let query = SlotQuery::new(9 * h, 10 * h + h / 2, h / 2);
///
/// let result = SlotAvailabilityFinder::new().find_slots(&booked, &query).unwrap();
/// assert_eq!(result.slot_count(), 2);
/// assert_eq!(result.slots[0].label, "09:30 - 10:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotAvailabilityFinder;

impl SlotAvailabilityFinder {
    /// Creates a new finder.
    pub fn new() -> Self {
        Self
    }

    /// Finds open slots in the query window.
    ///
    /// A final partial candidate extending past the window end is
    /// discarded. The returned `elapsed` covers candidate generation
    /// and filtering.
    pub fn find_slots(
        &self,
        existing: &[TimeInterval],
        query: &SlotQuery,
    ) -> Result<SlotSearchResult, Vec<ValidationError>> {
        validate_slot_query(
            existing,
            query.window_start_ms,
            query.window_end_ms,
            query.slot_length_ms,
        )?;

        let started = Instant::now();
        let candidates = tile_window(query);

        let available: Vec<TimeInterval> = match query.strategy {
            SlotSearchStrategy::LinearScan => linear_scan(&candidates, existing),
            SlotSearchStrategy::SortedIndex => sorted_index(&candidates, existing),
        };

        let slots = available
            .into_iter()
            .map(AvailableSlot::from_interval)
            .collect();

        Ok(SlotSearchResult {
            slots,
            strategy: query.strategy.tag().to_string(),
            elapsed: started.elapsed(),
        })
    }
}

/// Candidate intervals tiling `[start, end)` at slot-length pitch.
fn tile_window(query: &SlotQuery) -> Vec<TimeInterval> {
    let mut candidates = Vec::new();
    let mut start = query.window_start_ms;
    while start + query.slot_length_ms <= query.window_end_ms {
        candidates.push(TimeInterval::new(start, start + query.slot_length_ms));
        start += query.slot_length_ms;
    }
    candidates
}

/// Checks every existing interval for each candidate.
fn linear_scan(candidates: &[TimeInterval], existing: &[TimeInterval]) -> Vec<TimeInterval> {
    candidates
        .iter()
        .filter(|candidate| !existing.iter().any(|booked| booked.overlaps(candidate)))
        .copied()
        .collect()
}

/// Pre-sorts intervals by start, then prunes each candidate's scan to
/// the prefix of intervals starting before the candidate ends.
fn sorted_index(candidates: &[TimeInterval], existing: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut by_start: Vec<TimeInterval> = existing.to_vec();
    by_start.sort_by_key(|iv| iv.start_ms);

    candidates
        .iter()
        .filter(|candidate| {
            let relevant = by_start.partition_point(|iv| iv.start_ms < candidate.end_ms);
            !by_start[..relevant]
                .iter()
                .any(|booked| booked.end_ms > candidate.start_ms)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: i64 = 60_000;

    fn booked(start_min: i64, end_min: i64) -> TimeInterval {
        TimeInterval::new(start_min * MIN, end_min * MIN)
    }

    fn query(start_min: i64, end_min: i64, len_min: i64) -> SlotQuery {
        SlotQuery::new(start_min * MIN, end_min * MIN, len_min * MIN)
    }

    #[test]
    fn test_no_bookings_returns_all_candidates() {
        let q = query(0, 120, 30);
        let result = SlotAvailabilityFinder::new().find_slots(&[], &q).unwrap();
        assert_eq!(result.slot_count(), 4);
        assert_eq!(result.slots[0].label, "00:00 - 00:30");
        assert_eq!(result.slots[3].label, "01:30 - 02:00");
    }

    #[test]
    fn test_full_window_booking_blocks_everything() {
        let q = query(0, 120, 30);
        let bookings = vec![booked(0, 120)];
        let result = SlotAvailabilityFinder::new()
            .find_slots(&bookings, &q)
            .unwrap();
        assert_eq!(result.slot_count(), 0);
    }

    #[test]
    fn test_partial_final_slot_discarded() {
        // 100 minutes / 30-minute slots: the 90-120 candidate would
        // overrun the window.
        let q = query(0, 100, 30);
        let result = SlotAvailabilityFinder::new().find_slots(&[], &q).unwrap();
        assert_eq!(result.slot_count(), 3);
        assert_eq!(result.slots.last().unwrap().end_ms, 90 * MIN);
    }

    #[test]
    fn test_touching_endpoints_do_not_conflict() {
        // Booking ends exactly where the second candidate starts.
        let q = query(0, 60, 30);
        let bookings = vec![booked(0, 30)];
        let result = SlotAvailabilityFinder::new()
            .find_slots(&bookings, &q)
            .unwrap();
        assert_eq!(result.slot_count(), 1);
        assert_eq!(result.slots[0].start_ms, 30 * MIN);
    }

    #[test]
    fn test_overlap_blocks_candidate() {
        // Booking 15-45 straddles both 0-30 and 30-60.
        let q = query(0, 90, 30);
        let bookings = vec![booked(15, 45)];
        let result = SlotAvailabilityFinder::new()
            .find_slots(&bookings, &q)
            .unwrap();
        assert_eq!(result.slot_count(), 1);
        assert_eq!(result.slots[0].start_ms, 60 * MIN);
    }

    #[test]
    fn test_strategies_agree() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(17);
        let finder = SlotAvailabilityFinder::new();

        for _ in 0..50 {
            let bookings: Vec<TimeInterval> = (0..rng.random_range(0..15))
                .map(|_| {
                    let start = rng.random_range(0..480);
                    let len = rng.random_range(1..90);
                    booked(start, start + len)
                })
                .collect();
            let q = query(0, 480, 30);

            let linear = finder
                .find_slots(&bookings, &q.clone().with_strategy(SlotSearchStrategy::LinearScan))
                .unwrap();
            let indexed = finder
                .find_slots(&bookings, &q.with_strategy(SlotSearchStrategy::SortedIndex))
                .unwrap();

            assert_eq!(linear.slots, indexed.slots);
        }
    }

    #[test]
    fn test_strategy_tag_round_trip() {
        assert_eq!(
            SlotSearchStrategy::from_tag("linear-scan").unwrap(),
            SlotSearchStrategy::LinearScan
        );
        assert_eq!(
            SlotSearchStrategy::from_tag("sorted-index").unwrap(),
            SlotSearchStrategy::SortedIndex
        );
    }

    #[test]
    fn test_unknown_strategy_tag_is_error() {
        let err = SlotSearchStrategy::from_tag("method3").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownStrategy);
    }

    #[test]
    fn test_result_echoes_strategy() {
        let q = query(0, 60, 30).with_strategy(SlotSearchStrategy::SortedIndex);
        let result = SlotAvailabilityFinder::new().find_slots(&[], &q).unwrap();
        assert_eq!(result.strategy, "sorted-index");
    }

    #[test]
    fn test_malformed_window_rejected() {
        let q = SlotQuery::new(1000, 1000, 100);
        assert!(SlotAvailabilityFinder::new().find_slots(&[], &q).is_err());
    }

    #[test]
    fn test_working_day_scenario() {
        // 09:00-17:00 window, 30-minute slots, two bookings.
        let q = query(9 * 60, 17 * 60, 30);
        let bookings = vec![booked(10 * 60, 10 * 60 + 30), booked(13 * 60, 14 * 60)];
        let result = SlotAvailabilityFinder::new()
            .find_slots(&bookings, &q)
            .unwrap();

        // 16 candidates minus 1 minus 2 blocked.
        assert_eq!(result.slot_count(), 13);
        assert!(result
            .slots
            .iter()
            .all(|s| s.label != "10:00 - 10:30" && s.label != "13:00 - 13:30"));
    }
}
