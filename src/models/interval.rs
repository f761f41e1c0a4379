//! Time interval model and slot search result records.
//!
//! Intervals are half-open `[start, end)`: two intervals overlap iff
//! each starts strictly before the other ends, so touching endpoints do
//! not conflict. Used both for existing bookings and for generated
//! candidate slots.
//!
//! # Time Model
//! All times are in milliseconds relative to an epoch midnight. The
//! consumer defines which day the epoch refers to; clock labels are
//! derived from the time-of-day component.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;

/// A time interval [start, end).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeInterval {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Interval length (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this interval.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two intervals overlap (half-open rule).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }

    /// Clock label for this interval, e.g. `"09:00 - 09:30"`.
    ///
    /// Uses the time-of-day component of each bound.
    pub fn clock_label(&self) -> String {
        format!("{} - {}", clock(self.start_ms), clock(self.end_ms))
    }
}

/// Formats a timestamp as `HH:MM` within its day.
fn clock(time_ms: i64) -> String {
    let of_day = time_ms.rem_euclid(MS_PER_DAY);
    let hours = of_day / MS_PER_HOUR;
    let minutes = (of_day % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}")
}

/// An open candidate slot returned by a slot search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlot {
    /// Slot start (ms, inclusive).
    pub start_ms: i64,
    /// Slot end (ms, exclusive).
    pub end_ms: i64,
    /// Display label, e.g. `"09:00 - 09:30"`.
    pub label: String,
}

impl AvailableSlot {
    /// Creates a slot from a candidate interval, deriving the label.
    pub fn from_interval(interval: TimeInterval) -> Self {
        Self {
            start_ms: interval.start_ms,
            end_ms: interval.end_ms,
            label: interval.clock_label(),
        }
    }
}

/// Outcome of a slot search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSearchResult {
    /// Available slots in window order.
    pub slots: Vec<AvailableSlot>,
    /// Canonical tag of the strategy that produced this result.
    pub strategy: String,
    /// Measured computation time, for strategy comparison.
    pub elapsed: Duration,
}

impl SlotSearchResult {
    /// Number of available slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let i = TimeInterval::new(100, 200);
        assert_eq!(i.duration_ms(), 100);
        assert!(i.contains(100));
        assert!(i.contains(199));
        assert!(!i.contains(200)); // exclusive end
        assert!(!i.contains(50));
    }

    #[test]
    fn test_interval_overlap() {
        let a = TimeInterval::new(0, 100);
        let b = TimeInterval::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeInterval::new(100, 200); // touching, not overlapping
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_clock_label() {
        // 9:00 AM to 9:30 AM as ms past midnight
        let i = TimeInterval::new(9 * 3_600_000, 9 * 3_600_000 + 30 * 60_000);
        assert_eq!(i.clock_label(), "09:00 - 09:30");
    }

    #[test]
    fn test_clock_label_wraps_days() {
        // Same clock time on day 2
        let day = 86_400_000;
        let i = TimeInterval::new(day + 14 * 3_600_000, day + 15 * 3_600_000);
        assert_eq!(i.clock_label(), "14:00 - 15:00");
    }

    #[test]
    fn test_available_slot_from_interval() {
        let slot = AvailableSlot::from_interval(TimeInterval::new(0, 1_800_000));
        assert_eq!(slot.start_ms, 0);
        assert_eq!(slot.end_ms, 1_800_000);
        assert_eq!(slot.label, "00:00 - 00:30");
    }
}
