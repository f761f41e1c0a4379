//! Task model and schedule result records.
//!
//! A task is a unit of admin work with a profit and a completion
//! deadline. The scheduler selects a profit-maximizing subset; its
//! output lives in `ScheduleResult`, never on the tasks themselves.
//!
//! # Time Representation
//! Durations and deadlines are in abstract positive time units relative
//! to a scheduling epoch (t=0). The consumer defines what one unit means
//! (e.g., a half-day shift).
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4 (Greedy)

use serde::{Deserialize, Serialize};

/// A task to be considered for scheduling.
///
/// Immutable input: the scheduler derives auxiliary data (claimed slots,
/// timeline placement) into result records and never mutates a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Execution duration (time units, positive).
    pub duration: i64,
    /// Latest completion slot (time units, positive).
    pub deadline: i64,
    /// Profit earned if the task is performed.
    pub profit: f64,
}

impl Task {
    /// Creates a new task.
    pub fn new(id: impl Into<String>, duration: i64, deadline: i64, profit: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration,
            deadline,
            profit,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Outcome of a scheduling run.
///
/// A new record, never an alias of the input tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Selected tasks, sorted by deadline ascending for presentation.
    pub selected: Vec<Task>,
    /// Sum of profits over the selected tasks.
    pub total_profit: f64,
    /// Sequential execution layout using real durations from t=0.
    ///
    /// Entries appear in the order tasks were claimed by the selection
    /// pass. This axis is independent of the deadline-slot assignment;
    /// see the `scheduler` module docs.
    pub timeline: Vec<TimelineEntry>,
}

/// One row of the execution timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    /// Task identifier.
    pub task_id: String,
    /// Start time (units from t=0).
    pub start: i64,
    /// End time (units from t=0).
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new timeline entry.
    pub fn new(task_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            task_id: task_id.into(),
            start,
            end,
        }
    }

    /// Entry duration (units).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl ScheduleResult {
    /// Empty result: nothing selected, zero profit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of selected tasks.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Timeline end (units), 0 when nothing is scheduled.
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|e| e.end).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1", 2, 3, 75.0).with_name("Restock bandages");
        assert_eq!(task.id, "T1");
        assert_eq!(task.name, "Restock bandages");
        assert_eq!(task.duration, 2);
        assert_eq!(task.deadline, 3);
        assert_eq!(task.profit, 75.0);
    }

    #[test]
    fn test_timeline_entry_duration() {
        let e = TimelineEntry::new("T1", 3, 8);
        assert_eq!(e.duration(), 5);
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::empty();
        assert_eq!(r.selected_count(), 0);
        assert_eq!(r.total_profit, 0.0);
        assert_eq!(r.makespan(), 0);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let r = ScheduleResult {
            selected: vec![Task::new("T1", 1, 2, 10.0)],
            total_profit: 10.0,
            timeline: vec![TimelineEntry::new("T1", 0, 1)],
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: ScheduleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.selected, r.selected);
        assert_eq!(back.timeline, r.timeline);
    }
}
