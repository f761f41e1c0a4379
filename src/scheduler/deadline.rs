//! Greedy profit-maximizing selection under per-task deadlines.
//!
//! # Algorithm
//!
//! 1. Sort tasks by profit descending (stable: ties keep input order).
//! 2. Build a free/occupied array of `max_deadline` unit slots.
//! 3. For each task in profit order, claim the latest free slot with
//!    index below its deadline; reject the task if none is free.
//! 4. Lay selected tasks out sequentially from t=0 using their real
//!    durations, in claim order, to form the presentation timeline.
//!
//! # Two Time Axes
//!
//! Feasibility deliberately uses discrete unit slots — every task
//! occupies exactly one slot regardless of its stated duration, which is
//! what makes the greedy selection optimal. The returned timeline is a
//! separate layout on a real-duration axis starting at t=0. The two
//! axes agree only when all durations are 1; callers must not assume a
//! selected task's timeline entry ends before its deadline.
//!
//! # Complexity
//! O(n log n + n · d) for n tasks and maximum deadline d. Intended for
//! interactive admin workloads; keep n and d within roughly 10⁵.

use crate::models::{ScheduleResult, Task, TimelineEntry};
use crate::validation::{validate_tasks, ValidationError};

/// Greedy deadline scheduler.
///
/// Stateless; one instance may serve any number of calls.
///
/// # Example
///
/// ```
/// use clinic_optim::models::Task;
/// use clinic_optim::scheduler::DeadlineScheduler;
///
/// let tasks = vec![
///     Task::new("audit", 1, 2, 100.0),
///     Task::new("restock", 1, 1, 40.0),
/// ];
/// let result = DeadlineScheduler::new().schedule(&tasks).unwrap();
/// assert_eq!(result.total_profit, 140.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeadlineScheduler;

impl DeadlineScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Selects and lays out tasks.
    ///
    /// Empty input yields an empty result with zero profit. Tasks that
    /// fit no free slot are rejected silently, not reported as errors.
    /// The input is never mutated.
    pub fn schedule(&self, tasks: &[Task]) -> Result<ScheduleResult, Vec<ValidationError>> {
        validate_tasks(tasks)?;

        if tasks.is_empty() {
            return Ok(ScheduleResult::empty());
        }

        let claimed = select(tasks);

        let total_profit: f64 = claimed.iter().map(|&(ti, _)| tasks[ti].profit).sum();

        // Timeline in claim order, real durations, sequential from t=0.
        let mut timeline = Vec::with_capacity(claimed.len());
        let mut current = 0i64;
        for &(ti, _) in &claimed {
            let task = &tasks[ti];
            timeline.push(TimelineEntry::new(
                task.id.clone(),
                current,
                current + task.duration,
            ));
            current += task.duration;
        }

        // Deadline order for presentation.
        let mut selected: Vec<Task> = claimed.iter().map(|&(ti, _)| tasks[ti].clone()).collect();
        selected.sort_by_key(|t| t.deadline);

        Ok(ScheduleResult {
            selected,
            total_profit,
            timeline,
        })
    }
}

/// Core selection pass.
///
/// Returns `(task_index, slot_index)` pairs in claim order. Every
/// returned slot index is strictly below the task's deadline.
fn select(tasks: &[Task]) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| tasks[b].profit.total_cmp(&tasks[a].profit));

    // At least one slot whenever tasks exist; validation guarantees
    // deadlines ≥ 1.
    let max_deadline = tasks.iter().map(|t| t.deadline).max().unwrap_or(1).max(1) as usize;

    let mut occupied = vec![false; max_deadline];
    let mut claimed = Vec::new();

    for &ti in &order {
        let limit = (max_deadline as i64).min(tasks[ti].deadline) as usize;
        for slot in (0..limit).rev() {
            if !occupied[slot] {
                occupied[slot] = true;
                claimed.push((ti, slot));
                break;
            }
        }
    }

    claimed
}
