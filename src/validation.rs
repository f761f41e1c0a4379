//! Input validation shared by all components.
//!
//! Every public operation validates its inputs before any algorithm
//! runs; on failure it returns all detected issues at once and performs
//! no partial work. Legitimate algorithmic outcomes (disconnected
//! graphs, infeasible tasks, empty inputs) are not validation errors.
//!
//! Detects:
//! - Duplicate IDs
//! - Negative or non-positive numeric fields
//! - Self-loop edges and edges referencing unknown nodes
//! - Duplicate edges between a node pair
//! - Malformed search windows and unknown strategy tags

use std::collections::HashSet;

use crate::models::{SupplyItem, Task, TimeInterval};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A numeric field is negative, or non-positive where a positive
    /// value is required.
    OutOfRange,
    /// An edge connects a node to itself.
    SelfLoop,
    /// An edge references a node absent from the node list.
    UnknownNode,
    /// Two edges connect the same pair of nodes.
    DuplicateEdge,
    /// A search window or interval has start ≥ end.
    MalformedWindow,
    /// A slot-search strategy tag is not recognized.
    UnknownStrategy,
}

impl ValidationError {
    /// Creates a new validation error.
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates tasks for the deadline scheduler.
///
/// # Checks
/// 1. No duplicate task IDs
/// 2. Durations and deadlines are positive
/// 3. Profits are non-negative
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for task in tasks {
        if !ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if task.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Task '{}' has non-positive duration {}", task.id, task.duration),
            ));
        }
        if task.deadline <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Task '{}' has non-positive deadline {}", task.id, task.deadline),
            ));
        }
        if task.profit < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Task '{}' has negative profit {}", task.id, task.profit),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates supply items and a budget capacity for the allocator.
///
/// # Checks
/// 1. No duplicate item IDs
/// 2. Costs and values are non-negative
/// 3. Capacity is non-negative
pub fn validate_supply(items: &[SupplyItem], capacity: f64) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    if capacity < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Capacity is negative: {capacity}"),
        ));
    }

    for item in items {
        if !ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }
        if item.cost < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Item '{}' has negative cost {}", item.id, item.cost),
            ));
        }
        if item.value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Item '{}' has negative value {}", item.id, item.value),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates slot-search bounds and the existing bookings list.
///
/// # Checks
/// 1. Window start is strictly before window end
/// 2. Slot length is positive
/// 3. Every existing interval has start strictly before end
///
/// Strategy tags are validated separately at parse time
/// (`SlotSearchStrategy::from_tag`).
pub fn validate_slot_query(
    existing: &[TimeInterval],
    window_start_ms: i64,
    window_end_ms: i64,
    slot_length_ms: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if window_start_ms >= window_end_ms {
        errors.push(ValidationError::new(
            ValidationErrorKind::MalformedWindow,
            format!("Window start {window_start_ms} is not before window end {window_end_ms}"),
        ));
    }
    if slot_length_ms <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Slot length is non-positive: {slot_length_ms}"),
        ));
    }
    for interval in existing {
        if interval.start_ms >= interval.end_ms {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedWindow,
                format!(
                    "Interval start {} is not before end {}",
                    interval.start_ms, interval.end_ms
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tasks() {
        let tasks = vec![
            Task::new("T1", 1, 2, 50.0),
            Task::new("T2", 3, 1, 10.0),
        ];
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_empty_tasks_are_valid() {
        assert!(validate_tasks(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![Task::new("T1", 1, 1, 1.0), Task::new("T1", 1, 1, 2.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_task_range_errors() {
        let tasks = vec![Task::new("T1", 0, -1, -5.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        // Duration, deadline, and profit each flagged.
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::OutOfRange));
    }

    #[test]
    fn test_valid_supply() {
        let items = vec![SupplyItem::new("S1", 10.0, 60.0)];
        assert!(validate_supply(&items, 50.0).is_ok());
        assert!(validate_supply(&[], 0.0).is_ok());
    }

    #[test]
    fn test_negative_capacity() {
        let errors = validate_supply(&[], -1.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutOfRange && e.message.contains("Capacity")));
    }

    #[test]
    fn test_negative_item_fields() {
        let items = vec![SupplyItem::new("S1", -10.0, -1.0)];
        let errors = validate_supply(&items, 10.0).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_duplicate_item_id() {
        let items = vec![
            SupplyItem::new("S1", 1.0, 1.0),
            SupplyItem::new("S1", 2.0, 2.0),
        ];
        let errors = validate_supply(&items, 10.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_valid_slot_query() {
        let existing = vec![TimeInterval::new(0, 100)];
        assert!(validate_slot_query(&existing, 0, 1000, 100).is_ok());
    }

    #[test]
    fn test_malformed_window() {
        let errors = validate_slot_query(&[], 1000, 1000, 100).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedWindow));
    }

    #[test]
    fn test_non_positive_slot_length() {
        let errors = validate_slot_query(&[], 0, 1000, 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutOfRange));
    }

    #[test]
    fn test_malformed_existing_interval() {
        let existing = vec![TimeInterval::new(200, 100)];
        let errors = validate_slot_query(&existing, 0, 1000, 100).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedWindow));
    }
}
