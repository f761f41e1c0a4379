//! Supply item model and allocation result records.
//!
//! A supply item is a purchasable line with a cost and a value; the
//! allocator spends a budget across items, possibly taking fractions.
//! The value/cost ratio is computed on demand and never stored back
//! onto the item.

use serde::{Deserialize, Serialize};

/// A supply line considered for budget allocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplyItem {
    /// Unique item identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Cost of the full line (≥ 0).
    pub cost: f64,
    /// Value of the full line (≥ 0).
    pub value: f64,
}

impl SupplyItem {
    /// Creates a new supply item.
    pub fn new(id: impl Into<String>, cost: f64, value: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            cost,
            value,
        }
    }

    /// Sets the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Value per unit cost. Defined as 0 when cost is 0, so free items
    /// are never prioritized over paid ones.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.cost > 0.0 {
            self.value / self.cost
        } else {
            0.0
        }
    }
}

/// Outcome of a budget allocation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Allocation rows in the order items were taken.
    pub allocation: Vec<AllocationEntry>,
    /// Sum of value taken across all rows.
    pub total_value: f64,
    /// Sum of cost taken across all rows. Never exceeds the capacity.
    pub total_cost: f64,
}

/// One allocated item, possibly fractional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationEntry {
    /// Item identifier.
    pub item_id: String,
    /// Item name (carried through for presentation).
    pub name: String,
    /// Fraction of the item taken, in (0, 1].
    pub fraction: f64,
    /// Cost consumed by this row.
    pub cost_taken: f64,
    /// Value gained by this row.
    pub value_taken: f64,
}

impl AllocationResult {
    /// Empty result: nothing allocated.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of allocation rows.
    pub fn entry_count(&self) -> usize {
        self.allocation.len()
    }
}
