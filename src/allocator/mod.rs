//! Fractional budget allocation (fractional knapsack).
//!
//! Spends a limited budget across supply items to maximize value, taking
//! a fraction of the first item that no longer fits in full.
//!
//! # Algorithm
//!
//! 1. Sort items by value/cost ratio descending (stable: ties keep
//!    input order; zero-cost items have ratio 0 and sort last).
//! 2. Take whole items while the running cost stays within capacity.
//! 3. Take `remaining / cost` of the first item that would overflow
//!    (only when remaining capacity and cost are both positive), then
//!    stop — later items are not considered even if they would fit.
//!
//! Greedy-by-ratio is optimal for the fractional problem.
//!
//! # Complexity
//! O(n log n) for n items; keep n within roughly 10⁵ for inline calls.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.2

use crate::models::{AllocationEntry, AllocationResult, SupplyItem};
use crate::validation::{validate_supply, ValidationError};

/// Greedy fractional allocator.
///
/// Stateless; one instance may serve any number of calls.
///
/// # Example
///
/// ```
/// use clinic_optim::allocator::FractionalAllocator;
/// use clinic_optim::models::SupplyItem;
///
/// let items = vec![
///     SupplyItem::new("gauze", 10.0, 60.0),
///     SupplyItem::new("gloves", 20.0, 100.0),
///     SupplyItem::new("masks", 30.0, 120.0),
/// ];
/// let result = FractionalAllocator::new().allocate(&items, 50.0).unwrap();
/// assert_eq!(result.total_value, 240.0);
/// assert_eq!(result.total_cost, 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FractionalAllocator;

impl FractionalAllocator {
    /// Creates a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Allocates the budget across items.
    ///
    /// Ratios are computed per call and never written onto the inputs.
    /// Empty input or zero capacity yields an empty result.
    pub fn allocate(
        &self,
        items: &[SupplyItem],
        capacity: f64,
    ) -> Result<AllocationResult, Vec<ValidationError>> {
        validate_supply(items, capacity)?;

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| items[b].ratio().total_cmp(&items[a].ratio()));

        let mut allocation = Vec::new();
        let mut total_cost = 0.0f64;
        let mut total_value = 0.0f64;

        for &i in &order {
            let item = &items[i];
            if total_cost + item.cost <= capacity {
                total_cost += item.cost;
                total_value += item.value;
                allocation.push(AllocationEntry {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    fraction: 1.0,
                    cost_taken: item.cost,
                    value_taken: item.value,
                });
            } else {
                let remaining = capacity - total_cost;
                if remaining > 0.0 && item.cost > 0.0 {
                    let fraction = remaining / item.cost;
                    total_cost += remaining;
                    total_value += item.value * fraction;
                    allocation.push(AllocationEntry {
                        item_id: item.id.clone(),
                        name: item.name.clone(),
                        fraction,
                        cost_taken: remaining,
                        value_taken: item.value * fraction,
                    });
                }
                // Budget exhausted: later items are not considered.
                break;
            }
        }

        Ok(AllocationResult {
            allocation,
            total_value,
            total_cost,
        })
    }
}
