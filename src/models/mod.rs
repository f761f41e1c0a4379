//! Domain models and result records.
//!
//! Inputs (`Task`, `SupplyItem`, `GraphNode`/`GraphEdge`, `TimeInterval`)
//! are immutable snapshots supplied by the caller. Every component emits
//! a dedicated result record — derived values such as value/cost ratios
//! or claimed time slots are never written back onto the inputs.
//!
//! # Domain Mappings
//!
//! | clinic-optim | Clinic administration |
//! |--------------|----------------------|
//! | Task | Admin task with a deadline (restock, audit, ...) |
//! | SupplyItem | Purchasable supply line under a budget |
//! | Graph | Clinic locations and candidate connector links |
//! | TimeInterval | Booked appointment or candidate slot |

mod graph;
mod interval;
mod supply;
mod task;

pub use graph::{Graph, GraphEdge, GraphNode, SpanningTreeResult};
pub use interval::{AvailableSlot, SlotSearchResult, TimeInterval};
pub use supply::{AllocationEntry, AllocationResult, SupplyItem};
pub use task::{ScheduleResult, Task, TimelineEntry};
