//! Combinatorial-optimization core for a clinic booking and
//! administration service.
//!
//! Provides four independent, stateless components. Each is a pure
//! function over caller-supplied snapshots: inputs are validated, never
//! mutated, and results come back as new typed records for the caller to
//! persist or display.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `SupplyItem`, `Graph`,
//!   `TimeInterval` — and the result records each component returns
//! - **`validation`**: Input integrity checks shared by all components
//! - **`scheduler`**: Profit-maximizing task selection under deadlines
//!   (job sequencing)
//! - **`allocator`**: Fractional knapsack over a supply budget
//! - **`mst`**: Minimum spanning trees over clinic location graphs
//!   (Kruskal and Prim)
//! - **`slots`**: Appointment slot search against existing bookings
//!
//! # Architecture
//!
//! No component depends on another; the MST variants share only the
//! graph model. The surrounding service (routing, persistence, auth,
//! rendering) composes these at the call boundary and is out of scope.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms"
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4 (Greedy)

pub mod allocator;
pub mod models;
pub mod mst;
pub mod scheduler;
pub mod slots;
pub mod validation;
