//! Deadline scheduling (job sequencing with deadlines).
//!
//! Selects a profit-maximizing subset of tasks such that each selected
//! task can be assigned a free unit slot at or before its deadline.
//!
//! # Algorithm
//!
//! Classical greedy job sequencing: consider tasks in profit order and
//! claim the latest free unit slot before each task's deadline. Optimal
//! under the unit-execution assumption (see below).
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4;
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4

mod deadline;

pub use deadline::DeadlineScheduler;
