//! Minimum spanning trees over clinic location graphs.
//!
//! Two interchangeable variants over the shared `Graph` model:
//!
//! - **`kruskal`**: edge-sorted with a union-find over dense node
//!   indices (path compression + union-by-rank)
//! - **`prim`**: adjacency-driven with an indexed binary min-heap
//!   supporting decrease-key
//!
//! Both return a `SpanningTreeResult`; a disconnected graph yields the
//! partial forest with `connected = false`, never an error. On a graph
//! with a unique MST (e.g. all edge costs distinct) the two variants
//! agree on total cost.
//!
//! # Complexity
//! Kruskal O(E log E); Prim O((V+E) log V). Keep V+E within roughly
//! 10⁶ for inline calls.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 21, 23

mod heap;
mod kruskal;
mod prim;
mod union_find;

pub use heap::IndexedMinHeap;
pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::UnionFind;
