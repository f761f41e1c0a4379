//! Kruskal's minimum spanning tree.
//!
//! # Algorithm
//!
//! 1. Sort edges by cost ascending (stable: ties keep input order).
//! 2. Walk the sorted edges, accepting an edge iff its endpoints are in
//!    different union-find components.
//! 3. Stop once V−1 edges are accepted; fewer after exhausting all
//!    edges means the graph is disconnected.

use crate::models::{Graph, SpanningTreeResult};

use super::union_find::UnionFind;

/// Computes a minimum spanning tree (or forest) of the graph.
///
/// Zero- and one-node graphs are trivially complete. Disconnected
/// graphs yield the partial forest with `connected = false`.
pub fn kruskal(graph: &Graph) -> SpanningTreeResult {
    let n = graph.node_count();
    if n <= 1 {
        return SpanningTreeResult::trivial();
    }

    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by(|&a, &b| graph.edges()[a].cost.total_cmp(&graph.edges()[b].cost));

    let mut uf = UnionFind::new(n);
    let mut edges = Vec::new();
    let mut total_cost = 0.0;

    for &e in &order {
        let (a, b) = graph.endpoints(e);
        if uf.union(a, b) {
            let edge = graph.edges()[e].clone();
            total_cost += edge.cost;
            edges.push(edge);
            if edges.len() == n - 1 {
                break;
            }
        }
    }

    let connected = edges.len() == n - 1;
    SpanningTreeResult {
        edges,
        total_cost,
        connected,
    }
}
