//! Prim's minimum spanning tree.
//!
//! # Algorithm
//!
//! 1. Build adjacency lists once.
//! 2. Start at the first supplied node with key 0; all other keys ∞.
//! 3. Repeatedly extract the unvisited node with the smallest key from
//!    an indexed min-heap, record the edge that achieved that key
//!    (none for the start node), and relax each unvisited neighbor
//!    whose connecting cost beats its current key via decrease-key.
//! 4. The heap drains when the start node's component is exhausted;
//!    unvisited nodes remaining means the graph is disconnected.

use crate::models::{Graph, SpanningTreeResult};

use super::heap::IndexedMinHeap;

/// Computes a minimum spanning tree (or partial tree) of the graph.
///
/// Zero- and one-node graphs are trivially complete. On a disconnected
/// graph only the start node's component is spanned and the result
/// reports `connected = false`.
pub fn prim(graph: &Graph) -> SpanningTreeResult {
    let n = graph.node_count();
    if n <= 1 {
        return SpanningTreeResult::trivial();
    }

    let adj = graph.adjacency();
    let mut key = vec![f64::INFINITY; n];
    let mut parent_edge: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = IndexedMinHeap::new(n);

    // Arbitrary start: the first supplied node.
    key[0] = 0.0;
    heap.insert(0, 0.0);

    let mut edges = Vec::new();
    let mut total_cost = 0.0;

    while let Some((u, _)) = heap.pop_min() {
        visited[u] = true;
        if let Some(e) = parent_edge[u] {
            let edge = graph.edges()[e].clone();
            total_cost += edge.cost;
            edges.push(edge);
        }

        for &(v, cost, e) in &adj[u] {
            if !visited[v] && cost < key[v] {
                key[v] = cost;
                parent_edge[v] = Some(e);
                if !heap.decrease_key(v, cost) {
                    heap.insert(v, cost);
                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphEdge, GraphNode};

    fn graph(node_ids: &[&str], edges: Vec<GraphEdge>) -> Graph {
        let nodes = node_ids.iter().map(|id| GraphNode::new(*id)).collect();
        Graph::build(nodes, edges).unwrap()
    }

    #[test]
    fn test_empty_graph_trivial() {
        let g = graph(&[], vec![]);
        let r = prim(&g);
        assert!(r.connected);
        assert_eq!(r.edge_count(), 0);
        assert_eq!(r.total_cost, 0.0);
    }

    #[test]
    fn test_single_node_trivial() {
        let g = graph(&["A"], vec![]);
        let r = prim(&g);
        assert!(r.connected);
        assert_eq!(r.edge_count(), 0);
    }

    #[test]
    fn test_known_four_node_mst() {
        // Same fixture as the Kruskal test: MST cost 6 with 3 edges.
        let g = graph(
            &["A", "B", "C", "D"],
            vec![
                GraphEdge::new("e1", "A", "B", 1.0),
                GraphEdge::new("e2", "B", "C", 2.0),
                GraphEdge::new("e3", "A", "C", 4.0),
                GraphEdge::new("e4", "C", "D", 3.0),
                GraphEdge::new("e5", "B", "D", 5.0),
            ],
        );
        let r = prim(&g);

        assert!(r.connected);
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.total_cost, 6.0);
    }

    #[test]
    fn test_relaxation_replaces_worse_edge() {
        // C is first reachable via e2 (cost 5), later improved to e3
        // (cost 2) once B joins.
        let g = graph(
            &["A", "B", "C"],
            vec![
                GraphEdge::new("e1", "A", "B", 1.0),
                GraphEdge::new("e2", "A", "C", 5.0),
                GraphEdge::new("e3", "B", "C", 2.0),
            ],
        );
        let r = prim(&g);

        assert_eq!(r.total_cost, 3.0);
        let ids: Vec<&str> = r.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e3"]);
    }

    #[test]
    fn test_disconnected_partial_tree() {
        let g = graph(
            &["A", "B", "C", "D"],
            vec![
                GraphEdge::new("e1", "A", "B", 1.0),
                GraphEdge::new("e2", "C", "D", 2.0),
            ],
        );
        let r = prim(&g);

        assert!(!r.connected);
        // Only the start component (A, B) is spanned.
        assert_eq!(r.edge_count(), 1);
        assert_eq!(r.total_cost, 1.0);
    }

    #[test]
    fn test_no_edges_disconnected() {
        let g = graph(&["A", "B"], vec![]);
        let r = prim(&g);
        assert!(!r.connected);
        assert_eq!(r.edge_count(), 0);
    }
}
