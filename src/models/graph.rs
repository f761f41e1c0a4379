//! Weighted undirected graph over clinic locations.
//!
//! `Graph::build` validates the raw node/edge lists and assigns each
//! node a dense index exactly once. Downstream algorithms (Kruskal's
//! union-find, Prim's heap) operate purely on those indices; the
//! identifier↔index mapping is owned here, not by the substrate
//! structures.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 23

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::validation::{ValidationError, ValidationErrorKind};

/// A clinic location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    /// Unique node identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl GraphNode {
    /// Creates a new node.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A candidate connector between two distinct locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphEdge {
    /// Unique edge identifier.
    pub id: String,
    /// First endpoint node identifier.
    pub node_a: String,
    /// Second endpoint node identifier.
    pub node_b: String,
    /// Connector cost (≥ 0).
    pub cost: f64,
}

impl GraphEdge {
    /// Creates a new edge.
    pub fn new(
        id: impl Into<String>,
        node_a: impl Into<String>,
        node_b: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            node_a: node_a.into(),
            node_b: node_b.into(),
            cost,
        }
    }
}

/// A validated graph with a dense node-index arena.
///
/// Construction is the single validation point: once a `Graph` exists,
/// every edge references known, distinct nodes with a non-negative cost
/// and no node pair appears twice. Serialize-only: a deserialized graph
/// would skip validation, so callers rebuild via `Graph::build`.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Graph {
    /// Builds a graph from raw node and edge lists.
    ///
    /// # Checks
    /// 1. No duplicate node IDs
    /// 2. No duplicate edge IDs
    /// 3. No negative edge costs
    /// 4. No self-loops
    /// 5. Both endpoints of every edge exist in the node list
    /// 6. No two edges between the same node pair (either orientation)
    ///
    /// # Returns
    /// The validated graph, or all detected issues at once.
    pub fn build(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate node ID: {}", node.id),
                ));
            }
        }

        let mut edge_ids: HashSet<&str> = HashSet::with_capacity(edges.len());
        let mut pairs: HashMap<(usize, usize), &str> = HashMap::with_capacity(edges.len());
        for edge in &edges {
            if !edge_ids.insert(edge.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate edge ID: {}", edge.id),
                ));
            }
            if edge.cost < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfRange,
                    format!("Edge '{}' has negative cost {}", edge.id, edge.cost),
                ));
            }
            if edge.node_a == edge.node_b {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfLoop,
                    format!("Edge '{}' is a self-loop on node '{}'", edge.id, edge.node_a),
                ));
                continue;
            }

            let a = index.get(edge.node_a.as_str()).copied();
            let b = index.get(edge.node_b.as_str()).copied();
            for (endpoint, resolved) in [(&edge.node_a, a), (&edge.node_b, b)] {
                if resolved.is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownNode,
                        format!("Edge '{}' references unknown node '{}'", edge.id, endpoint),
                    ));
                }
            }

            if let (Some(a), Some(b)) = (a, b) {
                let key = (a.min(b), a.max(b));
                if let Some(first) = pairs.insert(key, edge.id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateEdge,
                        format!(
                            "Edges '{}' and '{}' both connect '{}' and '{}'",
                            first, edge.id, edge.node_a, edge.node_b
                        ),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(Self {
                nodes,
                edges,
                index,
            })
        } else {
            Err(errors)
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in supplied order (index order).
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in supplied order.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Dense index of a node identifier.
    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.index.get(node_id).copied()
    }

    /// Endpoint indices of the edge at `edge_idx`.
    ///
    /// Always resolves for a built graph.
    pub fn endpoints(&self, edge_idx: usize) -> (usize, usize) {
        let edge = &self.edges[edge_idx];
        (self.index[&edge.node_a], self.index[&edge.node_b])
    }

    /// Adjacency lists: for each node index, `(neighbor_idx, cost, edge_idx)`.
    ///
    /// Built on demand; callers that need it repeatedly should hold on
    /// to the returned structure.
    pub fn adjacency(&self) -> Vec<Vec<(usize, f64, usize)>> {
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for (e, edge) in self.edges.iter().enumerate() {
            let (a, b) = self.endpoints(e);
            adj[a].push((b, edge.cost, e));
            adj[b].push((a, edge.cost, e));
        }
        adj
    }
}

/// Outcome of a spanning-tree computation.
///
/// A disconnected graph is not an error: the result carries the partial
/// forest found and reports `connected = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanningTreeResult {
    /// Accepted edges in acceptance order.
    pub edges: Vec<GraphEdge>,
    /// Sum of accepted edge costs.
    pub total_cost: f64,
    /// Whether the tree spans every node of the graph.
    pub connected: bool,
}

impl SpanningTreeResult {
    /// Result for a trivially complete graph (zero or one node).
    pub fn trivial() -> Self {
        Self {
            edges: Vec::new(),
            total_cost: 0.0,
            connected: true,
        }
    }

    /// Number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
