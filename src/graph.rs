//! Immutable weighted undirected graph with a dense adjacency matrix.
//!
//! Node order is load-bearing: the first node is where Prim's algorithm
//! starts, and `is_connected` walks from index 0.

use indexmap::IndexSet;
use thiserror::Error;

use crate::edge::Edge;
use crate::union_find::UnionFind;

/// Construction failures. The adjacency matrix is never built from
/// references it cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid reference: edge {edge} ({from}-{to}) references unknown node '{node}'")]
    UnknownNode {
        edge: usize,
        from: String,
        to: String,
        node: String,
    },
    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),
    #[error("edge {edge} is a self-loop on node '{node}'")]
    SelfLoop { edge: usize, node: String },
}

#[derive(Debug, Clone)]
pub struct Graph {
    nodes: IndexSet<String>,
    edges: Vec<Edge>,
    // Row-major N x N; None = no edge, diagonal = Some(0)
    adjacency: Vec<Option<u32>>,
}

impl Graph {
    pub fn new<I, S>(nodes: I, edges: Vec<Edge>) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = IndexSet::new();
        for node in nodes {
            let node = node.into();
            if index.contains(&node) {
                return Err(GraphError::DuplicateNode(node));
            }
            index.insert(node);
        }

        let n = index.len();
        let mut adjacency = vec![None; n * n];
        for i in 0..n {
            adjacency[i * n + i] = Some(0);
        }

        for (pos, edge) in edges.iter().enumerate() {
            let from = Self::resolve(&index, edge, &edge.from, pos)?;
            let to = Self::resolve(&index, edge, &edge.to, pos)?;
            if from == to {
                return Err(GraphError::SelfLoop {
                    edge: pos,
                    node: edge.from.clone(),
                });
            }
            // Later duplicates of the same pair overwrite earlier weights
            adjacency[from * n + to] = Some(edge.weight);
            adjacency[to * n + from] = Some(edge.weight);
        }

        Ok(Graph {
            nodes: index,
            edges,
            adjacency,
        })
    }

    fn resolve(
        index: &IndexSet<String>,
        edge: &Edge,
        node: &str,
        pos: usize,
    ) -> Result<usize, GraphError> {
        index
            .get_index_of(node)
            .ok_or_else(|| GraphError::UnknownNode {
                edge: pos,
                from: edge.from.clone(),
                to: edge.to.clone(),
                node: node.to_string(),
            })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node ids in canonical order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    /// Edges in original input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_index(&self, node: &str) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    pub fn node_name(&self, index: usize) -> Option<&str> {
        self.nodes.get_index(index).map(String::as_str)
    }

    /// Adjacency matrix lookup. `Some(0)` on the diagonal.
    pub fn weight_between(&self, a: usize, b: usize) -> Option<u32> {
        let n = self.node_count();
        if a >= n || b >= n {
            return None;
        }
        self.adjacency[a * n + b]
    }

    /// All edges incident to `node`, in insertion order.
    ///
    /// This is a linear scan of the edge list, so Prim's algorithm is
    /// O(V * E) on top of the heap work. Fine for the small and medium
    /// networks this crate targets.
    pub fn adjacent_edges<'g>(&'g self, node: &'g str) -> impl Iterator<Item = &'g Edge> + 'g {
        self.edges.iter().filter(move |e| e.touches(node))
    }

    /// Depth-first walk from node 0 over the adjacency matrix.
    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let n = self.node_count();
        if n == 0 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut stack = vec![0usize];
        visited[0] = true;
        let mut reached = 1;

        while let Some(node) = stack.pop() {
            let row = &self.adjacency[node * n..(node + 1) * n];
            for (next, weight) in row.iter().enumerate() {
                if weight.is_some() && !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == n
    }

    /// Number of connected components (isolated nodes count as one each)
    pub fn component_count(&self) -> usize {
        let mut uf = UnionFind::new(self.nodes());
        for edge in &self.edges {
            uf.union(&edge.from, &edge.to);
        }
        uf.set_count()
    }
}
