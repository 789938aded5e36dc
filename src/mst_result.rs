use std::time::Duration;

use crate::edge::Edge;

/// Outcome of one MST run, with the instrumentation used to compare
/// algorithms against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    /// Selected edges in the order the algorithm accepted them
    pub edges: Vec<Edge>,
    pub total_cost: u64,
    /// Wall time of the algorithm body only
    pub elapsed: Duration,
    /// Algorithm-internal work units (pops, adjacency scans, sort charge)
    pub operation_count: u64,
    /// Node count of the source graph
    pub vertex_count: usize,
    /// Edge count of the source graph
    pub edge_count: usize,
}

impl MstResult {
    /// Zero-valued result returned for graphs without nodes
    pub fn empty() -> Self {
        MstResult {
            edges: Vec::new(),
            total_cost: 0,
            elapsed: Duration::ZERO,
            operation_count: 0,
            vertex_count: 0,
            edge_count: 0,
        }
    }

    pub fn execution_time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    pub fn execution_time_us(&self) -> u64 {
        self.elapsed.as_micros() as u64
    }

    /// True when the edges span every vertex (N-1 edges).
    /// A disconnected graph yields a partial forest and returns false.
    pub fn is_spanning(&self) -> bool {
        self.vertex_count == 0 || self.edges.len() + 1 == self.vertex_count
    }
}
