//! Prim's algorithm: grow a frontier from the first node, always taking the
//! cheapest edge that leaves it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::algorithm::MstAlgorithm;
use crate::edge::Edge;
use crate::graph::Graph;
use crate::mst_result::MstResult;

/// Heap entry. Ordered so that `BinaryHeap` pops the lowest weight first
/// and, among equal weights, the entry pushed earliest.
struct Candidate<'g> {
    weight: u32,
    seq: u64,
    edge: &'g Edge,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

/// Min-heap of candidate edges with insertion-order tie-break
struct Frontier<'g> {
    heap: BinaryHeap<Candidate<'g>>,
    next_seq: u64,
}

impl<'g> Frontier<'g> {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, edge: &'g Edge) {
        self.heap.push(Candidate {
            weight: edge.weight,
            seq: self.next_seq,
            edge,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<&'g Edge> {
        self.heap.pop().map(|c| c.edge)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PrimAlgorithm;

impl MstAlgorithm for PrimAlgorithm {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn find_mst(&self, graph: &Graph) -> MstResult {
        let start = Instant::now();

        let Some(seed) = graph.node_name(0) else {
            return MstResult::empty();
        };
        let target = graph.node_count() - 1;

        let mut visited = vec![false; graph.node_count()];
        let mut frontier = Frontier::new();
        let mut mst_edges = Vec::with_capacity(target);
        let mut total_cost = 0u64;
        let mut operations = 0u64;

        visited[0] = true;
        for edge in graph.adjacent_edges(seed) {
            frontier.push(edge);
        }

        while mst_edges.len() < target {
            let Some(edge) = frontier.pop() else {
                // Frontier exhausted before spanning: disconnected graph
                break;
            };
            operations += 1;

            let (Some(from), Some(to)) = (graph.node_index(&edge.from), graph.node_index(&edge.to))
            else {
                continue;
            };

            // Stale entries (both ends visited) are dropped here; the pop
            // above still counts as an operation
            let (next, next_name) = match (visited[from], visited[to]) {
                (true, false) => (to, edge.to.as_str()),
                (false, true) => (from, edge.from.as_str()),
                _ => continue,
            };

            visited[next] = true;
            total_cost += u64::from(edge.weight);
            mst_edges.push(edge.clone());

            for adjacent in graph.adjacent_edges(next_name) {
                operations += 1;
                let both_visited = match (
                    graph.node_index(&adjacent.from),
                    graph.node_index(&adjacent.to),
                ) {
                    (Some(a), Some(b)) => visited[a] && visited[b],
                    _ => true,
                };
                if !both_visited {
                    frontier.push(adjacent);
                }
            }
        }

        MstResult {
            edges: mst_edges,
            total_cost,
            elapsed: start.elapsed(),
            operation_count: operations,
            vertex_count: graph.node_count(),
            edge_count: graph.edge_count(),
        }
    }
}
