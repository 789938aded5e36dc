//! Kruskal's algorithm: scan all edges cheapest-first and keep every edge
//! that joins two different components.

use std::time::Instant;

use crate::algorithm::MstAlgorithm;
use crate::edge::Edge;
use crate::graph::Graph;
use crate::mst_result::MstResult;
use crate::union_find::UnionFind;

#[derive(Debug, Default, Clone, Copy)]
pub struct KruskalAlgorithm;

impl MstAlgorithm for KruskalAlgorithm {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn find_mst(&self, graph: &Graph) -> MstResult {
        let start = Instant::now();

        if graph.node_count() == 0 {
            return MstResult::empty();
        }
        let target = graph.node_count() - 1;

        // Stable sort: equal weights keep input order
        let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
        sorted.sort_by(|a, b| a.cmp_weight(b));
        // The whole sort is charged one operation per edge
        let mut operations = sorted.len() as u64;

        let mut components = UnionFind::new(graph.nodes());
        let mut mst_edges = Vec::with_capacity(target);
        let mut total_cost = 0u64;

        for edge in sorted {
            operations += 1;
            if components.union(&edge.from, &edge.to) {
                total_cost += u64::from(edge.weight);
                mst_edges.push(edge.clone());

                if mst_edges.len() == target {
                    break;
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
