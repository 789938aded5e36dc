/// Synthetic transportation-network datasets
///
/// Each graph starts from a random spanning tree (so it is always connected)
/// and then gets up to 2n extra random edges. Weights are uniform in 1..=100.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use crate::dataset::{GraphData, InputData};
use crate::edge::Edge;

pub const DEFAULT_SEED: u64 = 42;

const SMALL_SIZES: [usize; 5] = [5, 10, 15, 20, 25];
const MEDIUM_SIZES: [usize; 10] = [30, 35, 40, 45, 50, 55, 60, 65, 70, 75];
const LARGE_SIZES: [usize; 10] = [80, 90, 100, 110, 120, 130, 140, 150, 160, 170];
const EXTRA_LARGE_SIZES: [usize; 3] = [200, 250, 300];

const MAX_WEIGHT: u32 = 100;

pub struct GraphGenerator {
    rng: StdRng,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl GraphGenerator {
    pub fn new(seed: u64) -> Self {
        GraphGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Small, medium, large and extra-large tiers, ids 1..=28
    pub fn generate_complete_dataset(&mut self) -> InputData {
        let sizes: Vec<usize> = SMALL_SIZES
            .iter()
            .chain(MEDIUM_SIZES.iter())
            .chain(LARGE_SIZES.iter())
            .chain(EXTRA_LARGE_SIZES.iter())
            .copied()
            .collect();
        self.generate_sizes(&sizes)
    }

    /// One graph per size, ids numbered from 1 in list order
    pub fn generate_sizes(&mut self, sizes: &[usize]) -> InputData {
        let graphs = sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| self.generate_graph(i as u32 + 1, n))
            .collect();
        InputData { graphs }
    }

    pub fn generate_graph(&mut self, id: u32, node_count: usize) -> GraphData {
        let nodes: Vec<String> = (0..node_count).map(|i| format!("N{i}")).collect();
        let mut edges = Vec::new();
        let mut seen = HashSet::new();

        // Random spanning tree: node i hangs off an earlier node
        for i in 1..node_count {
            let parent = self.rng.gen_range(0..i);
            self.add_edge(&mut edges, &mut seen, &nodes, parent, i);
        }

        let max_edges = node_count * node_count.saturating_sub(1) / 2;
        let extra = (node_count * 2).min(max_edges - edges.len());
        for _ in 0..extra {
            let from = self.rng.gen_range(0..node_count);
            let to = self.rng.gen_range(0..node_count);
            if from != to {
                self.add_edge(&mut edges, &mut seen, &nodes, from, to);
            }
        }

        GraphData { id, nodes, edges }
    }

    fn add_edge(
        &mut self,
        edges: &mut Vec<Edge>,
        seen: &mut HashSet<(usize, usize)>,
        nodes: &[String],
        from: usize,
        to: usize,
    ) {
        let key = (from.min(to), from.max(to));
        if seen.insert(key) {
            let weight = self.rng.gen_range(1..=MAX_WEIGHT);
            edges.push(Edge::new(nodes[from].clone(), nodes[to].clone(), weight));
        }
    }
}
