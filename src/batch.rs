//! Batch driver: run both MST engines over every graph of a dataset.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::algorithm::AlgorithmKind;
use crate::dataset::{AlgorithmResult, GraphData, GraphResult, InputData, OutputData};
use crate::mst_result::MstResult;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Graphs processed concurrently. Each MST run stays single-threaded;
    /// keep this at 1 for comparable timings.
    pub threads: usize,
    /// Warn about disconnected graphs before running the algorithms
    pub check_connectivity: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            threads: 1,
            check_connectivity: true,
        }
    }
}

pub fn run_batch(input: &InputData, config: &BatchConfig) -> Result<OutputData> {
    info!("Processing {} graphs", input.graphs.len());

    let results = if config.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .context("Failed to build thread pool")?;
        pool.install(|| {
            input
                .graphs
                .par_iter()
                .map(|g| process_graph(g, config))
                .collect::<Result<Vec<_>>>()
        })?
    } else {
        input
            .graphs
            .iter()
            .map(|g| process_graph(g, config))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(OutputData { results })
}

pub fn process_graph(data: &GraphData, config: &BatchConfig) -> Result<GraphResult> {
    info!(
        "Graph {} (nodes: {}, edges: {})",
        data.id,
        data.nodes.len(),
        data.edges.len()
    );

    let graph = data
        .to_graph()
        .with_context(|| format!("Invalid graph {}", data.id))?;

    let connected = graph.is_connected();
    if config.check_connectivity && !connected {
        warn!(
            "Graph {} is disconnected ({} components); MST results will be partial",
            data.id,
            graph.component_count()
        );
    }

    let prim = AlgorithmKind::Prim.run(&graph);
    let kruskal = AlgorithmKind::Kruskal.run(&graph);
    log_result(AlgorithmKind::Prim, &prim);
    log_result(AlgorithmKind::Kruskal, &kruskal);

    if connected && prim.total_cost != kruskal.total_cost {
        warn!(
            "Graph {}: MST cost mismatch (prim {}, kruskal {})",
            data.id, prim.total_cost, kruskal.total_cost
        );
    }

    Ok(GraphResult {
        id: data.id,
        nodes: data.nodes.clone(),
        edges: data.edges.clone(),
        connected,
        prim: AlgorithmResult::from(&prim),
        kruskal: AlgorithmResult::from(&kruskal),
    })
}

fn log_result(kind: AlgorithmKind, result: &MstResult) {
    info!(
        "  {:<8} cost: {}, time: {}us, operations: {}",
        kind.name(),
        result.total_cost,
        result.execution_time_us(),
        result.operation_count
    );
    debug!(
        "  {:<8} edges: {}",
        kind.name(),
        result
            .edges
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
}
