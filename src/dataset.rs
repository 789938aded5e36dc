//! JSON dataset and result models.
//!
//! Input:  `{"graphs": [{"id": 1, "nodes": [...], "edges": [{"from", "to", "weight"}]}]}`
//! Output: `{"results": [{"id", "nodes", "edges", "connected", "prim": {...}, "kruskal": {...}}]}`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::edge::Edge;
use crate::graph::{Graph, GraphError};
use crate::mst_result::MstResult;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputData {
    pub graphs: Vec<GraphData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub id: u32,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        Graph::new(self.nodes.iter().cloned(), self.edges.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputData {
    pub results: Vec<GraphResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphResult {
    pub id: u32,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
    pub connected: bool,
    pub prim: AlgorithmResult,
    pub kruskal: AlgorithmResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    pub mst_edges: Vec<Edge>,
    pub total_cost: u64,
    pub vertex_count: usize,
    pub original_edge_count: usize,
    pub operation_count: u64,
    pub execution_time_ms: u64,
    #[serde(default)]
    pub execution_time_us: u64,
}

impl From<&MstResult> for AlgorithmResult {
    fn from(result: &MstResult) -> Self {
        AlgorithmResult {
            mst_edges: result.edges.clone(),
            total_cost: result.total_cost,
            vertex_count: result.vertex_count,
            original_edge_count: result.edge_count,
            operation_count: result.operation_count,
            execution_time_ms: result.execution_time_ms(),
            execution_time_us: result.execution_time_us(),
        }
    }
}

pub fn read_input(path: impl AsRef<Path>) -> Result<InputData> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;
    let data: InputData = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
    Ok(data)
}

pub fn write_input(path: impl AsRef<Path>, data: &InputData) -> Result<()> {
    write_json(path.as_ref(), data)
}

pub fn write_output(path: impl AsRef<Path>, data: &OutputData) -> Result<()> {
    write_json(path.as_ref(), data)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    create_parent_dirs(path)?;
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}
