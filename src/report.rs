//! CSV export of per-run metrics and selected MST edges.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dataset::{create_parent_dirs, AlgorithmResult, OutputData};
use crate::mst_result::MstResult;

pub fn metrics_header() -> &'static str {
    "dataset,algorithm,totalCost,timeMs,ops,vertices,edges"
}

pub fn metrics_row(dataset: &str, algorithm: &str, result: &MstResult) -> String {
    metrics_row_for(dataset, algorithm, &AlgorithmResult::from(result))
}

fn metrics_row_for(dataset: &str, algorithm: &str, result: &AlgorithmResult) -> String {
    [
        escape_csv(dataset),
        escape_csv(algorithm),
        result.total_cost.to_string(),
        result.execution_time_ms.to_string(),
        result.operation_count.to_string(),
        result.vertex_count.to_string(),
        result.original_edge_count.to_string(),
    ]
    .join(",")
}

pub fn edges_header() -> &'static str {
    "dataset,algorithm,edge"
}

pub fn edge_rows(dataset: &str, algorithm: &str, result: &MstResult) -> Vec<String> {
    edge_rows_for(dataset, algorithm, &AlgorithmResult::from(result))
}

fn edge_rows_for(dataset: &str, algorithm: &str, result: &AlgorithmResult) -> Vec<String> {
    result
        .mst_edges
        .iter()
        .map(|e| {
            format!(
                "{},{},{}",
                escape_csv(dataset),
                escape_csv(algorithm),
                escape_csv(&e.to_string())
            )
        })
        .collect()
}

/// Quote when the value holds a comma, quote or line break; inner quotes are doubled
pub fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    let escaped = value.replace('"', "\"\"");
    if needs_quotes {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Label used for a graph in CSV rows
pub fn dataset_label(id: u32) -> String {
    format!("graph_{id}")
}

pub fn write_metrics_csv(path: impl AsRef<Path>, output: &OutputData) -> Result<()> {
    let mut lines = vec![metrics_header().to_string()];
    for result in &output.results {
        let label = dataset_label(result.id);
        lines.push(metrics_row_for(&label, "prim", &result.prim));
        lines.push(metrics_row_for(&label, "kruskal", &result.kruskal));
    }
    write_lines(path.as_ref(), &lines)
}

pub fn write_edges_csv(path: impl AsRef<Path>, output: &OutputData) -> Result<()> {
    let mut lines = vec![edges_header().to_string()];
    for result in &output.results {
        let label = dataset_label(result.id);
        lines.extend(edge_rows_for(&label, "prim", &result.prim));
        lines.extend(edge_rows_for(&label, "kruskal", &result.kruskal));
    }
    write_lines(path.as_ref(), &lines)
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    create_parent_dirs(path)?;
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
