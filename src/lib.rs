// Library exports for spanbench
pub mod algorithm;
pub mod batch;
pub mod dataset;
pub mod edge;
pub mod generator;
pub mod graph;
pub mod kruskal;
pub mod mst_result;
pub mod prim;
pub mod report;
pub mod union_find;

pub use algorithm::{AlgorithmKind, MstAlgorithm};
pub use edge::Edge;
pub use graph::{Graph, GraphError};
pub use kruskal::KruskalAlgorithm;
pub use mst_result::MstResult;
pub use prim::PrimAlgorithm;
