//! Common interface for the MST engines.

use std::fmt;

use crate::graph::Graph;
use crate::kruskal::KruskalAlgorithm;
use crate::mst_result::MstResult;
use crate::prim::PrimAlgorithm;

/// An MST engine. Implementations hold no per-run state, so one value can
/// be shared across threads and reused across graphs.
pub trait MstAlgorithm: Send + Sync {
    /// Short lowercase label used in reports
    fn name(&self) -> &'static str;

    fn find_mst(&self, graph: &Graph) -> MstResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Prim,
    Kruskal,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::Prim, AlgorithmKind::Kruskal];

    pub fn run(self, graph: &Graph) -> MstResult {
        match self {
            AlgorithmKind::Prim => PrimAlgorithm.find_mst(graph),
            AlgorithmKind::Kruskal => KruskalAlgorithm.find_mst(graph),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Prim => PrimAlgorithm.name(),
            AlgorithmKind::Kruskal => KruskalAlgorithm.name(),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
