//! Weighted undirected edge between two node ids.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Undirected edge. `(a, b, w)` and `(b, a, w)` describe the same connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Order by weight only. Equal weights compare equal so that stable
    /// sorts keep encounter order.
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    /// True if `node` is one of the endpoints
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint at all
    pub fn other(&self, node: &str) -> Option<&str> {
        if self.from == node {
            Some(&self.to)
        } else if self.to == node {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Undirected equality: same endpoints in either orientation, same weight
    pub fn same_edge(&self, other: &Edge) -> bool {
        self.weight == other.weight
            && ((self.from == other.from && self.to == other.to)
                || (self.from == other.to && self.to == other.from))
    }

    /// Endpoints ordered lexicographically, for set-style comparisons
    pub fn canonical_key(&self) -> (&str, &str) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.from, self.to, self.weight)
    }
}
