#![allow(dead_code)]

/// Utility functions for testing
use std::collections::{HashMap, HashSet};

use spanbench::{Edge, Graph};

/// The five-node city network used throughout the tests; its MST costs 16
pub fn city_graph() -> Graph {
    Graph::new(
        ["A", "B", "C", "D", "E"],
        vec![
            Edge::new("A", "B", 4),
            Edge::new("A", "C", 3),
            Edge::new("B", "C", 2),
            Edge::new("B", "D", 5),
            Edge::new("C", "D", 7),
            Edge::new("C", "E", 8),
            Edge::new("D", "E", 6),
        ],
    )
    .expect("city graph is valid")
}

/// Two components {A,B} and {C,D}
pub fn split_graph() -> Graph {
    Graph::new(
        ["A", "B", "C", "D"],
        vec![Edge::new("A", "B", 1), Edge::new("C", "D", 2)],
    )
    .expect("split graph is valid")
}

fn adjacency<'a>(nodes: &[&'a str], edges: &'a [Edge]) -> HashMap<&'a str, Vec<&'a str>> {
    let mut adj: HashMap<&str, Vec<&str>> = nodes.iter().map(|&n| (n, Vec::new())).collect();
    for e in edges {
        adj.entry(e.from.as_str()).or_default().push(e.to.as_str());
        adj.entry(e.to.as_str()).or_default().push(e.from.as_str());
    }
    adj
}

/// An edge set is a forest iff every edge joins two previously separate trees
pub fn is_acyclic(nodes: &[&str], edges: &[Edge]) -> bool {
    let index: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    let mut parent: Vec<usize> = (0..nodes.len()).collect();

    fn root(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            x = parent[x];
        }
        x
    }

    for e in edges {
        let (Some(&a), Some(&b)) = (index.get(e.from.as_str()), index.get(e.to.as_str())) else {
            return false;
        };
        let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}

/// Nodes reachable from `start` using only `edges`
pub fn reachable<'a>(nodes: &[&'a str], edges: &'a [Edge], start: &'a str) -> HashSet<&'a str> {
    let adj = adjacency(nodes, edges);
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for &next in adj.get(node).into_iter().flatten() {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

/// True when `edges` connect every node in `nodes`
pub fn spans_all(nodes: &[&str], edges: &[Edge]) -> bool {
    match nodes.first() {
        None => true,
        Some(&start) => reachable(nodes, edges, start).len() == nodes.len(),
    }
}

/// Edge multiset keyed by canonical endpoints and weight
pub fn edge_multiset(edges: &[Edge]) -> Vec<(String, String, u32)> {
    let mut keys: Vec<(String, String, u32)> = edges
        .iter()
        .map(|e| {
            let (a, b) = e.canonical_key();
            (a.to_string(), b.to_string(), e.weight)
        })
        .collect();
    keys.sort();
    keys
}
