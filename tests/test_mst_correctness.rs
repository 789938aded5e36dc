/// MST correctness tests on small hand-built networks
///
/// Both engines must agree on cost, produce N-1 acyclic edges on connected
/// graphs and degrade to partial forests on disconnected ones.
mod test_utils;

use pretty_assertions::assert_eq;
use spanbench::{AlgorithmKind, Edge, Graph, KruskalAlgorithm, MstAlgorithm, PrimAlgorithm};
use test_utils::*;

fn engines() -> [&'static dyn MstAlgorithm; 2] {
    [&PrimAlgorithm, &KruskalAlgorithm]
}

#[test]
fn test_identical_costs() {
    let graph = city_graph();
    let prim = PrimAlgorithm.find_mst(&graph);
    let kruskal = KruskalAlgorithm.find_mst(&graph);
    assert_eq!(prim.total_cost, kruskal.total_cost);
    assert_eq!(prim.total_cost, 16);
}

#[test]
fn test_edge_count_equals_v_minus_one() {
    let graph = city_graph();
    for engine in engines() {
        let result = engine.find_mst(&graph);
        assert_eq!(
            result.edges.len(),
            graph.node_count() - 1,
            "{}: MST edges should equal V-1",
            engine.name()
        );
        assert!(result.is_spanning());
    }
}

#[test]
fn test_mst_is_acyclic_and_spanning() {
    let graph = city_graph();
    let nodes: Vec<&str> = graph.nodes().collect();
    for engine in engines() {
        let result = engine.find_mst(&graph);
        assert!(is_acyclic(&nodes, &result.edges), "{}: cycle", engine.name());
        assert!(spans_all(&nodes, &result.edges), "{}: not spanning", engine.name());
    }
}

#[test]
fn test_same_edge_set_on_unique_weights() {
    let graph = city_graph();
    let prim = PrimAlgorithm.find_mst(&graph);
    let kruskal = KruskalAlgorithm.find_mst(&graph);
    assert_eq!(edge_multiset(&prim.edges), edge_multiset(&kruskal.edges));
    assert_eq!(
        edge_multiset(&kruskal.edges),
        edge_multiset(&[
            Edge::new("B", "C", 2),
            Edge::new("A", "C", 3),
            Edge::new("B", "D", 5),
            Edge::new("D", "E", 6),
        ])
    );
}

#[test]
fn test_disconnected_graph() {
    let graph = split_graph();
    assert!(!graph.is_connected());
    let nodes: Vec<&str> = graph.nodes().collect();

    for engine in engines() {
        let result = engine.find_mst(&graph);
        assert!(
            result.edges.len() < graph.node_count() - 1,
            "{}: disconnected graph should have fewer edges",
            engine.name()
        );
        assert!(is_acyclic(&nodes, &result.edges));
    }

    // Kruskal builds the whole forest
    let kruskal = KruskalAlgorithm.find_mst(&graph);
    assert_eq!(kruskal.edges.len(), 2);
    assert_eq!(kruskal.total_cost, 3);

    // Prim only covers the component of the first node
    let prim = PrimAlgorithm.find_mst(&graph);
    assert_eq!(prim.edges, vec![Edge::new("A", "B", 1)]);
    let covered = reachable(&nodes, &prim.edges, "A");
    let component = reachable(&nodes, graph.edges(), "A");
    assert_eq!(covered, component);
}

#[test]
fn test_operation_counts_positive() {
    for graph in [city_graph(), split_graph()] {
        for engine in engines() {
            let result = engine.find_mst(&graph);
            assert!(result.operation_count > 0, "{}", engine.name());
        }
    }
}

#[test]
fn test_operation_counts_match_accounting() {
    let graph = city_graph();
    assert_eq!(PrimAlgorithm.find_mst(&graph).operation_count, 17);
    assert_eq!(KruskalAlgorithm.find_mst(&graph).operation_count, 13);

    let graph = split_graph();
    assert_eq!(PrimAlgorithm.find_mst(&graph).operation_count, 2);
    assert_eq!(KruskalAlgorithm.find_mst(&graph).operation_count, 4);
}

#[test]
fn test_results_reproducible() {
    let graph = city_graph();
    for kind in AlgorithmKind::ALL {
        let first = kind.run(&graph);
        let second = kind.run(&graph);
        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.edges, second.edges);
        assert_eq!(first.operation_count, second.operation_count);
    }
}

#[test]
fn test_prim_start_node_follows_node_order() {
    // Same edges, different canonical order: Prim's first accepted edge
    // must leave the first listed node
    let edges = city_graph().edges().to_vec();
    let graph = Graph::new(["E", "D", "C", "B", "A"], edges).unwrap();
    let result = PrimAlgorithm.find_mst(&graph);
    assert_eq!(result.edges[0], Edge::new("D", "E", 6));
    assert_eq!(result.total_cost, 16);
}

#[test]
fn test_counts_recorded_from_source_graph() {
    let graph = city_graph();
    for engine in engines() {
        let result = engine.find_mst(&graph);
        assert_eq!(result.vertex_count, 5);
        assert_eq!(result.edge_count, 7);
    }
}

#[test]
fn test_graphs_shared_across_threads() {
    let graph = city_graph();
    let (prim, kruskal) = std::thread::scope(|s| {
        let p = s.spawn(|| PrimAlgorithm.find_mst(&graph));
        let k = s.spawn(|| KruskalAlgorithm.find_mst(&graph));
        (p.join().unwrap(), k.join().unwrap())
    });
    assert_eq!(prim.total_cost, kruskal.total_cost);
}
