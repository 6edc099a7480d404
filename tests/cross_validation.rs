//! Cross-validation against `petgraph` on a shared reference graph.

use std::collections::HashMap;

use petgraph::data::Element;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use trellis::{algorithms, DirectedGraph, INFINITE_DISTANCE};

const LABELS: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

const CONNECTIONS: [(&str, &str, i64); 17] = [
    ("A", "B", 3),
    ("A", "F", 2),
    ("B", "C", 17),
    ("B", "D", 16),
    ("C", "D", 8),
    ("C", "I", 18),
    ("D", "E", 11),
    ("D", "I", 4),
    ("E", "F", 1),
    ("E", "G", 6),
    ("E", "H", 5),
    ("E", "I", 10),
    ("F", "G", 7),
    ("G", "H", 15),
    ("H", "I", 12),
    ("H", "J", 13),
    ("I", "J", 9),
];

fn reference_graph() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::new();
    for label in LABELS {
        graph.set_vertex(label);
    }
    for (start, end, weight) in CONNECTIONS {
        graph.set_edge(&start, &end, weight).unwrap();
        graph.set_edge(&end, &start, weight).unwrap();
    }
    graph
}

#[test]
fn dijkstra_distances_match_petgraph() {
    let graph = reference_graph();

    let mut mirror: DiGraph<&str, i64> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();
    for label in LABELS {
        nodes.insert(label, mirror.add_node(label));
    }
    for (start, end, weight) in CONNECTIONS {
        mirror.add_edge(nodes[start], nodes[end], weight);
        mirror.add_edge(nodes[end], nodes[start], weight);
    }

    let start = graph.vertex_id(&"A").unwrap();
    let ours = algorithms::dijkstra(&graph, start).unwrap();
    let theirs = petgraph::algo::dijkstra(&mirror, nodes["A"], None, |edge| *edge.weight());

    for label in LABELS {
        let vertex = graph.vertex_id(&label).unwrap();
        match theirs.get(&nodes[label]) {
            Some(&distance) => assert_eq!(ours.distance(vertex), distance, "distance to {label}"),
            None => assert_eq!(ours.distance(vertex), INFINITE_DISTANCE),
        }
    }
}

#[test]
fn spanning_tree_weight_matches_petgraph() {
    let graph = reference_graph();

    let mut mirror: UnGraph<&str, i64> = UnGraph::new_undirected();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();
    for label in LABELS {
        nodes.insert(label, mirror.add_node(label));
    }
    for (start, end, weight) in CONNECTIONS {
        mirror.add_edge(nodes[start], nodes[end], weight);
    }

    let reference_total: i64 = petgraph::algo::min_spanning_tree(&mirror)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum();

    assert_eq!(algorithms::prim(&graph).unwrap().distance(), reference_total);
    assert_eq!(
        algorithms::kruskal(&graph).unwrap().distance(),
        reference_total
    );
    assert_eq!(reference_total, 48);
}
