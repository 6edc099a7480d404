use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use trellis::{algorithms, DirectedGraph};

const VERTICES: usize = 500;
const CHORDS: [usize; 3] = [1, 7, 13];

// Deterministic ring-with-chords topology; weight derived from the indices.
fn chord_weight(from: usize, offset: usize) -> i64 {
    ((from * offset) % 19 + 1) as i64
}

fn ring_graph() -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    for vertex in 0..VERTICES {
        graph.set_vertex(vertex);
    }
    for from in 0..VERTICES {
        for offset in CHORDS {
            let to = (from + offset) % VERTICES;
            graph.set_edge(&from, &to, chord_weight(from, offset)).unwrap();
        }
    }
    graph
}

fn layered_dag() -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    for vertex in 0..VERTICES {
        graph.set_vertex(vertex);
    }
    for from in 0..VERTICES {
        for offset in CHORDS {
            let to = from + offset;
            if to < VERTICES {
                graph.set_edge(&from, &to, 1).unwrap();
            }
        }
    }
    graph
}

fn petgraph_ring() -> (DiGraph<usize, i64>, NodeIndex) {
    let mut graph = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..VERTICES).map(|vertex| graph.add_node(vertex)).collect();
    for from in 0..VERTICES {
        for offset in CHORDS {
            let to = (from + offset) % VERTICES;
            graph.add_edge(nodes[from], nodes[to], chord_weight(from, offset));
        }
    }
    (graph, nodes[0])
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = ring_graph();
    let start = graph.vertex_id(&0).unwrap();
    let (mirror, mirror_start) = petgraph_ring();

    let mut group = c.benchmark_group("dijkstra");
    group.bench_function("trellis", |b| {
        b.iter(|| {
            let paths = algorithms::dijkstra(black_box(&graph), start).unwrap();
            black_box(paths.distance(start));
        });
    });
    group.bench_function("petgraph", |b| {
        b.iter(|| {
            let distances = petgraph::algo::dijkstra(
                black_box(&mirror),
                mirror_start,
                None,
                |edge| *edge.weight(),
            );
            black_box(distances.len());
        });
    });
    group.finish();
}

fn bench_topological_sort(c: &mut Criterion) {
    let graph = layered_dag();

    let mut group = c.benchmark_group("topological_sort");
    group.bench_function("recursive", |b| {
        b.iter(|| algorithms::topological_sort(black_box(&graph)).unwrap());
    });
    group.bench_function("iterative", |b| {
        b.iter(|| algorithms::topological_sort_iterative(black_box(&graph)).unwrap());
    });
    group.finish();
}

fn bench_spanning_tree(c: &mut Criterion) {
    // Mirror every chord so the ring behaves as an undirected graph.
    let mut graph = ring_graph();
    for from in 0..VERTICES {
        for offset in CHORDS {
            let to = (from + offset) % VERTICES;
            if !graph.contains_edge(&to, &from) {
                graph.set_edge(&to, &from, chord_weight(from, offset)).unwrap();
            }
        }
    }

    let mut group = c.benchmark_group("spanning_tree");
    group.bench_function("prim", |b| {
        b.iter(|| algorithms::prim(black_box(&graph)).unwrap());
    });
    group.bench_function("kruskal", |b| {
        b.iter(|| algorithms::kruskal(black_box(&graph)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_dijkstra,
    bench_topological_sort,
    bench_spanning_tree
);
criterion_main!(benches);
