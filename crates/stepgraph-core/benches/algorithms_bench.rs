//! Engine benchmarks on seeded random graphs.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use stepgraph_core::algorithms::{NoopObserver, bellman_ford, dijkstra, kruskal, prim};
use stepgraph_core::graph::{RandomGraphFactory, SpanningTreeFactory, WeightedGraph};

const SIZES: [usize; 3] = [16, 128, 512];

fn graph(nodes: usize) -> WeightedGraph<String> {
    SpanningTreeFactory::default()
        .build(nodes, Some(42))
        .unwrap_or_default()
}

fn first(graph: &WeightedGraph<String>) -> String {
    graph.first_node().cloned().unwrap_or_default()
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for size in SIZES {
        let graph = graph(size);
        let start = first(&graph);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("kruskal", size), &graph, |b, g| {
            b.iter(|| black_box(kruskal(black_box(g), NoopObserver)));
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &graph, |b, g| {
            b.iter(|| black_box(prim(black_box(g), &start, NoopObserver)));
        });
    }

    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in SIZES {
        let graph = graph(size);
        let source = first(&graph);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, g| {
            b.iter(|| black_box(dijkstra(black_box(g), &source, NoopObserver)));
        });
        // Quadratic in the worst case; the largest size takes a while.
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, g| {
            b.iter(|| black_box(bellman_ford(black_box(g), &source, NoopObserver)));
        });
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let factory = SpanningTreeFactory::default();
    let mut group = c.benchmark_group("generate");

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(factory.build(size, Some(7))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_spanning_trees,
    bench_shortest_paths,
    bench_generation
);
criterion_main!(benches);
