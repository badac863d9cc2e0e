//! Criterion benchmarks for digraph-adt.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

use digraph_adt::{Graph, VertexKey};

/// Build a random graph with `edges_per_vertex` outgoing edges on every vertex.
fn make_graph(vertex_count: usize, edges_per_vertex: usize) -> (Graph<u64>, Vec<VertexKey>) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::with_capacity(vertex_count);
    let keys: Vec<VertexKey> = (0..vertex_count as u64).map(|i| graph.add_value(i)).collect();

    for &from in &keys {
        for _ in 0..edges_per_vertex {
            let to = keys[rng.gen_range(0..vertex_count)];
            graph.add_edge(from, to, Some(rng.gen_range(1..100)));
        }
    }

    (graph, keys)
}

fn bench_add_vertex(c: &mut Criterion) {
    let (mut graph, _) = make_graph(10_000, 3);

    c.bench_function("add_vertex_to_10k", |b| {
        b.iter(|| graph.add_value(0))
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let (mut graph, keys) = make_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let from = keys[rng.gen_range(0..keys.len())];
            let to = keys[rng.gen_range(0..keys.len())];
            graph.add_edge(from, to, None);
        })
    });
}

fn bench_bfs_100k(c: &mut Criterion) {
    let (graph, keys) = make_graph(100_000, 3);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            graph.breadth_first_traversal(Some(keys[0]), |_| visited += 1);
            visited
        })
    });
}

fn bench_dfs_100k(c: &mut Criterion) {
    let (graph, keys) = make_graph(100_000, 3);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            graph.depth_first_traversal(Some(keys[0]), |_| visited += 1);
            visited
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let (graph, keys) = make_graph(10_000, 3);

    c.bench_function("remove_vertex_from_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter_batched(
            || (graph.clone(), keys[rng.gen_range(0..keys.len())]),
            |(mut g, key)| g.remove(key),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_vertex,
    bench_add_edge,
    bench_bfs_100k,
    bench_dfs_100k,
    bench_remove_vertex,
);
criterion_main!(benches);
