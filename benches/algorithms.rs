//! 图算法基准测试

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphkit::algorithm::{coloring, connectivity, facility, mst, shortest_path, tsp};
use graphkit::algorithm::{run_all, RunOptions};
use graphkit::graph::{Graph, VertexId};

/// 随机连通图：先连一条随机生成树，再按概率补边
fn random_graph(n: usize, extra_probability: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_vertices(n);
    for v in 1..n as VertexId {
        let u = rng.gen_range(0..v);
        graph.add_weighted_edge(u, v, rng.gen_range(1.0..100.0));
    }
    for u in 0..n as VertexId {
        for v in (u + 1)..n as VertexId {
            if rng.gen_bool(extra_probability) {
                graph.add_weighted_edge(u, v, rng.gen_range(1.0..100.0));
            }
        }
    }
    graph
}

const SIZES: [usize; 3] = [50, 200, 800];

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for n in SIZES {
        let graph = random_graph(n, 0.05, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(shortest_path::dijkstra(g, None)))
        });
    }
    group.finish();
}

fn bench_kruskal_vs_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    for n in SIZES {
        let graph = random_graph(n, 0.05, 2);
        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, g| {
            b.iter(|| black_box(mst::kruskal(g)))
        });
        group.bench_with_input(BenchmarkId::new("prim", n), &graph, |b, g| {
            b.iter(|| black_box(mst::prim(g)))
        });
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    for n in [20usize, 100] {
        let graph = random_graph(n, 0.5, 3);
        group.bench_with_input(BenchmarkId::new("nearest_neighbor", n), &graph, |b, g| {
            b.iter(|| black_box(tsp::nearest_neighbor(g)))
        });
        group.bench_with_input(BenchmarkId::new("two_opt", n), &graph, |b, g| {
            b.iter(|| black_box(tsp::nearest_neighbor_two_opt(g)))
        });
    }
    group.finish();
}

fn bench_components_and_coloring(c: &mut Criterion) {
    let graph = random_graph(800, 0.01, 4);

    c.bench_function("components_dfs_800", |b| {
        b.iter(|| black_box(connectivity::components(&graph)))
    });
    c.bench_function("coloring_greedy_800", |b| {
        b.iter(|| black_box(coloring::greedy(&graph)))
    });
    c.bench_function("coloring_welsh_powell_800", |b| {
        b.iter(|| black_box(coloring::welsh_powell(&graph)))
    });
}

fn bench_k_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_center");
    for n in [50usize, 200] {
        let graph = random_graph(n, 0.05, 5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(facility::k_center(g)))
        });
    }
    group.finish();
}

fn bench_run_all(c: &mut Criterion) {
    let graph = random_graph(200, 0.05, 6);
    let options = RunOptions::default();

    c.bench_function("run_all_200", |b| {
        b.iter(|| black_box(run_all(&graph, &options)))
    });
}

criterion_group!(
    benches,
    bench_dijkstra,
    bench_kruskal_vs_prim,
    bench_tsp,
    bench_components_and_coloring,
    bench_k_center,
    bench_run_all,
);
criterion_main!(benches);
