use chromagraph::coloring::{colorize, conflicts, Bidirectional, Outgoing};
use chromagraph::graph::{Graph, NodeId};
use chromagraph::render::{to_dot, DotOptions};
use chromagraph::Palette;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Ring of `size` nodes where each node also links to the one `size / 3` ahead
fn build_chorded_ring(size: u64, directed: bool) -> Graph {
    let mut graph = if directed {
        Graph::directed()
    } else {
        Graph::undirected()
    };
    for i in 0..size {
        graph.add_node(i).unwrap();
    }
    for i in 0..size {
        let next = NodeId::from((i + 1) % size);
        let chord = NodeId::from((i + size / 3) % size);
        let from = NodeId::from(i);
        if !graph.node(&from).unwrap().has_edge_to(&next) && from != next {
            graph.add_edge(from.clone(), next).unwrap();
        }
        if !graph.node(&from).unwrap().has_edge_to(&chord) && from != chord {
            graph.add_edge(from, chord).unwrap();
        }
    }
    graph
}

/// Benchmark greedy coloring on undirected graphs
fn bench_colorize_undirected(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorize_undirected");

    for size in [50u64, 200, 800].iter() {
        let mut graph = build_chorded_ring(*size, false);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let outcome = colorize(&mut graph, &Outgoing).unwrap();
                criterion::black_box(outcome.color_count());
            });
        });
    }
    group.finish();
}

/// Benchmark the bidirectional policy, which scans every node for incoming edges
fn bench_colorize_bidirectional(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorize_bidirectional");

    for size in [50u64, 200, 800].iter() {
        let mut graph = build_chorded_ring(*size, true);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let outcome = colorize(&mut graph, &Bidirectional).unwrap();
                criterion::black_box(outcome.color_count());
            });
        });
    }
    group.finish();
}

/// Benchmark conflict verification and DOT output on a colored graph
fn bench_verify_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_and_render");

    let mut graph = build_chorded_ring(800, false);
    colorize(&mut graph, &Outgoing).unwrap();
    let options = DotOptions::default().with_palette(Palette::default());

    group.bench_function("conflicts", |b| {
        b.iter(|| {
            let found = conflicts(&graph, &Outgoing).unwrap();
            criterion::black_box(found.len());
        });
    });

    group.bench_function("to_dot", |b| {
        b.iter(|| {
            let dot = to_dot(&graph, &options);
            criterion::black_box(dot.len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_colorize_undirected,
    bench_colorize_bidirectional,
    bench_verify_and_render,
);
criterion_main!(benches);
