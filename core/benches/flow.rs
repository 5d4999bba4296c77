use criterion::{black_box, criterion_group, criterion_main, Criterion};
use link_resilience_core::{count_disjoint, link_connectivity, statistics, Graph, GraphBuilder};

/// Bidirectional ring where every node also links `stride` positions ahead.
fn make_chordal_ring(size: u64, stride: u64) -> Graph {
    let mut b = GraphBuilder::with_capacity(size as usize, (size * 4) as usize);
    for i in 0..size {
        b.add_edge(i, (i + 1) % size);
        b.add_edge((i + 1) % size, i);
        b.add_edge(i, (i + stride) % size);
        b.add_edge((i + stride) % size, i);
    }
    b.build()
}

fn bench_count_disjoint(c: &mut Criterion) {
    let graph = make_chordal_ring(2_000, 7);

    c.bench_function("count_disjoint_ring_2000", |b| {
        b.iter(|| black_box(count_disjoint(&graph, 0, 1_000)))
    });
}

fn bench_pair_loops(c: &mut Criterion) {
    let graph = make_chordal_ring(60, 5);

    c.bench_function("statistics_ring_60", |b| {
        b.iter(|| black_box(statistics(&graph)))
    });

    c.bench_function("link_connectivity_ring_60", |b| {
        b.iter(|| black_box(link_connectivity(&graph)))
    });
}

criterion_group!(benches, bench_count_disjoint, bench_pair_loops);
criterion_main!(benches);
