use criterion::{criterion_group, criterion_main, Criterion};
use linear_layout_encoder::{Constraints, Flavor, Graph, Parameters};

fn complete_graph(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(i, j).unwrap();
        }
    }
    g
}

fn bench_stack_encode(c: &mut Criterion) {
    let graph = complete_graph(10);
    let params = Parameters { flavor: Flavor::Stack, stacks: 5, ..Parameters::default() };
    c.bench_function("stack encode K10 on 5 pages", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            linear_layout_encoder::run(&graph, &params, Constraints::new(), Some(&mut buf), None).unwrap();
        })
    });
}

fn bench_queue_encode(c: &mut Criterion) {
    let graph = complete_graph(8);
    let params = Parameters { flavor: Flavor::Queue, queues: 4, ..Parameters::default() };
    c.bench_function("queue encode K8 on 4 pages", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            linear_layout_encoder::run(&graph, &params, Constraints::new(), Some(&mut buf), None).unwrap();
        })
    });
}

fn bench_track_encode(c: &mut Criterion) {
    let graph = complete_graph(8);
    let params = Parameters { flavor: Flavor::Track, tracks: 4, ..Parameters::default() };
    c.bench_function("track encode K8 on 4 tracks", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            linear_layout_encoder::run(&graph, &params, Constraints::new(), Some(&mut buf), None).unwrap();
        })
    });
}

criterion_group!(benches, bench_stack_encode, bench_queue_encode, bench_track_encode);
criterion_main!(benches);
