use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prec_sched::graph::{Job, PrecedenceGraph};
use prec_sched::schedulers::lcl::lcl_schedule;
use prec_sched::schedulers::tabu::{tabu_schedule, TabuSearchOptions};

/// Deterministic layered instance: forward edges three nodes apart with a gap
/// every third node, attribute values cycled from small residues.
fn layered_instance(node_count: usize) -> PrecedenceGraph {
    let edges: Vec<(usize, usize)> = (0..node_count.saturating_sub(3))
        .filter(|i| i % 3 != 2)
        .map(|i| (i, i + 3))
        .collect();
    let jobs = (0..node_count)
        .map(|i| Job {
            index: i,
            kind: "task".to_string(),
            processing_time: (i * 7 % 13 + 1) as u32,
            due_date: (i * 11 % 59 + 4) as u32,
        })
        .collect();
    PrecedenceGraph::new(node_count, &edges, jobs).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedulers");
    group.sample_size(50);

    for size in [30, 120] {
        let graph = layered_instance(size);

        group.bench_with_input(BenchmarkId::new("lcl", size), &graph, |b, graph| {
            b.iter(|| lcl_schedule(graph))
        });

        for iterations in [100, 1000] {
            let options = TabuSearchOptions {
                max_iterations: iterations,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new("tabu", format!("{size}/{iterations}")),
                &options,
                |b, options| b.iter(|| tabu_schedule(&graph, options.clone())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
