use canonical_huffman::HuffmanCoder;
use criterion::{black_box, criterion_group, Criterion, Throughput};
use pprof::criterion::{Output, PProfProfiler};

use crate::benchmarks::get_symbols;

fn pipeline_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let coder = HuffmanCoder::new();
    let mut group = c.benchmark_group("pipeline");

    // a run allocates a bit for every encoded bit. Thus, reduce the sample size.
    group.sample_size(20);
    group.throughput(Throughput::Bytes(symbols.len() as u64));
    group.bench_function("zipf", |b| {
        b.iter(|| coder.run(black_box(&symbols)).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = pipeline_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = pipeline_benchmark
}
