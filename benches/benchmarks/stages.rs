use canonical_huffman::huffman::{
    CanonicalCodeTable, EncodedOutput, FrequencyTable, HuffmanTree, TreeCodeTable,
};
use canonical_huffman::MIN_INPUT_LENGTH;
use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use crate::benchmarks::get_symbols;

fn stages_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let frequencies = FrequencyTable::count(&symbols, MIN_INPUT_LENGTH).unwrap();
    let tree = HuffmanTree::build(&frequencies).unwrap();
    let lengths = TreeCodeTable::from_tree(&tree).lengths();
    let canonical = CanonicalCodeTable::from_lengths(&lengths).unwrap();

    let mut group = c.benchmark_group("stages");

    group.bench_function("counting", |b| {
        b.iter(|| FrequencyTable::count(black_box(&symbols), MIN_INPUT_LENGTH).unwrap())
    });
    group.bench_function("tree building", |b| {
        b.iter(|| HuffmanTree::build(black_box(&frequencies)).unwrap())
    });
    group.bench_function("code generation", |b| {
        b.iter(|| TreeCodeTable::from_tree(black_box(&tree)).lengths())
    });
    group.bench_function("canonicalization", |b| {
        b.iter(|| CanonicalCodeTable::from_lengths(black_box(&lengths)).unwrap())
    });
    group.sample_size(20);
    group.bench_function("encoding", |b| {
        b.iter(|| EncodedOutput::encode(black_box(&symbols), black_box(&canonical)).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = stages_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = stages_benchmark
}
