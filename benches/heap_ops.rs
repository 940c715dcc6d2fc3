//! Criterion benchmarks for the linked binary-tree heap
//!
//! The workloads use a multiplicative hash of the loop counter as input so
//! insertion order is scrambled without pulling a RNG into the hot loop.
//! Sequential (sorted) insertion is benchmarked separately because it is the
//! structure's documented worst case: each new maximum re-roots the tree and
//! the old root chains down the left spine.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use linked_binary_heap::heuristic::MaxFirst;
use linked_binary_heap::linked_binary::LinkedBinaryHeap;
use linked_binary_heap::Heap;

fn scrambled(i: u32) -> u32 {
    i.wrapping_mul(2654435761) >> 16
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for &n in &[256u32, 1024, 4096] {
        group.bench_function(format!("scrambled_{n}"), |b| {
            b.iter(|| {
                let mut heap: LinkedBinaryHeap<u32, MaxFirst> = LinkedBinaryHeap::new();
                for i in 0..n {
                    heap.push(black_box(scrambled(i)));
                }
                while let Some(value) = heap.pop() {
                    black_box(value);
                }
            })
        });
    }
    group.finish();
}

fn bench_sorted_insertion(c: &mut Criterion) {
    c.bench_function("push_sorted_1024", |b| {
        b.iter(|| {
            let mut heap: LinkedBinaryHeap<u32, MaxFirst> = LinkedBinaryHeap::new();
            for i in 0..1024u32 {
                heap.push(black_box(i));
            }
            black_box(heap.len())
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("remove_mid_rank_1024", |b| {
        b.iter_batched(
            || {
                let mut heap: LinkedBinaryHeap<u32, MaxFirst> = LinkedBinaryHeap::new();
                for i in 0..1024u32 {
                    heap.push(scrambled(i));
                }
                heap
            },
            |mut heap| {
                for i in 0..64u32 {
                    black_box(heap.remove(&scrambled(i * 16)));
                }
                heap
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_push_pop, bench_sorted_insertion, bench_remove);
criterion_main!(benches);
