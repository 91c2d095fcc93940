use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use weft_core::queue::PriorityQueue;

fn bench_insert_extract(c: &mut Criterion) {
    c.bench_function("queue_insert_extract_1k", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_capacity(1024);
            for i in 0..1024u64 {
                // Knuth multiplicative scatter for an unsorted insert order
                let value = i.wrapping_mul(2_654_435_761) % 1024;
                queue.insert(black_box(value)).unwrap();
            }
            while !queue.is_empty() {
                black_box(queue.extract_min().unwrap());
            }
        });
    });
}

fn bench_insert_ascending(c: &mut Criterion) {
    c.bench_function("queue_insert_ascending_1k", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_capacity(1024);
            for i in 0..1024u64 {
                queue.insert(black_box(i)).unwrap();
            }
            queue
        });
    });
}

criterion_group!(benches, bench_insert_extract, bench_insert_ascending);
criterion_main!(benches);
