use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spique::Spique;

const ITEMS: u64 = 10_000;

fn enqueue_dequeue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_dequeue");
    group.throughput(Throughput::Elements(ITEMS));

    for ring_size in [16usize, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(ring_size),
            &ring_size,
            |b, &ring_size| {
                b.iter(|| {
                    let queue = Spique::builder().ring_size(ring_size).build();
                    for i in 0..ITEMS {
                        let _ = queue.enqueue(i);
                    }
                    while queue.dequeue().is_some() {}
                });
            },
        );
    }
    group.finish();
}

fn steady_state_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state_window");
    group.throughput(Throughput::Elements(ITEMS));

    group.bench_function("ring_size_256", |b| {
        let queue = Spique::builder().ring_size(256).build();
        for i in 0..128u64 {
            let _ = queue.enqueue(i);
        }
        b.iter(|| {
            for i in 0..ITEMS {
                let _ = queue.enqueue(i);
                let _ = queue.dequeue();
            }
        });
    });
    group.finish();
}

criterion_group!(benches, enqueue_dequeue, steady_state_window);
criterion_main!(benches);
