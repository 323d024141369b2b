use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;
use unique_ints_engine::processor::Deduper;

fn benchmark_process(c: &mut Criterion) {
    let input: String = (0..100_000)
        .map(|i| format!("{}\n", (i * 7919) % 4000 - 2000))
        .collect();

    c.bench_function("process_100k_lines", |b| {
        let mut deduper = Deduper::new();
        b.iter(|| {
            let mut out: Vec<u8> = Vec::with_capacity(16 * 1024);
            let elapsed = deduper
                .try_process(&mut Cursor::new(black_box(input.as_bytes())), &mut out)
                .unwrap();
            black_box((elapsed, out));
        });
    });
}

criterion_group!(benches, benchmark_process);
criterion_main!(benches);
