use criterion::{black_box, criterion_group, criterion_main, Criterion};
use street_etymology::suggest_etymology;

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_etymology");

    group.bench_function("matched", |b| {
        b.iter(|| suggest_etymology(black_box("Great Church Lane")))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| suggest_etymology(black_box("Xyzzyplonk")))
    });

    group.finish();
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
