use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use copycheck_core::{CompareConfig, Copydoc, SequenceMatcher, compare_blocks, extract_text_units};

fn bench_ratio(c: &mut Criterion) {
    let short = ("Welcome to our store!", "Welcome too our store!");
    let long_a = "Save up to 30% on every planter this week. ".repeat(8);
    let long_b = "Save up to 35% on every planter this weekend. ".repeat(8);

    let mut group = c.benchmark_group("ratio");

    group.bench_with_input(BenchmarkId::new("short", "21 chars"), &short, |b, (x, y)| {
        b.iter(|| SequenceMatcher::new(black_box(x), black_box(y)).ratio())
    });

    group.bench_with_input(BenchmarkId::new("long", "350 chars"), &(long_a, long_b), |b, (x, y)| {
        b.iter(|| SequenceMatcher::new(black_box(x), black_box(y)).ratio())
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let copydoc = Copydoc::from_file("../../tests/fixtures/spring_sale.txt").unwrap();
    let html = std::fs::read_to_string("../../tests/fixtures/spring_sale.html").unwrap();
    let units = extract_text_units(&html);
    let config = CompareConfig::default();

    c.bench_function("extract_units", |b| b.iter(|| extract_text_units(black_box(&html))));
    c.bench_function("compare_blocks", |b| {
        b.iter(|| compare_blocks(black_box(&copydoc), black_box(&units), &config))
    });
}

criterion_group!(benches, bench_ratio, bench_compare);
criterion_main!(benches);
