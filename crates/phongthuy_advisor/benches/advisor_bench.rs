use criterion::{Criterion, black_box, criterion_group, criterion_main};
use phongthuy_advisor::{Direction, evaluate_all};

fn evaluate_bench(c: &mut Criterion) {
    let features = ["benh-vien", "nga-tu", "cot-dien"];

    let mut group = c.benchmark_group("advisor");
    group.bench_function("evaluate_all", |b| {
        b.iter(|| {
            evaluate_all(
                black_box("15/08/1985"),
                black_box("nữ"),
                black_box(2033),
                black_box(4),
                black_box(&features),
                Direction::TayNam,
            )
        })
    });
    group.bench_function("evaluate_all_no_site", |b| {
        b.iter(|| {
            evaluate_all(
                black_box("1990-05-10"),
                black_box("nam"),
                black_box(2025),
                black_box(13),
                &[],
                Direction::Bac,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, evaluate_bench);
criterion_main!(benches);
