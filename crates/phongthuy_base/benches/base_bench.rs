use criterion::{Criterion, black_box, criterion_group, criterion_main};
use phongthuy_base::{
    Direction, check_hoang_oc, check_kim_lau, check_tam_tai, check_xung_tuoi, digital_root,
    element_of_year, evaluate_direction, evaluate_hazards, resolve_profile, zodiac_index,
};

fn numerology_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("numerology");
    group.bench_function("digital_root", |b| b.iter(|| digital_root(black_box(1992))));
    group.bench_function("zodiac_index", |b| b.iter(|| zodiac_index(black_box(1992))));
    group.bench_function("element_of_year", |b| {
        b.iter(|| element_of_year(black_box(2033)))
    });
    group.finish();
}

fn profile_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");
    group.bench_function("resolve_profile", |b| {
        b.iter(|| resolve_profile(black_box("15/08/1985"), black_box("nữ")))
    });
    group.finish();
}

fn taboo_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("taboo");
    group.bench_function("kim_lau", |b| b.iter(|| check_kim_lau(black_box(37))));
    group.bench_function("hoang_oc", |b| b.iter(|| check_hoang_oc(black_box(33))));
    group.bench_function("tam_tai", |b| b.iter(|| check_tam_tai(black_box(2), black_box(2024))));
    group.bench_function("xung_tuoi", |b| {
        b.iter(|| check_xung_tuoi(black_box(2), black_box(2027)))
    });
    group.finish();
}

fn site_bench(c: &mut Criterion) {
    let profile = match resolve_profile("1990-05-10", "nam") {
        Ok(p) => p,
        Err(e) => panic!("profile: {e}"),
    };
    let features = ["cot-dien", "nga-tu", "benh-vien", "unknown"];

    let mut group = c.benchmark_group("site");
    group.bench_function("evaluate_direction", |b| {
        b.iter(|| evaluate_direction(black_box(&profile), black_box(Direction::Tay)))
    });
    group.bench_function("evaluate_hazards", |b| {
        b.iter(|| evaluate_hazards(black_box(&features)))
    });
    group.finish();
}

criterion_group!(benches, numerology_bench, profile_bench, taboo_bench, site_bench);
criterion_main!(benches);
