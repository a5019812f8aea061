use criterion::{black_box, criterion_group, criterion_main, Criterion};
use moonfield::almanac::eclipse::check_eclipse;
use moonfield::moonlib::lunar_position;
use moonfield::nutationlib::nutation;
use moonfield::{CalendarDate, JulianDate, MoonCalculator};

fn position_bench(c: &mut Criterion) {
    let jd = JulianDate::new(2448724.5).unwrap();

    let mut group = c.benchmark_group("position");
    group.bench_function("nutation", |b| b.iter(|| nutation(black_box(jd))));
    group.bench_function("lunar_position", |b| b.iter(|| lunar_position(black_box(jd))));
    group.finish();
}

fn almanac_bench(c: &mut Criterion) {
    let date = CalendarDate::new(8.0, 4, 2024).unwrap();
    let calculator = MoonCalculator::new().with_latitude(51.5);

    let mut group = c.benchmark_group("almanac");
    group.bench_function("check_eclipse", |b| b.iter(|| check_eclipse(black_box(&date))));
    group.bench_function("full_report", |b| {
        b.iter(|| calculator.calculate(black_box(&date)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, position_bench, almanac_bench);
criterion_main!(benches);
