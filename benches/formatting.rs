use chrono::DateTime;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tmplog::Logger;
use tmplog::fmt::{CompiledFormat, TimeLayout};
use tmplog::output::MemoryWriter;

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("CompiledFormat::compile");

    group.bench_function("plain", |b| {
        b.iter(|| CompiledFormat::compile(black_box("L2:%{message}")));
    });
    group.bench_function("color+time", |b| {
        b.iter(|| {
            CompiledFormat::compile(black_box("%{color:cyan}%{time:15:04:05.000}: %{message}"))
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let now = DateTime::from_timestamp(1_700_000_000, 123_456_789)
        .expect("valid timestamp")
        .fixed_offset();
    let plain = CompiledFormat::compile("L2:%{message}");
    let timed = CompiledFormat::compile("%{color:cyan}%{time}: %{message}");

    c.bench_function("CompiledFormat::render/plain", |b| {
        b.iter(|| plain.render(black_box("Application started successfully"), None));
    });
    c.bench_function("CompiledFormat::render/time", |b| {
        b.iter(|| timed.render(black_box("Application started successfully"), Some(now)));
    });
}

fn bench_layout(c: &mut Criterion) {
    let now = DateTime::from_timestamp(1_700_000_000, 123_456_789)
        .expect("valid timestamp")
        .fixed_offset();
    let layout = TimeLayout::parse("2006-01-02T15:04:05.000Z07:00");

    c.bench_function("TimeLayout::parse", |b| {
        b.iter(|| TimeLayout::parse(black_box("Mon Jan _2 15:04:05 MST 2006")));
    });
    c.bench_function("TimeLayout::format", |b| {
        b.iter(|| layout.format(black_box(&now)));
    });
}

fn bench_log(c: &mut Criterion) {
    let out = MemoryWriter::new();
    let logger = Logger::builder()
        .format("%{time}: %{message}")
        .writer(out.clone())
        .build();

    c.bench_function("Logger::log", |b| {
        b.iter(|| {
            logger.log(black_box("benchmark log message")).expect("write failed");
            out.clear();
        });
    });
}

criterion_group!(benches, bench_compile, bench_render, bench_layout, bench_log);
criterion_main!(benches);
