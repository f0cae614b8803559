//! Criterion benchmarks for taglog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use taglog::{infof, Flags, Level, Logger};

fn bench_filtered_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_out");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::to_writer(std::io::sink());
    logger.set_level(Level::Error);

    group.bench_function("unformatted", |b| {
        b.iter(|| logger.debug(black_box("dropped message")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| debug_call(&logger, black_box(42)));
    });

    group.finish();
}

fn debug_call(logger: &Logger, value: u64) {
    logger.debugf(format_args!("dropped message {}", value));
}

fn bench_emitted(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitted");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::to_writer(std::io::sink());

    group.bench_function("plain_line", |b| {
        b.iter(|| logger.info(black_box("request processed")));
    });

    group.bench_function("formatted_line", |b| {
        b.iter(|| infof!(logger, "request {} processed", black_box(7)));
    });

    let decorated = Logger::to_writer(std::io::sink());
    decorated.set_flags(Flags::STD | Flags::SHORT_FILE);

    group.bench_function("decorated_line", |b| {
        b.iter(|| decorated.info(black_box("request processed")));
    });

    group.finish();
}

criterion_group!(benches, bench_filtered_out, bench_emitted);
criterion_main!(benches);
