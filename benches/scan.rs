use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Write;
use tempfile::NamedTempFile;
use typochk::{PatternTable, TypoChecker};

fn bench_scan(c: &mut Criterion) {
    let table = PatternTable::load_embedded().unwrap();
    let checker = TypoChecker::new(&table).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    for i in 0..1_000 {
        writeln!(
            file,
            "line {} mixes teh usual langauge slips with plenty of clean text around them",
            i
        )
        .unwrap();
    }
    file.flush().unwrap();

    c.bench_function("scan_1k_lines", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            let summary = checker.scan(file.path(), &mut sink, false).unwrap();
            black_box(summary.match_count)
        })
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
