use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lexidrill_core::corpus::parse;

fn word_list(lines: usize) -> String {
    let mut s = String::new();
    for i in 0..lines {
        s.push_str(&format!("termine{i}\tmeaning number {i}\r\n"));
        if i % 10 == 0 {
            // Blank and malformed lines mixed in.
            s.push_str("\n   \nno tab on this line\n");
        }
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let small = word_list(20);
    let medium = word_list(200);
    let large = word_list(5000);

    group.bench_function("20 lines", |b| b.iter(|| parse(black_box(&small))));
    group.bench_function("200 lines", |b| b.iter(|| parse(black_box(&medium))));
    group.bench_function("5000 lines", |b| b.iter(|| parse(black_box(&large))));

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
