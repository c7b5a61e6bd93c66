//! Reordering performance benchmarks
//!
//! Measures parse-and-analyze throughput on import blocks of increasing
//! size, to keep the per-file cost negligible inside editor save hooks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use imporder::TypeScriptParser;
use imporder::ordering::analyze;
use std::hint::black_box;

fn generate_imports(count: usize) -> String {
    let mut code = String::new();
    for i in 0..count {
        let line = match i % 4 {
            0 => format!("import mod{i} from 'package{i}';\n"),
            1 => format!("import s{i} from '@scope/pkg{i}';\n"),
            2 => format!("import local{i} from './local{i}';\n"),
            _ => format!("import up{i} from '../up{i}';\n"),
        };
        code.push_str(&line);
    }
    code
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for count in [8usize, 64, 256] {
        let code = generate_imports(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("imports", count), &code, |b, code| {
            let mut parser = TypeScriptParser::new().expect("Failed to create parser");
            let imports = parser.parse_imports(code).expect("parse failed");
            b.iter(|| {
                let decision = analyze(black_box(&imports), |import| {
                    &code[import.range.start..import.range.end]
                });
                black_box(decision)
            });
        });
    }

    group.finish();
}

fn bench_parse_and_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_analyze");

    let code = generate_imports(64);
    group.throughput(Throughput::Bytes(code.len() as u64));

    group.bench_function("64_imports", |b| {
        let mut parser = TypeScriptParser::new().expect("Failed to create parser");
        b.iter(|| {
            let imports = parser.parse_imports(black_box(&code)).expect("parse failed");
            let decision = analyze(&imports, |import| {
                &code[import.range.start..import.range.end]
            });
            black_box(decision)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_parse_and_analyze);
criterion_main!(benches);
