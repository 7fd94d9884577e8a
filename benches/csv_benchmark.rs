use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csvflow::{document_to_string, CsvWriter, Tokenizer};
use tempfile::tempdir;

fn sample_document(size: usize) -> Vec<Vec<String>> {
    (0..size)
        .map(|i| {
            vec![
                i.to_string(),
                format!("Name_{}", i),
                format!("note, with delimiter {}", i),
            ]
        })
        .collect()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1000, 10000].iter() {
        let input = document_to_string(&sample_document(*size), ',');

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let rows = Tokenizer::new(',').read_all(&input).unwrap();
                black_box(rows);
            });
        });
    }

    group.finish();
}

fn benchmark_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for size in [100, 1000, 10000].iter() {
        let rows = sample_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let dir = tempdir().unwrap();
                let mut writer = CsvWriter::create(dir.path().join("bench.csv")).unwrap();
                writer.write_document(&rows).unwrap();
                writer.save().unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let rows = sample_document(1000);
    c.bench_function("render_1000_rows", |b| {
        b.iter(|| {
            let text = document_to_string(&rows, ',');
            black_box(text);
        });
    });
}

criterion_group!(benches, benchmark_parse, benchmark_write, benchmark_render);
criterion_main!(benches);
