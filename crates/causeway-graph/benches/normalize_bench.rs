use criterion::{criterion_group, criterion_main, Criterion};

use causeway_graph::{normalize, validate_dag_text, NormalizeMode};

/// A DAG text with `n` sources, each pointing at the next five.
fn dag_text(n: usize) -> String {
    let mut adjacency = serde_json::Map::new();
    for i in 0..n {
        let targets: Vec<serde_json::Value> = (1..=5)
            .filter(|j| i + j < n)
            .map(|j| serde_json::Value::from(format!("factor_{}", i + j)))
            .collect();
        adjacency.insert(format!("factor_{i}"), serde_json::Value::Array(targets));
    }
    serde_json::Value::Object(adjacency).to_string()
}

fn bench_validate_json(c: &mut Criterion) {
    let text = dag_text(200);
    c.bench_function("validate_dag_json_200_sources", |b| {
        b.iter(|| validate_dag_text(&text))
    });
}

fn bench_validate_literal(c: &mut Criterion) {
    let text = dag_text(200).replace('"', "'");
    c.bench_function("validate_dag_literal_200_sources", |b| {
        b.iter(|| validate_dag_text(&text))
    });
}

fn bench_normalize_triples(c: &mut Criterion) {
    let triples: Vec<serde_json::Value> = (0..1000)
        .map(|i| serde_json::json!([format!("f{i}"), format!("f{}", i + 1), (i % 100) as f64 / 100.0]))
        .collect();
    let value = serde_json::Value::Array(triples);
    c.bench_function("normalize_1k_triples", |b| {
        b.iter(|| normalize(&value, NormalizeMode::Relationships))
    });
}

criterion_group!(
    benches,
    bench_validate_json,
    bench_validate_literal,
    bench_normalize_triples
);
criterion_main!(benches);
