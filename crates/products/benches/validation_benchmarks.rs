use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use serde_json::json;
use storefront_products::{is_valid_cpf, Product, ProductRegistry};

fn bench_cpf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpf");
    group.throughput(Throughput::Elements(1));

    for input in ["52998224725", "529.982.247-25", "52998224726", "11111111111"] {
        group.bench_with_input(BenchmarkId::new("is_valid_cpf", input), input, |b, s| {
            b.iter(|| is_valid_cpf(black_box(s)))
        });
    }
    group.finish();
}

fn bench_schema(c: &mut Criterion) {
    let valid = json!({
        "name": "Corolla",
        "model": "XEi",
        "dateManufacture": "2021-03-15",
        "year": 2021,
        "brand": "Toyota",
        "cpf": "52998224725",
    });
    let invalid = json!({ "name": "", "year": 1.5, "cpf": "123" });

    c.bench_function("product_from_json_valid", |b| {
        b.iter(|| Product::from_json(black_box(&valid)))
    });
    c.bench_function("product_from_json_invalid", |b| {
        b.iter(|| Product::from_json(black_box(&invalid)))
    });
}

fn bench_registry(c: &mut Criterion) {
    let body = json!({
        "name": "Corolla",
        "model": "XEi",
        "dateManufacture": "2021-03-15",
        "year": 2021,
        "brand": "Toyota",
        "cpf": "52998224725",
    });
    let Ok(product) = Product::from_json(&body) else {
        panic!("benchmark fixture must validate");
    };

    let mut group = c.benchmark_group("registry");
    for size in [10usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("delete_front", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let registry = ProductRegistry::new();
                    for _ in 0..size {
                        registry.create(product.clone());
                    }
                    registry
                },
                |registry| registry.delete_at(0),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cpf, bench_schema, bench_registry);
criterion_main!(benches);
