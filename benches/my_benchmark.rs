use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_utils::{build_test_resolver, load_test_symbols};
use ticker_resolver::{resolve_ticker_symbol, CompanyIndex};

fn benchmark_build_company_index(c: &mut Criterion) {
    let company_symbol_list = load_test_symbols();

    c.bench_function("build_company_index", |b| {
        b.iter(|| CompanyIndex::new(black_box(&company_symbol_list)))
    });
}

fn benchmark_resolve(c: &mut Criterion) {
    let resolver = build_test_resolver();

    c.bench_function("resolve_direct_symbol", |b| {
        b.iter(|| resolver.resolve(black_box("what about INFY today?")))
    });

    c.bench_function("resolve_scored_query", |b| {
        b.iter(|| resolver.resolve(black_box("should I buy hdfc life shares now?")))
    });
}

fn benchmark_resolve_embedded(c: &mut Criterion) {
    // Build the embedded resolver outside of the measured loop
    let _ = resolve_ticker_symbol("warmup");

    c.bench_function("resolve_embedded_catalog", |b| {
        b.iter(|| resolve_ticker_symbol(black_box("bajaj insurance")))
    });
}

criterion_group!(
    benches,
    benchmark_build_company_index,
    benchmark_resolve,
    benchmark_resolve_embedded
);
criterion_main!(benches);
