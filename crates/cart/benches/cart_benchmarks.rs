use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_cart::{CartCommand, CartEntry, CartState, CartViewModel, Money, PriceFormat, Sku, apply};

fn catalog(size: usize) -> Vec<CartEntry> {
    (0..size)
        .map(|i| {
            // Reverse sequence numbers so projection has real sorting to do.
            let sku = Sku::parse(format!("item{:04}", size - i)).unwrap();
            CartEntry::candidate(sku, format!("Product {i}"), Money::from_cents(199 + i as u64))
        })
        .collect()
}

fn filled_cart(size: usize) -> CartState {
    catalog(size).into_iter().fold(CartState::new(), |state, entry| {
        apply(&state, &CartCommand::Add(entry)).unwrap()
    })
}

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_apply");
    for size in [10usize, 100, 1_000] {
        let state = filled_cart(size);
        let merge = CartCommand::Add(catalog(size)[size / 2].clone());
        let set_qty = CartCommand::SetQuantity(catalog(size)[size / 2].with_quantity(7));

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("add_merge", size), &state, |b, state| {
            b.iter(|| apply(black_box(state), black_box(&merge)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("set_quantity", size), &state, |b, state| {
            b.iter(|| apply(black_box(state), black_box(&set_qty)).unwrap())
        });
    }
    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let format = PriceFormat::default();
    let mut group = c.benchmark_group("view_model_project");
    for size in [10usize, 100, 1_000] {
        let state = filled_cart(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| CartViewModel::project(black_box(state), &format))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reducer, bench_projection);
criterion_main!(benches);
