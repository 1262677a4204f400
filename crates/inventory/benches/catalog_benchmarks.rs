use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dukaan_inventory::catalog;
use dukaan_inventory::{Item, ItemDraft, ItemId};

/// Build a collection of `len` items with varied, realistic-looking names.
fn synthetic_collection(len: usize) -> Vec<Item> {
    const NAMES: &[&str] = &[
        "Rice (Basmati)",
        "Sugar",
        "Cooking Oil",
        "Dish Soap",
        "Shampoo",
        "Biscuits",
        "Juice",
        "Tea Leaves",
    ];

    (0..len)
        .map(|i| Item {
            id: ItemId::new(i.to_string()),
            name: format!("{} #{i}", NAMES[i % NAMES.len()]),
            price: format!("Rs. {}", (i % 50) + 1),
            stock: format!("{} pkts", (i % 200) + 1),
            category: "Essentials".to_string(),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for &size in &[20usize, 1_000, 10_000] {
        let items = synthetic_collection(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("name_substring", size), &items, |b, items| {
            b.iter(|| catalog::filter(black_box(items), black_box("soap")));
        });

        group.bench_with_input(BenchmarkId::new("empty_query", size), &items, |b, items| {
            b.iter(|| catalog::filter(black_box(items), black_box("")));
        });
    }

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");
    let items = synthetic_collection(1_000);
    let draft = ItemDraft::new("Ghee", "30", "10 kg", "Dairy");
    let mid = ItemId::new("500");

    group.bench_function("create_into_1k", |b| {
        b.iter(|| catalog::create(black_box(&items), black_box(&draft), 1_755_850_000_000));
    });

    group.bench_function("update_middle_of_1k", |b| {
        b.iter(|| catalog::update(black_box(&items), black_box(&mid), black_box(&draft)));
    });

    group.bench_function("remove_middle_of_1k", |b| {
        b.iter(|| catalog::remove(black_box(&items), black_box(&mid)));
    });

    group.finish();
}

fn bench_blob_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("blob_codec");
    let items = synthetic_collection(1_000);
    let blob = serde_json::to_string(&items).unwrap();

    group.throughput(Throughput::Bytes(blob.len() as u64));

    group.bench_function("encode_1k", |b| {
        b.iter(|| serde_json::to_string(black_box(&items)).unwrap());
    });

    group.bench_function("decode_1k", |b| {
        b.iter(|| serde_json::from_str::<Vec<Item>>(black_box(&blob)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_mutations, bench_blob_codec);
criterion_main!(benches);
