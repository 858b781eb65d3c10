use criterion::{black_box, criterion_group, criterion_main, Criterion};

use warborne_gear::data::default_catalog;
use warborne_gear::entities::{total_gear_power, Drifter};
use warborne_gear::items::{filter_catalog, Category, CatalogQuery, WeaponTypeFilter};

fn full_roster() -> Vec<Drifter> {
    let catalog = default_catalog();
    (0..9)
        .map(|n| {
            let mut drifter = Drifter::new(&format!("Drifter {}", n + 1));
            for item in catalog.items() {
                drifter.equip(item.clone().with_tier("VII", 30));
            }
            drifter
        })
        .collect()
}

fn bench_total_gear_power(c: &mut Criterion) {
    let roster = full_roster();
    c.bench_function("total_gear_power", |b| b.iter(|| total_gear_power(black_box(&roster))));
}

fn bench_filter_catalog(c: &mut Criterion) {
    let catalog = default_catalog();
    let query = CatalogQuery::new(Category::Weapon)
        .search("sword")
        .weapon_type(WeaponTypeFilter::parse("sword"));
    c.bench_function("filter_catalog", |b| {
        b.iter(|| filter_catalog(black_box(catalog.items()), black_box(&query)))
    });
}

criterion_group!(benches, bench_total_gear_power, bench_filter_catalog);
criterion_main!(benches);
