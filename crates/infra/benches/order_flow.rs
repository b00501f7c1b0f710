use std::collections::BTreeMap;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use brewhall_auth::Role;
use brewhall_infra::{
    CatalogService, Database, InventoryService, OrderService, TaxRateService, UserDirectoryService,
};

fn setup() -> OrderService {
    let db = Arc::new(Database::new());
    let catalog = CatalogService::new(db.clone());
    let inventory = InventoryService::new(db.clone());
    let tax = TaxRateService::new(db.clone());
    let users = UserDirectoryService::new(db.clone());

    tax.ensure_default().unwrap();
    users
        .create_user("Ada", "ada", "ada@example.com", vec![Role::customer()])
        .unwrap();
    catalog.add_item("Coffee", "House roast", 3.0).unwrap();
    catalog.add_item("Milk", "Whole", 1.5).unwrap();

    let view = inventory.get().unwrap();
    let mut contents = BTreeMap::new();
    contents.insert("Coffee".to_string(), u32::MAX);
    contents.insert("Milk".to_string(), u32::MAX);
    inventory.update(view.id, contents).unwrap();

    OrderService::new(db)
}

fn bench_place_order(c: &mut Criterion) {
    let orders = setup();
    let mut items = BTreeMap::new();
    items.insert("Coffee".to_string(), 2u32);
    items.insert("Milk".to_string(), 3u32);

    c.bench_function("place_order", |b| {
        b.iter(|| orders.place_order("ada", items.clone(), None).unwrap())
    });
}

fn bench_place_then_cancel(c: &mut Criterion) {
    let orders = setup();
    let mut items = BTreeMap::new();
    items.insert("Coffee".to_string(), 1u32);

    c.bench_function("place_then_cancel", |b| {
        b.iter(|| {
            let order = orders.place_order("ada", items.clone(), None).unwrap();
            orders.cancel_order(order.id()).unwrap()
        })
    });
}

criterion_group!(benches, bench_place_order, bench_place_then_cancel);
criterion_main!(benches);
