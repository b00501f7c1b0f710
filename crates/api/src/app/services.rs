use std::sync::Arc;

use brewhall_infra::{
    CatalogService, Database, InventoryService, OrderService, TaxRateService, UserDirectoryService,
};

/// Default admin account seeded at startup.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@brewhall.dev";

/// All application services, wired over one shared store.
pub struct AppServices {
    pub catalog: CatalogService,
    pub inventory: InventoryService,
    pub orders: OrderService,
    pub tax: TaxRateService,
    pub users: UserDirectoryService,
}

/// Build services over a fresh in-memory store and run startup seeding:
/// the default tax rate and the admin account.
pub fn build_services() -> AppServices {
    let db = Arc::new(Database::new());

    let services = AppServices {
        catalog: CatalogService::new(db.clone()),
        inventory: InventoryService::new(db.clone()),
        orders: OrderService::new(db.clone()),
        tax: TaxRateService::new(db.clone()),
        users: UserDirectoryService::new(db),
    };

    // Seeding a fresh store cannot legitimately fail; treat failure as fatal.
    services
        .tax
        .ensure_default()
        .expect("failed to seed default tax rate");
    services
        .users
        .ensure_admin(ADMIN_USERNAME, ADMIN_EMAIL)
        .expect("failed to seed admin account");

    services
}
