pub use sea_orm_migration::prelude::*;

mod m20241129_000001_create_products;
mod m20241129_000002_seed_products;

/// Catalog schema followed by the sample products
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241129_000001_create_products::Migration),
            Box::new(m20241129_000002_seed_products::Migration),
        ]
    }
}
