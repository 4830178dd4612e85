pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_driver_table;
mod m20261001_000002_create_service_catalog_tables;
mod m20261001_000003_create_order_table;
mod m20261001_000004_create_work_shift_table;
mod m20261001_000005_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_driver_table::Migration),
            Box::new(m20261001_000002_create_service_catalog_tables::Migration),
            Box::new(m20261001_000003_create_order_table::Migration),
            Box::new(m20261001_000004_create_work_shift_table::Migration),
            Box::new(m20261001_000005_create_payment_table::Migration),
        ]
    }
}
