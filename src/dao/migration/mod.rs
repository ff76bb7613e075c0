//! Schema migrations applied at startup by the storage supervisor.

pub use sea_orm_migration::prelude::*;

mod m20240608_000001_create_catalog_tables;
mod m20240608_000002_create_party_tables;
mod m20240608_000003_create_recompense_tables;

/// Aggregates every migration of the schema in order.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240608_000001_create_catalog_tables::Migration),
            Box::new(m20240608_000002_create_party_tables::Migration),
            Box::new(m20240608_000003_create_recompense_tables::Migration),
        ]
    }
}
