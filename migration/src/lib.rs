pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_direct_ping_table;
mod m20240601_000002_create_random_ping_table;
mod m20240615_000003_create_global_settings_table;
mod m20240615_000004_create_random_gif_ping_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_direct_ping_table::Migration),
            Box::new(m20240601_000002_create_random_ping_table::Migration),
            Box::new(m20240615_000003_create_global_settings_table::Migration),
            Box::new(m20240615_000004_create_random_gif_ping_table::Migration),
        ]
    }
}
