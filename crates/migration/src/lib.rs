pub use sea_orm_migration::prelude::*;

mod m20240612_090000_init;
mod m20240618_120000_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_090000_init::Migration),
            Box::new(m20240618_120000_favorites::Migration),
        ]
    }
}
