pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_designer_profiles_table;
mod m20250301_000003_create_redesign_requests_table;
mod m20250301_000004_create_dress_images_table;
mod m20250301_000005_create_quotations_table;
mod m20250301_000006_create_delivery_assignments_table;
mod m20250301_000007_create_designer_earnings_table;
mod m20250301_000008_create_messages_table;
mod m20250301_000009_create_portfolio_items_table;
mod m20250302_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_designer_profiles_table::Migration),
            Box::new(m20250301_000003_create_redesign_requests_table::Migration),
            Box::new(m20250301_000004_create_dress_images_table::Migration),
            Box::new(m20250301_000005_create_quotations_table::Migration),
            Box::new(m20250301_000006_create_delivery_assignments_table::Migration),
            Box::new(m20250301_000007_create_designer_earnings_table::Migration),
            Box::new(m20250301_000008_create_messages_table::Migration),
            Box::new(m20250301_000009_create_portfolio_items_table::Migration),
            Box::new(m20250302_000001_add_indexes::Migration),
        ]
    }
}
