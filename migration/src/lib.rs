pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_member_table;
mod m20260801_000003_create_membership_plan_table;
mod m20260801_000004_create_membership_table;
mod m20260801_000005_create_fitness_profile_table;
mod m20260801_000006_create_payment_table;
mod m20260801_000007_create_attendance_log_table;
mod m20260801_000008_create_notification_table;
mod m20260801_000009_create_receptionist_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_member_table::Migration),
            Box::new(m20260801_000003_create_membership_plan_table::Migration),
            Box::new(m20260801_000004_create_membership_table::Migration),
            Box::new(m20260801_000005_create_fitness_profile_table::Migration),
            Box::new(m20260801_000006_create_payment_table::Migration),
            Box::new(m20260801_000007_create_attendance_log_table::Migration),
            Box::new(m20260801_000008_create_notification_table::Migration),
            Box::new(m20260801_000009_create_receptionist_table::Migration),
        ]
    }
}
