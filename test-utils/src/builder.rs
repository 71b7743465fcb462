use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables with `with_table()` or the
/// convenience methods, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Member, MembershipPlan};
///
/// let test = TestBuilder::new()
///     .with_table(MembershipPlan)
///     .with_table(Member)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in the
    /// order they were added. Tables with foreign keys should be added
    /// after their referenced tables.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for member lifecycle operations.
    ///
    /// This convenience method adds, in dependency order: User,
    /// MembershipPlan, Member, Membership, FitnessProfile, Payment.
    pub fn with_member_tables(self) -> Self {
        self.with_table(User)
            .with_table(MembershipPlan)
            .with_table(Member)
            .with_table(Membership)
            .with_table(FitnessProfile)
            .with_table(Payment)
    }

    /// Adds the tables required for staff management: User and
    /// Receptionist.
    pub fn with_staff_tables(self) -> Self {
        self.with_table(User).with_table(Receptionist)
    }

    /// Adds all tables required for attendance operations.
    ///
    /// Equivalent to `with_member_tables()` plus AttendanceLog and
    /// Notification (check-in emits an owner notification).
    pub fn with_attendance_tables(self) -> Self {
        self.with_member_tables()
            .with_table(AttendanceLog)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database connected and tables created
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
