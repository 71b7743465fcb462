//! Membership plan factory for creating test plan entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::enums::{PlanDuration, PlanType, Status};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test membership plans with customizable fields.
pub struct MembershipPlanFactory<'a> {
    db: &'a DatabaseConnection,
    plan_type: PlanType,
    price: f64,
    description: String,
    duration: PlanDuration,
    status: Status,
}

impl<'a> MembershipPlanFactory<'a> {
    /// Creates a new MembershipPlanFactory with default values.
    ///
    /// Defaults:
    /// - plan_type: `PlanType::Cardio`
    /// - price: `29.99`
    /// - description: `"Test plan {id}"` where id is auto-incremented
    /// - duration: `PlanDuration::OneMonth`
    /// - status: `Status::Active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            plan_type: PlanType::Cardio,
            price: 29.99,
            description: format!("Test plan {}", id),
            duration: PlanDuration::OneMonth,
            status: Status::Active,
        }
    }

    pub fn plan_type(mut self, plan_type: PlanType) -> Self {
        self.plan_type = plan_type;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn duration(mut self, duration: PlanDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the plan entity into the database.
    pub async fn build(self) -> Result<entity::membership_plan::Model, DbErr> {
        entity::membership_plan::ActiveModel {
            id: ActiveValue::NotSet,
            plan_type: ActiveValue::Set(self.plan_type),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            duration: ActiveValue::Set(self.duration),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a membership plan with default values.
pub async fn create_plan(
    db: &DatabaseConnection,
) -> Result<entity::membership_plan::Model, DbErr> {
    MembershipPlanFactory::new(db).build().await
}
