use entity::enums::{PlanDuration, PlanType, Status};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequestDto {
    pub plan_type: PlanType,
    pub price: f64,
    pub description: String,
    pub duration: PlanDuration,
}

#[derive(Debug, Serialize)]
pub struct PlanDto {
    pub id: i32,
    pub plan_type: PlanType,
    pub price: f64,
    pub description: String,
    pub duration: PlanDuration,
    pub duration_months: u32,
    pub status: Status,
}

impl From<entity::membership_plan::Model> for PlanDto {
    fn from(plan: entity::membership_plan::Model) -> Self {
        Self {
            id: plan.id,
            plan_type: plan.plan_type,
            price: plan.price,
            description: plan.description,
            duration: plan.duration,
            duration_months: plan.duration.months(),
            status: plan.status,
        }
    }
}
