use sea_orm::DatabaseConnection;

use crate::{
    model::plan::{PlanDto, PlanRequestDto},
    server::{data::membership_plan::MembershipPlanRepository, error::AppError},
};
use entity::enums::Status;

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_plan(&self, dto: PlanRequestDto) -> Result<PlanDto, AppError> {
        let plan = MembershipPlanRepository::new(self.db).insert(dto).await?;
        Ok(PlanDto::from(plan))
    }

    pub async fn get_plan(&self, id: i32) -> Result<PlanDto, AppError> {
        let plan = MembershipPlanRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Membership plan with id {} not found", id))
            })?;
        Ok(PlanDto::from(plan))
    }

    pub async fn list_plans(&self) -> Result<Vec<PlanDto>, AppError> {
        let plans = MembershipPlanRepository::new(self.db)
            .find_all_active()
            .await?;
        Ok(plans.into_iter().map(PlanDto::from).collect())
    }

    pub async fn update_plan(&self, id: i32, dto: PlanRequestDto) -> Result<PlanDto, AppError> {
        let repo = MembershipPlanRepository::new(self.db);
        let plan = repo.find_active_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Membership plan with id {} not found", id))
        })?;
        let plan = repo.update(plan, dto).await?;
        Ok(PlanDto::from(plan))
    }

    /// Soft delete. Existing memberships keep their plan reference; the
    /// plan just stops being offered to new signups.
    pub async fn delete_plan(&self, id: i32) -> Result<(), AppError> {
        let repo = MembershipPlanRepository::new(self.db);
        let plan = repo.find_active_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Membership plan with id {} not found", id))
        })?;
        repo.set_status(plan, Status::Inactive).await?;
        Ok(())
    }
}
