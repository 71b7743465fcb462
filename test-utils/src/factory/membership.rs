//! Membership factory for creating test membership entities.

use chrono::{Local, Months, NaiveDate, Utc};
use entity::enums::MembershipStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test memberships with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::membership::MembershipFactory;
///
/// let membership = MembershipFactory::new(&db, member.id, plan.id)
///     .start_date(start)
///     .end_date(end)
///     .status(MembershipStatus::Expired)
///     .build()
///     .await?;
/// ```
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    plan_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    auto_renew: bool,
    status: MembershipStatus,
    renewal_date: Option<NaiveDate>,
}

impl<'a> MembershipFactory<'a> {
    /// Creates a new MembershipFactory with default values.
    ///
    /// Defaults:
    /// - start_date: today (local)
    /// - end_date: one month from today
    /// - auto_renew: `false`
    /// - status: `MembershipStatus::Active`
    /// - renewal_date: mirrors end_date
    pub fn new(db: &'a DatabaseConnection, member_id: i32, plan_id: i32) -> Self {
        let today = Local::now().date_naive();
        let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
        Self {
            db,
            member_id,
            plan_id,
            start_date: today,
            end_date: end,
            auto_renew: false,
            status: MembershipStatus::Active,
            renewal_date: None,
        }
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn auto_renew(mut self, auto_renew: bool) -> Self {
        self.auto_renew = auto_renew;
        self
    }

    pub fn status(mut self, status: MembershipStatus) -> Self {
        self.status = status;
        self
    }

    pub fn renewal_date(mut self, renewal_date: NaiveDate) -> Self {
        self.renewal_date = Some(renewal_date);
        self
    }

    /// Builds and inserts the membership entity into the database.
    pub async fn build(self) -> Result<entity::membership::Model, DbErr> {
        entity::membership::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            plan_id: ActiveValue::Set(self.plan_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            auto_renew: ActiveValue::Set(self.auto_renew),
            status: ActiveValue::Set(self.status),
            renewal_date: ActiveValue::Set(self.renewal_date.unwrap_or(self.end_date)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a membership with default values for the given member and plan.
pub async fn create_membership(
    db: &DatabaseConnection,
    member_id: i32,
    plan_id: i32,
) -> Result<entity::membership::Model, DbErr> {
    MembershipFactory::new(db, member_id, plan_id).build().await
}
