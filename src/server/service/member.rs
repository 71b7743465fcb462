use chrono::Local;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::member::{
        CreateMemberDto, MemberDto, PaymentDto, RecordPaymentDto, RenewMembershipDto,
        UpdateMemberDto,
    },
    server::{
        data::{
            fitness_profile::FitnessProfileRepository, member::MemberRepository,
            membership::MembershipRepository, membership_plan::MembershipPlanRepository,
            payment::PaymentRepository,
        },
        error::AppError,
        model::{
            account::NewAccount,
            member::{
                FitnessProfileUpdate, MemberUpdate, MembershipUpdate, NewFitnessProfile,
                NewMember, NewMembership, NewPayment,
            },
        },
        service::{account::AccountService, membership_status},
    },
};
use entity::enums::{MembershipStatus, Status, UserRole};

/// Coordinates the member aggregate: the member row plus its membership,
/// fitness profile, payments and credential account. Every multi-row write
/// runs inside one transaction so a mid-sequence failure rolls back the
/// whole unit.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Onboards a new member.
    ///
    /// Creates the credential account, the member row, the membership (end
    /// date from the plan's duration, renewal date mirroring it), the
    /// fitness profile and the initial payment as one atomic unit.
    pub async fn create_member(&self, dto: CreateMemberDto) -> Result<MemberDto, AppError> {
        let txn = self.db.begin().await?;

        let member_repo = MemberRepository::new(&txn);
        if member_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "Member with email {} already exists",
                dto.email
            )));
        }

        let plan = MembershipPlanRepository::new(&txn)
            .find_active_by_id(dto.membership_plan_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Membership plan with id {} not found",
                    dto.membership_plan_id
                ))
            })?;

        AccountService::new(&txn)
            .create_account(NewAccount {
                email: dto.email.clone(),
                password: dto.password,
                role: UserRole::Member,
                status: Status::Active,
            })
            .await?;

        let member = member_repo
            .insert(NewMember {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                phone: dto.phone,
            })
            .await?;

        let today = Local::now().date_naive();
        let end_date = membership_status::plan_end_date(dto.start_date, plan.duration)
            .ok_or_else(|| AppError::BadRequest("Start date out of range".to_string()))?;
        let status =
            membership_status::derive_status(MembershipStatus::Active, dto.start_date, end_date, today);

        let membership = MembershipRepository::new(&txn)
            .insert(NewMembership {
                member_id: member.id,
                plan_id: plan.id,
                start_date: dto.start_date,
                end_date,
                auto_renew: dto.auto_renew,
                status,
                renewal_date: end_date,
            })
            .await?;

        let profile = FitnessProfileRepository::new(&txn)
            .insert(NewFitnessProfile {
                member_id: member.id,
                height: dto.height,
                weight: dto.weight,
                medical_conditions: dto.medical_conditions,
                injuries: dto.injuries,
                allergies: dto.allergies,
            })
            .await?;

        PaymentRepository::new(&txn)
            .insert(NewPayment {
                member_id: member.id,
                amount_paid: dto.amount_paid,
                payment_date: today,
                payment_method: dto.payment_method,
            })
            .await?;

        txn.commit().await?;

        Ok(assemble_dto(member, Some(membership), Some(profile)))
    }

    pub async fn get_member(&self, id: i32) -> Result<MemberDto, AppError> {
        let member = MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;
        self.load_aggregate(self.db, member).await
    }

    /// All members not soft-deleted, each with membership and profile.
    pub async fn list_members(&self) -> Result<Vec<MemberDto>, AppError> {
        let members = MemberRepository::new(self.db).find_all_active().await?;
        let mut dtos = Vec::with_capacity(members.len());
        for member in members {
            dtos.push(self.load_aggregate(self.db, member).await?);
        }
        Ok(dtos)
    }

    /// Partial update across the aggregate.
    ///
    /// A plan or start-date change recomputes the membership window with
    /// whichever plan is effective after the update, then re-derives the
    /// status from the new dates.
    pub async fn update_member(&self, id: i32, dto: UpdateMemberDto) -> Result<MemberDto, AppError> {
        let txn = self.db.begin().await?;

        let member_repo = MemberRepository::new(&txn);
        let member = member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        if let Some(email) = &dto.email {
            if let Some(other) = member_repo.find_by_email(email).await? {
                if other.id != member.id {
                    return Err(AppError::Duplicate(format!(
                        "Member with email {} already exists",
                        email
                    )));
                }
            }
        }

        let member = member_repo
            .update(
                member,
                MemberUpdate {
                    email: dto.email,
                    first_name: dto.first_name,
                    last_name: dto.last_name,
                    phone: dto.phone,
                },
            )
            .await?;

        let membership_repo = MembershipRepository::new(&txn);
        let mut membership = membership_repo.find_by_member_id(member.id).await?;

        if let Some(current) = membership.take() {
            let dates_change = dto.membership_plan_id.is_some() || dto.start_date.is_some();
            let mut update = MembershipUpdate {
                plan_id: dto.membership_plan_id,
                start_date: dto.start_date,
                auto_renew: dto.auto_renew,
                ..Default::default()
            };

            if dates_change {
                // A newly requested plan must still be on offer; the current
                // plan stays effective even after it was retired.
                let plan_repo = MembershipPlanRepository::new(&txn);
                let plan = match dto.membership_plan_id {
                    Some(plan_id) => plan_repo.find_active_by_id(plan_id).await?.ok_or_else(|| {
                        AppError::NotFound(format!("Membership plan with id {} not found", plan_id))
                    })?,
                    None => plan_repo.find_by_id(current.plan_id).await?.ok_or_else(|| {
                        AppError::NotFound(format!(
                            "Membership plan with id {} not found",
                            current.plan_id
                        ))
                    })?,
                };

                let start_date = dto.start_date.unwrap_or(current.start_date);
                let end_date = membership_status::plan_end_date(start_date, plan.duration)
                    .ok_or_else(|| {
                        AppError::BadRequest("Start date out of range".to_string())
                    })?;
                let today = Local::now().date_naive();
                update.end_date = Some(end_date);
                update.renewal_date = Some(end_date);
                update.status = Some(membership_status::derive_status(
                    current.status,
                    start_date,
                    end_date,
                    today,
                ));
            }

            membership = Some(membership_repo.update(current, update).await?);
        }

        let profile_repo = FitnessProfileRepository::new(&txn);
        let mut profile = profile_repo.find_by_member_id(member.id).await?;
        let profile_changes = dto.height.is_some()
            || dto.weight.is_some()
            || dto.medical_conditions.is_some()
            || dto.injuries.is_some()
            || dto.allergies.is_some();
        if profile_changes {
            if let Some(current) = profile.take() {
                profile = Some(
                    profile_repo
                        .update(
                            current,
                            FitnessProfileUpdate {
                                height: dto.height,
                                weight: dto.weight,
                                medical_conditions: dto.medical_conditions,
                                injuries: dto.injuries,
                                allergies: dto.allergies,
                            },
                        )
                        .await?,
                );
            }
        }

        txn.commit().await?;

        Ok(assemble_dto(member, membership, profile))
    }

    /// Soft delete: member goes INACTIVE, the membership is force-cancelled
    /// and the credential account is deactivated. The rows stay in place.
    pub async fn delete_member(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let member_repo = MemberRepository::new(&txn);
        let member = member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        let email = member.email.clone();
        member_repo.set_status(member, Status::Inactive).await?;

        let membership_repo = MembershipRepository::new(&txn);
        if let Some(membership) = membership_repo.find_by_member_id(id).await? {
            membership_repo
                .set_status(membership, MembershipStatus::Cancelled)
                .await?;
        }

        AccountService::new(&txn).deactivate_by_email(&email).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Business override: forces the member ACTIVE and cascade-forces the
    /// membership ACTIVE regardless of its dates. The nightly sweep will
    /// re-derive it next run.
    pub async fn activate_member(&self, id: i32) -> Result<MemberDto, AppError> {
        self.force_status(id, Status::Active, MembershipStatus::Active)
            .await
    }

    /// Business override: forces the member INACTIVE and cascade-forces the
    /// membership CANCELLED. CANCELLED is sticky, so the nightly sweep will
    /// not resurrect it.
    pub async fn deactivate_member(&self, id: i32) -> Result<MemberDto, AppError> {
        self.force_status(id, Status::Inactive, MembershipStatus::Cancelled)
            .await
    }

    async fn force_status(
        &self,
        id: i32,
        member_status: Status,
        membership_status: MembershipStatus,
    ) -> Result<MemberDto, AppError> {
        let txn = self.db.begin().await?;

        let member_repo = MemberRepository::new(&txn);
        let member = member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;
        let member = member_repo.set_status(member, member_status).await?;

        let membership_repo = MembershipRepository::new(&txn);
        let mut membership = membership_repo.find_by_member_id(id).await?;
        if let Some(current) = membership.take() {
            membership = Some(
                membership_repo
                    .set_status(current, membership_status)
                    .await?,
            );
        }

        let profile = FitnessProfileRepository::new(&txn)
            .find_by_member_id(id)
            .await?;

        txn.commit().await?;
        Ok(assemble_dto(member, membership, profile))
    }

    /// Renewal always wins: a new window is computed from the requested
    /// start date and the current plan, and both the member and the
    /// membership are forced ACTIVE over any prior EXPIRED or CANCELLED
    /// state.
    pub async fn renew_membership(
        &self,
        id: i32,
        dto: RenewMembershipDto,
    ) -> Result<MemberDto, AppError> {
        let txn = self.db.begin().await?;

        let member_repo = MemberRepository::new(&txn);
        let member = member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        let membership_repo = MembershipRepository::new(&txn);
        let membership = membership_repo
            .find_by_member_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No membership found for member {}", id))
            })?;

        let plan = MembershipPlanRepository::new(&txn)
            .find_by_id(membership.plan_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Membership plan with id {} not found",
                    membership.plan_id
                ))
            })?;

        let end_date = membership_status::plan_end_date(dto.start_date, plan.duration)
            .ok_or_else(|| AppError::BadRequest("Start date out of range".to_string()))?;

        let membership = membership_repo
            .update(
                membership,
                MembershipUpdate {
                    start_date: Some(dto.start_date),
                    end_date: Some(end_date),
                    renewal_date: Some(end_date),
                    status: Some(MembershipStatus::Active),
                    ..Default::default()
                },
            )
            .await?;

        let member = member_repo.set_status(member, Status::Active).await?;

        let profile = FitnessProfileRepository::new(&txn)
            .find_by_member_id(id)
            .await?;

        txn.commit().await?;
        Ok(assemble_dto(member, Some(membership), profile))
    }

    /// Records a desk payment for an existing member. The payment date
    /// defaults to today when the request omits it.
    pub async fn record_payment(
        &self,
        id: i32,
        dto: RecordPaymentDto,
    ) -> Result<PaymentDto, AppError> {
        if dto.amount_paid <= 0.0 {
            return Err(AppError::BadRequest(
                "Amount paid must be positive".to_string(),
            ));
        }

        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        let payment = PaymentRepository::new(self.db)
            .insert(NewPayment {
                member_id: id,
                amount_paid: dto.amount_paid,
                payment_date: dto.payment_date.unwrap_or_else(|| Local::now().date_naive()),
                payment_method: dto.payment_method,
            })
            .await?;
        Ok(PaymentDto::from(payment))
    }

    /// Payment history, newest first.
    pub async fn list_payments(&self, id: i32) -> Result<Vec<PaymentDto>, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        let payments = PaymentRepository::new(self.db).find_by_member(id).await?;
        Ok(payments.into_iter().map(PaymentDto::from).collect())
    }

    /// Payment history restricted to an inclusive date window.
    pub async fn list_payments_between(
        &self,
        id: i32,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Vec<PaymentDto>, AppError> {
        if end < start {
            return Err(AppError::InvalidTimeRange(
                "Range end cannot be before range start".to_string(),
            ));
        }

        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        let payments = PaymentRepository::new(self.db)
            .find_by_member_between(id, start, end)
            .await?;
        Ok(payments.into_iter().map(PaymentDto::from).collect())
    }

    async fn load_aggregate<C: ConnectionTrait>(
        &self,
        db: &C,
        member: entity::member::Model,
    ) -> Result<MemberDto, AppError> {
        let membership = MembershipRepository::new(db)
            .find_by_member_id(member.id)
            .await?;
        let profile = FitnessProfileRepository::new(db)
            .find_by_member_id(member.id)
            .await?;
        Ok(assemble_dto(member, membership, profile))
    }
}

fn assemble_dto(
    member: entity::member::Model,
    membership: Option<entity::membership::Model>,
    profile: Option<entity::fitness_profile::Model>,
) -> MemberDto {
    MemberDto {
        id: member.id,
        email: member.email,
        first_name: member.first_name,
        last_name: member.last_name,
        phone: member.phone,
        status: member.status,
        membership: membership.map(Into::into),
        fitness_profile: profile.map(Into::into),
    }
}
