//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member with its plan and an active membership.
///
/// This is a convenience method that creates:
/// 1. MembershipPlan
/// 2. Member
/// 3. Membership linking the two, running from today for the plan duration
///
/// All entities use default values. Use the individual factories to
/// customize specific entities.
pub async fn create_member_with_membership(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::membership_plan::Model,
        entity::member::Model,
        entity::membership::Model,
    ),
    DbErr,
> {
    let plan = crate::factory::membership_plan::create_plan(db).await?;
    let member = crate::factory::member::create_member(db).await?;
    let membership = crate::factory::membership::create_membership(db, member.id, plan.id).await?;

    Ok((plan, member, membership))
}
