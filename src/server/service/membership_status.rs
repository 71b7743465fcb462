//! Date-driven membership status derivation.
//!
//! Every write path that touches membership dates calls [`derive_status`]
//! explicitly before persisting, and the daily sync job runs the same
//! function over the whole table. There are no persistence-layer hooks;
//! a status is only as fresh as the last explicit call.

use chrono::{Months, NaiveDate};

use entity::enums::{MembershipStatus, PlanDuration};

/// Derives the status a membership should carry on `today`.
///
/// CANCELLED is sticky: once set it survives every derivation until an
/// explicit reactivation (renewal or activate) overwrites it. Otherwise
/// the window is inclusive on both ends: a membership is PENDING before
/// its start date, EXPIRED after its end date, and ACTIVE on every day
/// in between including the boundary days themselves.
pub fn derive_status(
    current: MembershipStatus,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> MembershipStatus {
    if current == MembershipStatus::Cancelled {
        return MembershipStatus::Cancelled;
    }
    if start_date > today {
        MembershipStatus::Pending
    } else if end_date < today {
        MembershipStatus::Expired
    } else {
        MembershipStatus::Active
    }
}

/// End date for a membership starting on `start_date` under `duration`.
///
/// Calendar-month arithmetic, so 2025-01-31 + ONE_MONTH clamps to
/// 2025-02-28. `None` only on date overflow, far outside any realistic
/// membership range.
pub fn plan_end_date(start_date: NaiveDate, duration: PlanDuration) -> Option<NaiveDate> {
    start_date.checked_add_months(Months::new(duration.months()))
}
