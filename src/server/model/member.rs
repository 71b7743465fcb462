use chrono::NaiveDate;
use entity::enums::{MembershipStatus, PaymentMethod};

pub struct NewMember {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

pub struct NewMembership {
    pub member_id: i32,
    pub plan_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub auto_renew: bool,
    pub status: MembershipStatus,
    pub renewal_date: NaiveDate,
}

pub struct NewFitnessProfile {
    pub member_id: i32,
    pub height: f64,
    pub weight: f64,
    pub medical_conditions: Option<String>,
    pub injuries: Option<String>,
    pub allergies: Option<String>,
}

pub struct NewPayment {
    pub member_id: i32,
    pub amount_paid: f64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
}

/// Partial update of the core member row. `None` leaves a field untouched.
#[derive(Default)]
pub struct MemberUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Partial update of a membership row. `None` leaves a field untouched.
#[derive(Default)]
pub struct MembershipUpdate {
    pub plan_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub renewal_date: Option<NaiveDate>,
    pub auto_renew: Option<bool>,
    pub status: Option<MembershipStatus>,
}

/// Partial update of a fitness profile. `None` leaves a field untouched.
#[derive(Default)]
pub struct FitnessProfileUpdate {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medical_conditions: Option<String>,
    pub injuries: Option<String>,
    pub allergies: Option<String>,
}
