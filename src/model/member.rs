use chrono::NaiveDate;
use entity::enums::{MembershipStatus, PaymentMethod, Status};
use serde::{Deserialize, Serialize};

/// Signup request. Creates the credential account, the member row, the
/// membership, the fitness profile and the initial payment in one unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub membership_plan_id: i32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub auto_renew: bool,
    pub height: f64,
    pub weight: f64,
    pub medical_conditions: Option<String>,
    pub injuries: Option<String>,
    pub allergies: Option<String>,
    pub amount_paid: f64,
    pub payment_method: PaymentMethod,
}

/// Partial update. Only fields present in the request body are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMemberDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub membership_plan_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub auto_renew: Option<bool>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medical_conditions: Option<String>,
    pub injuries: Option<String>,
    pub allergies: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenewMembershipDto {
    pub start_date: NaiveDate,
}

/// Records a payment taken at the desk after signup. The date defaults to
/// today when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentDto {
    pub amount_paid: f64,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: PaymentMethod,
}

/// Inclusive payment-date window for history queries.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct MembershipDto {
    pub plan_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub auto_renew: bool,
    pub status: MembershipStatus,
    pub renewal_date: NaiveDate,
}

impl From<entity::membership::Model> for MembershipDto {
    fn from(m: entity::membership::Model) -> Self {
        Self {
            plan_id: m.plan_id,
            start_date: m.start_date,
            end_date: m.end_date,
            auto_renew: m.auto_renew,
            status: m.status,
            renewal_date: m.renewal_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FitnessProfileDto {
    pub height: f64,
    pub weight: f64,
    pub medical_conditions: Option<String>,
    pub injuries: Option<String>,
    pub allergies: Option<String>,
}

impl From<entity::fitness_profile::Model> for FitnessProfileDto {
    fn from(p: entity::fitness_profile::Model) -> Self {
        Self {
            height: p.height,
            weight: p.weight,
            medical_conditions: p.medical_conditions,
            injuries: p.injuries,
            allergies: p.allergies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub status: Status,
    pub membership: Option<MembershipDto>,
    pub fitness_profile: Option<FitnessProfileDto>,
}

#[derive(Debug, Serialize)]
pub struct PaymentDto {
    pub id: i32,
    pub amount_paid: f64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl From<entity::payment::Model> for PaymentDto {
    fn from(p: entity::payment::Model) -> Self {
        Self {
            id: p.id,
            amount_paid: p.amount_paid,
            payment_date: p.payment_date,
            payment_method: p.payment_method,
        }
    }
}
