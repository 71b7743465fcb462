//! Active enums stored as short string columns.
//!
//! Values are persisted in SCREAMING_SNAKE_CASE to stay readable in the
//! database and stable across renames of the Rust variants.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// General account lifecycle used by members, users and plans.
///
/// Soft deletes set `Inactive`; rows are never physically removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

/// Membership subscription state.
///
/// `Cancelled` is sticky: it is only ever set by explicit business actions
/// (deactivation, soft delete) and must never be overwritten by the
/// date-derived recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    #[sea_orm(string_value = "HARDCORE")]
    Hardcore,
    #[sea_orm(string_value = "CARDIO")]
    Cardio,
    #[sea_orm(string_value = "PREMIUM_FEATURES")]
    PremiumFeatures,
}

/// Plan duration, the unit of membership end-date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanDuration {
    #[sea_orm(string_value = "ONE_MONTH")]
    OneMonth,
    #[sea_orm(string_value = "THREE_MONTHS")]
    ThreeMonths,
    #[sea_orm(string_value = "SIX_MONTHS")]
    SixMonths,
    #[sea_orm(string_value = "TWELVE_MONTHS")]
    TwelveMonths,
}

impl PlanDuration {
    pub fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "PRESENT")]
    Present,
    #[sea_orm(string_value = "LATE")]
    Late,
    #[sea_orm(string_value = "MISSED")]
    Missed,
    #[sea_orm(string_value = "EXCUSED")]
    Excused,
}

/// Actor type that recorded an attendance log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordedBy {
    #[sea_orm(string_value = "OWNER")]
    Owner,
    #[sea_orm(string_value = "RECEPTIONIST")]
    Receptionist,
    #[sea_orm(string_value = "SYSTEM")]
    System,
}

/// Working shift assigned to a receptionist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    #[sea_orm(string_value = "MORNING")]
    Morning,
    #[sea_orm(string_value = "EVENING")]
    Evening,
    #[sea_orm(string_value = "NIGHT")]
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "CASH")]
    Cash,
    #[sea_orm(string_value = "CARD")]
    Card,
    #[sea_orm(string_value = "BANK_TRANSFER")]
    BankTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "OWNER")]
    Owner,
    #[sea_orm(string_value = "RECEPTIONIST")]
    Receptionist,
    #[sea_orm(string_value = "MEMBER")]
    Member,
}

/// Notification audience. Only the owner feed exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Audience {
    #[sea_orm(string_value = "OWNER")]
    Owner,
}
