use chrono::NaiveDate;
use entity::enums::{Shift, Status};
use serde::{Deserialize, Serialize};

/// Staff onboarding request. Creates the receptionist row and its
/// RECEPTIONIST credential account in one unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReceptionistDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub shift: Shift,
    pub date_of_joining: NaiveDate,
    pub salary: f64,
}

/// Partial update. The email stays fixed; it links the staff row to its
/// credential account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReceptionistDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub shift: Option<Shift>,
    pub date_of_joining: Option<NaiveDate>,
    pub salary: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ReceptionistDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub shift: Shift,
    pub date_of_joining: NaiveDate,
    pub salary: f64,
    pub status: Status,
}

impl From<entity::receptionist::Model> for ReceptionistDto {
    fn from(r: entity::receptionist::Model) -> Self {
        Self {
            id: r.id,
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
            phone: r.phone,
            shift: r.shift,
            date_of_joining: r.date_of_joining,
            salary: r.salary,
            status: r.status,
        }
    }
}
