use chrono::NaiveDate;
use entity::enums::Shift;

pub struct NewReceptionist {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub shift: Shift,
    pub date_of_joining: NaiveDate,
    pub salary: f64,
}

/// Partial update of a receptionist row. `None` leaves a field untouched.
/// The email is the link to the credential account and never changes here.
#[derive(Default)]
pub struct ReceptionistUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub shift: Option<Shift>,
    pub date_of_joining: Option<NaiveDate>,
    pub salary: Option<f64>,
}
