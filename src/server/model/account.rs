use entity::enums::{Status, UserRole};

pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub status: Status,
}
