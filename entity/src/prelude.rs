pub use super::attendance_log::Entity as AttendanceLog;
pub use super::fitness_profile::Entity as FitnessProfile;
pub use super::member::Entity as Member;
pub use super::membership::Entity as Membership;
pub use super::membership_plan::Entity as MembershipPlan;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::receptionist::Entity as Receptionist;
pub use super::user::Entity as User;
