use crate::server::{
    error::AppError,
    model::attendance::{CheckInParams, CheckOutParams},
    service::attendance::AttendanceService,
};
use chrono::{Duration, Local};
use entity::enums::{AttendanceStatus, RecordedBy, Status};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod check_in;
mod check_out;

fn default_check_in(recorded_by: RecordedBy) -> CheckInParams {
    CheckInParams {
        check_in_time: None,
        status: None,
        recorded_by,
    }
}
