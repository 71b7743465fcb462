use crate::server::data::attendance_log::AttendanceLogRepository;
use chrono::{Duration, Local};
use entity::enums::{AttendanceStatus, RecordedBy};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_in_range;
mod find_open_session;
mod set_check_out;
