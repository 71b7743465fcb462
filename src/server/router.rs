use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{attendance, jobs, member, notification, plan, receptionist},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/members",
            get(member::list_members).post(member::create_member),
        )
        .route(
            "/api/v1/members/{id}",
            get(member::get_member)
                .patch(member::update_member)
                .delete(member::delete_member),
        )
        .route("/api/v1/members/{id}/activate", post(member::activate_member))
        .route(
            "/api/v1/members/{id}/deactivate",
            post(member::deactivate_member),
        )
        .route("/api/v1/members/{id}/renew", post(member::renew_membership))
        .route(
            "/api/v1/members/{id}/payments",
            get(member::list_payments).post(member::record_payment),
        )
        .route(
            "/api/v1/members/{id}/payments/range",
            get(member::list_payments_in_range),
        )
        .route(
            "/api/v1/members/{id}/attendance",
            get(attendance::list_for_member),
        )
        .route(
            "/api/v1/members/{id}/attendance/check-in",
            post(attendance::check_in),
        )
        .route(
            "/api/v1/members/{id}/attendance/check-out",
            post(attendance::check_out),
        )
        .route(
            "/api/v1/attendance/status/{status}",
            get(attendance::list_by_status),
        )
        .route("/api/v1/attendance/range", get(attendance::list_in_range))
        .route("/api/v1/attendance/today", get(attendance::list_today))
        .route("/api/v1/plans", get(plan::list_plans).post(plan::create_plan))
        .route(
            "/api/v1/plans/{id}",
            get(plan::get_plan).put(plan::update_plan).delete(plan::delete_plan),
        )
        .route(
            "/api/v1/receptionists",
            get(receptionist::list_receptionists).post(receptionist::create_receptionist),
        )
        .route(
            "/api/v1/receptionists/{id}",
            get(receptionist::get_receptionist)
                .patch(receptionist::update_receptionist)
                .delete(receptionist::delete_receptionist),
        )
        .route(
            "/api/v1/receptionists/{id}/activate",
            post(receptionist::activate_receptionist),
        )
        .route(
            "/api/v1/receptionists/{id}/deactivate",
            post(receptionist::deactivate_receptionist),
        )
        .route(
            "/api/v1/notifications/unread",
            get(notification::list_unread),
        )
        .route(
            "/api/v1/notifications/{id}/read",
            post(notification::mark_as_read),
        )
        .route(
            "/api/v1/jobs/membership-status/sync",
            post(jobs::trigger_status_sync),
        )
}
