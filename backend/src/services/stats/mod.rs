//! Dashboard aggregates and the recent-activity log.
//!
//! - `GET /stats/admin`: counts feeding the dashboard tiles.
//! - `GET /admin/activity`: the most recent activity entries, the REST
//!   side of the live feed (entries carry `id`; pushed ones carry
//!   `activityId`).

use actix_web::web::{get, scope};
use actix_web::Scope;

mod activity_log;
mod overview;

pub fn configure_routes() -> Scope {
    scope("/stats").route("/admin", get().to(overview::process))
}

pub fn configure_activity_routes() -> Scope {
    scope("/admin/activity").route("", get().to(activity_log::process))
}
