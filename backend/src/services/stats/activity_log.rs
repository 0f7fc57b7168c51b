use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::activity::ActivityEntry;

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

const LOG_LIMIT: i64 = 50;

pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match recent_activity(&cfg) {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(err) => {
            log::error!("failed to load activity: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement de l'activité")
        }
    }
}

fn recent_activity(cfg: &Config) -> rusqlite::Result<Vec<ActivityEntry>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare(
        "SELECT id, kind, message, created_at FROM activity
         ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map([LOG_LIMIT], |row| {
        Ok(ActivityEntry {
            id: Some(row.get(0)?),
            activity_id: None,
            kind: row.get(1)?,
            message: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;
    Ok(rows.filter_map(Result::ok).collect())
}
