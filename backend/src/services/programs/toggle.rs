use actix_web::{web, HttpRequest, HttpResponse, Responder};
use rusqlite::params;

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

/// Flips the publish flag and returns the new value.
pub async fn process(req: HttpRequest, id: web::Path<i64>, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match toggle_published(&cfg, *id) {
        Ok(Some(published)) => HttpResponse::Ok().json(serde_json::json!({ "published": published })),
        Ok(None) => HttpResponse::NotFound().body("Programme introuvable"),
        Err(err) => {
            log::error!("failed to toggle program: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la mise à jour du programme")
        }
    }
}

fn toggle_published(cfg: &Config, id: i64) -> rusqlite::Result<Option<bool>> {
    let conn = db::open(cfg)?;
    let updated = conn.execute(
        "UPDATE programs SET published = 1 - published WHERE id = ?1",
        params![id],
    )?;
    if updated == 0 {
        return Ok(None);
    }
    let published: i64 = conn.query_row(
        "SELECT published FROM programs WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(Some(published != 0))
}
