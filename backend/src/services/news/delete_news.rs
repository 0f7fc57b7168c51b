use actix_web::{web, HttpRequest, HttpResponse, Responder};
use rusqlite::params;

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

pub async fn process(req: HttpRequest, id: web::Path<i64>, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match delete_article(&cfg, *id) {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => HttpResponse::NotFound().body("Actualité introuvable"),
        Err(err) => {
            log::error!("failed to delete article: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la suppression")
        }
    }
}

fn delete_article(cfg: &Config, id: i64) -> rusqlite::Result<bool> {
    let conn = db::open(cfg)?;
    let deleted = conn.execute("DELETE FROM news WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}
