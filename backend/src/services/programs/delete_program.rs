use actix_web::{web, HttpRequest, HttpResponse, Responder};
use rusqlite::params;

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

pub async fn process(req: HttpRequest, id: web::Path<i64>, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match delete_program(&cfg, *id) {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => HttpResponse::NotFound().body("Programme introuvable"),
        Err(err) => {
            log::error!("failed to delete program: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la suppression du programme")
        }
    }
}

fn delete_program(cfg: &Config, id: i64) -> rusqlite::Result<bool> {
    let conn = db::open(cfg)?;
    let deleted = conn.execute("DELETE FROM programs WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}
