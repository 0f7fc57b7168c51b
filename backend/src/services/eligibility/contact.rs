use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use crate::activity::state::{ActivityHub, ActivityKind};
use crate::config::Config;
use crate::db;

pub async fn process(
    id: web::Path<i64>,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    match mark_wants_contact(&cfg, *id) {
        Ok(true) => {
            hub.record(
                ActivityKind::Generic,
                format!("Demande de contact pour le test #{id}"),
            );
            HttpResponse::Ok().finish()
        }
        Ok(false) => HttpResponse::NotFound().body("Test introuvable"),
        Err(err) => {
            log::error!("failed to flag contact request: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la mise à jour du test")
        }
    }
}

fn mark_wants_contact(cfg: &Config, id: i64) -> rusqlite::Result<bool> {
    let conn = db::open(cfg)?;
    let updated = conn.execute(
        "UPDATE tests SET wants_contact = 1 WHERE id = ?1",
        params![id],
    )?;
    Ok(updated > 0)
}
