use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::program::ProgramHero;
use rusqlite::params;

use crate::activity::state::{ActivityHub, ActivityKind};
use crate::config::Config;
use crate::db;
use crate::services::admins::session;

/// Replaces a program's homepage marketing copy (both languages plus
/// the featured flag).
pub async fn process(
    req: HttpRequest,
    id: web::Path<i64>,
    payload: web::Json<ProgramHero>,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match set_hero(&cfg, *id, &payload) {
        Ok(true) => {
            hub.record(
                ActivityKind::Generic,
                format!("Mise en avant du programme #{id} modifiée"),
            );
            HttpResponse::Ok().json(payload.into_inner())
        }
        Ok(false) => HttpResponse::NotFound().body("Programme introuvable"),
        Err(err) => {
            log::error!("failed to update hero: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la mise à jour du programme")
        }
    }
}

fn set_hero(cfg: &Config, id: i64, hero: &ProgramHero) -> Result<bool, Box<dyn std::error::Error>> {
    let conn = db::open(cfg)?;
    let updated = conn.execute(
        "UPDATE programs SET hero = ?1 WHERE id = ?2",
        params![serde_json::to_string(hero)?, id],
    )?;
    Ok(updated > 0)
}
