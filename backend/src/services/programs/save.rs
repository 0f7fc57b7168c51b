use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::program::Program;
use rusqlite::params;

use crate::activity::state::{ActivityHub, ActivityKind};
use crate::config::Config;
use crate::db;
use crate::services::admins::session;

pub async fn create(
    req: HttpRequest,
    payload: web::Json<Program>,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match insert_program(&cfg, &payload) {
        Ok(program) => {
            hub.record(
                ActivityKind::Generic,
                format!("Programme «{}» créé", program.nom),
            );
            HttpResponse::Ok().json(program)
        }
        Err(err) => {
            log::error!("failed to create program: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de l'enregistrement du programme")
        }
    }
}

pub async fn update(
    req: HttpRequest,
    id: web::Path<i64>,
    payload: web::Json<Program>,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match update_program(&cfg, *id, &payload) {
        Ok(true) => {
            hub.record(
                ActivityKind::Generic,
                format!("Programme «{}» mis à jour", payload.nom),
            );
            HttpResponse::Ok().json(payload.into_inner())
        }
        Ok(false) => HttpResponse::NotFound().body("Programme introuvable"),
        Err(err) => {
            log::error!("failed to update program: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de l'enregistrement du programme")
        }
    }
}

fn insert_program(cfg: &Config, payload: &Program) -> Result<Program, Box<dyn std::error::Error>> {
    if payload.nom.trim().is_empty() {
        return Err("le nom du programme ne peut pas être vide".into());
    }
    let conn = db::open(cfg)?;
    conn.execute(
        "INSERT INTO programs (nom, description, organisme, lien, criteres, published, hero)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            payload.nom,
            payload.description,
            payload.organisme,
            payload.lien,
            serde_json::to_string(&payload.criteres)?,
            payload.published as i64,
            payload
                .hero
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
        ],
    )?;
    let mut program = payload.clone();
    program.id = Some(conn.last_insert_rowid());
    Ok(program)
}

fn update_program(
    cfg: &Config,
    id: i64,
    payload: &Program,
) -> Result<bool, Box<dyn std::error::Error>> {
    let conn = db::open(cfg)?;
    let updated = conn.execute(
        "UPDATE programs SET nom = ?1, description = ?2, organisme = ?3, lien = ?4,
         criteres = ?5, published = ?6, hero = ?7 WHERE id = ?8",
        params![
            payload.nom,
            payload.description,
            payload.organisme,
            payload.lien,
            serde_json::to_string(&payload.criteres)?,
            payload.published as i64,
            payload
                .hero
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            id,
        ],
    )?;
    Ok(updated > 0)
}
