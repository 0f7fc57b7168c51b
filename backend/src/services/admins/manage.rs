use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::admin::{AdminAccount, AdminRole};
use rusqlite::params;

use crate::config::Config;
use crate::db;

use super::session;

fn require_super(req: &HttpRequest, cfg: &Config) -> Result<AdminAccount, HttpResponse> {
    match session::current_admin(req, cfg) {
        Some(account) if account.role == AdminRole::Super => Ok(account),
        Some(_) => Err(HttpResponse::Forbidden().body("Réservé au super administrateur")),
        None => Err(HttpResponse::Unauthorized().body("Session requise")),
    }
}

pub async fn update(
    req: HttpRequest,
    id: web::Path<i64>,
    payload: web::Json<AdminAccount>,
    cfg: web::Data<Config>,
) -> impl Responder {
    if let Err(response) = require_super(&req, &cfg) {
        return response;
    }
    match update_account(&cfg, *id, &payload) {
        Ok(true) => HttpResponse::Ok().json(payload.into_inner()),
        Ok(false) => HttpResponse::NotFound().body("Compte introuvable"),
        Err(err) => {
            log::error!("failed to update admin: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la mise à jour du compte")
        }
    }
}

pub async fn delete(req: HttpRequest, id: web::Path<i64>, cfg: web::Data<Config>) -> impl Responder {
    let me = match require_super(&req, &cfg) {
        Ok(account) => account,
        Err(response) => return response,
    };
    if me.id == Some(*id) {
        return HttpResponse::BadRequest().body("Impossible de supprimer son propre compte");
    }
    match delete_account(&cfg, *id) {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => HttpResponse::NotFound().body("Compte introuvable"),
        Err(err) => {
            log::error!("failed to delete admin: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la suppression du compte")
        }
    }
}

fn update_account(cfg: &Config, id: i64, account: &AdminAccount) -> rusqlite::Result<bool> {
    let conn = db::open(cfg)?;
    let updated = conn.execute(
        "UPDATE admins SET nom = ?1, email = ?2, role = ?3 WHERE id = ?4",
        params![
            account.nom,
            account.email,
            session::role_tag(account.role),
            id
        ],
    )?;
    Ok(updated > 0)
}

fn delete_account(cfg: &Config, id: i64) -> rusqlite::Result<bool> {
    let conn = db::open(cfg)?;
    conn.execute("DELETE FROM sessions WHERE admin_id = ?1", params![id])?;
    let deleted = conn.execute("DELETE FROM admins WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}
