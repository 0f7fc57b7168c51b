use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::admin::{AdminAccount, AdminRole};
use common::requests::RegisterRequest;
use rusqlite::params;

use crate::activity::state::{ActivityHub, ActivityKind};
use crate::config::Config;
use crate::db;

use super::session;

pub async fn process(
    req: HttpRequest,
    payload: web::Json<RegisterRequest>,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    match session::current_admin(&req, &cfg) {
        Some(account) if account.role == AdminRole::Super => {}
        Some(_) => return HttpResponse::Forbidden().body("Réservé au super administrateur"),
        None => return HttpResponse::Unauthorized().body("Session requise"),
    }
    if payload.email.trim().is_empty() || payload.password.trim().is_empty() {
        return HttpResponse::BadRequest().body("Email et mot de passe requis");
    }

    match register(&cfg, &payload) {
        Ok(Some(account)) => {
            hub.record(
                ActivityKind::Generic,
                format!("Compte administrateur créé pour {}", account.email),
            );
            HttpResponse::Ok().json(account)
        }
        Ok(None) => HttpResponse::BadRequest().body("Un compte existe déjà avec cet email"),
        Err(err) => {
            log::error!("failed to register admin: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la création du compte")
        }
    }
}

fn register(cfg: &Config, payload: &RegisterRequest) -> rusqlite::Result<Option<AdminAccount>> {
    let conn = db::open(cfg)?;
    let exists: i64 = conn.query_row(
        "SELECT COUNT(*) FROM admins WHERE email = ?1",
        params![payload.email],
        |row| row.get(0),
    )?;
    if exists > 0 {
        return Ok(None);
    }

    let salt = session::new_salt();
    let digest = session::password_digest(&salt, &payload.password);
    conn.execute(
        "INSERT INTO admins (nom, email, role, salt, password_digest)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            payload.nom,
            payload.email,
            session::role_tag(payload.role),
            salt,
            digest
        ],
    )?;
    Ok(Some(AdminAccount {
        id: Some(conn.last_insert_rowid()),
        nom: payload.nom.clone(),
        email: payload.email.clone(),
        role: payload.role,
    }))
}
