use actix_web::cookie::Cookie;
use actix_web::{web, HttpResponse, Responder};
use common::model::admin::AdminAccount;
use common::requests::LoginRequest;
use rusqlite::params;

use crate::config::Config;
use crate::db;

use super::session;

pub async fn process(payload: web::Json<LoginRequest>, cfg: web::Data<Config>) -> impl Responder {
    match authenticate(&cfg, &payload) {
        Ok(Some(account)) => {
            let admin_id = account.id.unwrap_or_default();
            match session::create_session(&cfg, admin_id) {
                Ok(token) => {
                    let cookie = Cookie::build(session::SESSION_COOKIE, token)
                        .path("/")
                        .http_only(true)
                        .finish();
                    HttpResponse::Ok().cookie(cookie).json(account)
                }
                Err(err) => {
                    log::error!("failed to open session: {err}");
                    HttpResponse::ServiceUnavailable().body("Erreur lors de la connexion")
                }
            }
        }
        Ok(None) => HttpResponse::Unauthorized().body("Identifiants invalides"),
        Err(err) => {
            log::error!("failed to authenticate: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la connexion")
        }
    }
}

fn authenticate(cfg: &Config, login: &LoginRequest) -> rusqlite::Result<Option<AdminAccount>> {
    let conn = db::open(cfg)?;
    let row = conn.query_row(
        "SELECT id, nom, email, role, salt, password_digest FROM admins WHERE email = ?1",
        params![login.email],
        |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        },
    );
    let (id, nom, email, role, salt, digest) = match row {
        Ok(values) => values,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(err) => return Err(err),
    };

    if session::password_digest(&salt, &login.password) != digest {
        return Ok(None);
    }
    Ok(Some(AdminAccount {
        id: Some(id),
        nom,
        email,
        role: session::role_from(&role),
    }))
}
