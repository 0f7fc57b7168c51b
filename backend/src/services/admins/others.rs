use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::admin::AdminAccount;

use crate::config::Config;
use crate::db;

use super::session;

/// Every admin account except the caller's own.
pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    let Some(me) = session::current_admin(&req, &cfg) else {
        return HttpResponse::Unauthorized().body("Session requise");
    };
    match list_others(&cfg, me.id.unwrap_or_default()) {
        Ok(accounts) => HttpResponse::Ok().json(accounts),
        Err(err) => {
            log::error!("failed to list admins: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des comptes")
        }
    }
}

fn list_others(cfg: &Config, me: i64) -> rusqlite::Result<Vec<AdminAccount>> {
    let conn = db::open(cfg)?;
    let mut stmt =
        conn.prepare("SELECT id, nom, email, role FROM admins WHERE id != ?1 ORDER BY nom")?;
    let rows = stmt.query_map(rusqlite::params![me], |row| {
        Ok(AdminAccount {
            id: Some(row.get(0)?),
            nom: row.get(1)?,
            email: row.get(2)?,
            role: session::role_from(&row.get::<_, String>(3)?),
        })
    })?;
    Ok(rows.filter_map(Result::ok).collect())
}
