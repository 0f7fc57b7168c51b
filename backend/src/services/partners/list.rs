use actix_web::{web, HttpResponse, Responder};
use common::model::partner::Partner;

use crate::config::Config;
use crate::db;

pub async fn process(cfg: web::Data<Config>) -> impl Responder {
    match load_partners(&cfg) {
        Ok(partners) => HttpResponse::Ok().json(partners),
        Err(err) => {
            log::error!("failed to list partners: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des partenaires")
        }
    }
}

fn load_partners(cfg: &Config) -> rusqlite::Result<Vec<Partner>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare("SELECT id, nom, site, logo FROM partenaires ORDER BY nom")?;
    let rows = stmt.query_map([], |row| {
        Ok(Partner {
            id: Some(row.get(0)?),
            nom: row.get(1)?,
            site: row.get(2)?,
            logo: row.get(3)?,
        })
    })?;
    Ok(rows.filter_map(Result::ok).collect())
}
