use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

pub async fn admin(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    list(&cfg)
}

pub async fn public(cfg: web::Data<Config>) -> impl Responder {
    list(&cfg)
}

fn list(cfg: &Config) -> HttpResponse {
    match super::load_news(cfg) {
        Ok(articles) => HttpResponse::Ok().json(articles),
        Err(err) => {
            log::error!("failed to list news: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des actualités")
        }
    }
}

pub async fn categories(cfg: web::Data<Config>) -> impl Responder {
    match distinct_categories(&cfg) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("failed to list categories: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des catégories")
        }
    }
}

fn distinct_categories(cfg: &Config) -> rusqlite::Result<Vec<String>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare(
        "SELECT DISTINCT categorie FROM news WHERE categorie != '' ORDER BY categorie",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    Ok(rows.filter_map(Result::ok).collect())
}
