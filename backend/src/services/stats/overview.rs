use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::stats::{AdminStats, ProgramMatchCount};
use std::collections::BTreeMap;

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match load_stats(&cfg) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => {
            log::error!("failed to load stats: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des statistiques")
        }
    }
}

fn load_stats(cfg: &Config) -> rusqlite::Result<AdminStats> {
    let conn = db::open(cfg)?;
    let total_tests: i64 = conn.query_row("SELECT COUNT(*) FROM tests", [], |row| row.get(0))?;
    let total_persons: i64 =
        conn.query_row("SELECT COUNT(*) FROM persons", [], |row| row.get(0))?;
    let contact_requests: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tests WHERE wants_contact = 1",
        [],
        |row| row.get(0),
    )?;

    // Match counts live inside each test's JSON `matched` array, so the
    // aggregation happens here rather than in SQL.
    let mut per_program: BTreeMap<String, i64> = BTreeMap::new();
    let mut stmt = conn.prepare("SELECT matched FROM tests")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    for raw in rows.filter_map(Result::ok) {
        let names: Vec<String> = serde_json::from_str(&raw).unwrap_or_default();
        for name in names {
            *per_program.entry(name).or_default() += 1;
        }
    }

    Ok(AdminStats {
        total_tests,
        total_persons,
        contact_requests,
        matches_per_program: per_program
            .into_iter()
            .map(|(program, count)| ProgramMatchCount { program, count })
            .collect(),
    })
}
