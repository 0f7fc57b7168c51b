use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::submission::{EligibilitySubmission, EligibilityTest};
use rusqlite::params;

use crate::config::Config;
use crate::db;
use crate::services::admins::session;

pub async fn process(req: HttpRequest, id: web::Path<i64>, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match tests_for_person(&cfg, *id) {
        Ok(tests) => HttpResponse::Ok().json(tests),
        Err(err) => {
            log::error!("failed to load test history: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement de l'historique")
        }
    }
}

fn tests_for_person(cfg: &Config, person_id: i64) -> rusqlite::Result<Vec<EligibilityTest>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare(
        "SELECT id, payload, matched, wants_contact, created_at
         FROM tests WHERE person_id = ?1 ORDER BY id DESC",
    )?;
    let rows = stmt.query_map(params![person_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut tests = Vec::new();
    for row in rows.filter_map(Result::ok) {
        let (id, payload, matched, wants_contact, created_at) = row;
        tests.push(EligibilityTest {
            id: Some(id),
            submission: serde_json::from_str::<EligibilitySubmission>(&payload)
                .unwrap_or_default(),
            matched: serde_json::from_str(&matched).unwrap_or_default(),
            wants_contact: wants_contact != 0,
            created_at,
        });
    }
    Ok(tests)
}
