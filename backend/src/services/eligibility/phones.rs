use actix_web::{web, HttpResponse, Responder};
use common::model::submission::EligibilitySubmission;
use common::requests::PhonesResponse;
use rusqlite::params;
use serde::Deserialize;

use crate::config::Config;
use crate::db;

#[derive(Deserialize)]
pub struct PhonesQuery {
    email: String,
}

pub async fn process(query: web::Query<PhonesQuery>, cfg: web::Data<Config>) -> impl Responder {
    match phones_for_email(&cfg, &query.email) {
        Ok(phones) => HttpResponse::Ok().json(PhonesResponse { phones }),
        Err(err) => {
            log::error!("failed to look up phones: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de la recherche des téléphones")
        }
    }
}

/// Distinct phone numbers from this email's past submissions, most
/// recent first.
fn phones_for_email(cfg: &Config, email: &str) -> rusqlite::Result<Vec<String>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare(
        "SELECT tests.payload FROM tests
         JOIN persons ON persons.id = tests.person_id
         WHERE persons.email = ?1
         ORDER BY tests.id DESC",
    )?;
    let payloads = stmt
        .query_map(params![email], |row| row.get::<_, String>(0))?
        .filter_map(Result::ok);

    let mut phones = Vec::new();
    for payload in payloads {
        let Ok(form) = serde_json::from_str::<EligibilitySubmission>(&payload) else {
            continue;
        };
        let phone = form.telephone.trim().to_string();
        if !phone.is_empty() && !phones.contains(&phone) {
            phones.push(phone);
        }
    }
    Ok(phones)
}
