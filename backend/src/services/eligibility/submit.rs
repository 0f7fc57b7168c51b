use std::collections::BTreeMap;

use actix_web::{web, HttpResponse, Responder};
use chrono::Datelike;
use common::model::program::Program;
use common::model::submission::EligibilitySubmission;
use common::requests::EligibilityResponse;
use common::{validate, years};
use rusqlite::params;

use crate::activity::state::{ActivityHub, ActivityKind};
use crate::config::Config;
use crate::{db, engine, services};

pub async fn process(
    payload: web::Json<EligibilitySubmission>,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    match submit_test(&payload, &cfg) {
        Ok(programs) => {
            hub.record(
                ActivityKind::FormSubmitted,
                format!("Nouveau test d'éligibilité de {}", payload.email),
            );
            HttpResponse::Ok().json(EligibilityResponse { programs })
        }
        Err(SubmitError::Invalid(errors)) => HttpResponse::BadRequest().json(errors),
        Err(SubmitError::Storage(err)) => {
            log::error!("failed to process eligibility test: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de l'enregistrement du test")
        }
    }
}

pub enum SubmitError {
    Invalid(BTreeMap<&'static str, String>),
    Storage(String),
}

/// Server-side re-validation runs the same `common::validate` logic the
/// form ran; error values are the message keys.
fn submit_test(form: &EligibilitySubmission, cfg: &Config) -> Result<Vec<Program>, SubmitError> {
    let current_year = chrono::Utc::now().year();
    let requested = years::revenue_years(&form.annee_creation, current_year);
    let errors = validate::validate(form, &requested, |key| key.to_string());
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }

    let programs = services::programs::load_programs(cfg, true)
        .map_err(|e| SubmitError::Storage(e.to_string()))?;
    let ctx = engine::context_from(form);
    let matched = engine::matching_programs(programs, &ctx);

    persist_test(cfg, form, &matched).map_err(|e| SubmitError::Storage(e.to_string()))?;
    Ok(matched)
}

fn persist_test(
    cfg: &Config,
    form: &EligibilitySubmission,
    matched: &[Program],
) -> Result<(), Box<dyn std::error::Error>> {
    let conn = db::open(cfg)?;
    let now = db::now();

    let person_id: i64 = match conn
        .query_row(
            "SELECT id FROM persons WHERE email = ?1",
            params![form.email],
            |row| row.get(0),
        )
        .map(Some)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(None),
            other => Err(other),
        })? {
        Some(id) => {
            // Keep the identity fields fresh on repeat submissions.
            conn.execute(
                "UPDATE persons SET nom = ?1, prenom = ?2, telephone = ?3 WHERE id = ?4",
                params![form.nom, form.prenom, form.telephone, id],
            )?;
            id
        }
        None => {
            conn.execute(
                "INSERT INTO persons (email, nom, prenom, telephone, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![form.email, form.nom, form.prenom, form.telephone, now],
            )?;
            conn.last_insert_rowid()
        }
    };

    let names: Vec<&str> = matched.iter().map(|p| p.nom.as_str()).collect();
    conn.execute(
        "INSERT INTO tests (person_id, payload, matched, wants_contact, created_at)
         VALUES (?1, ?2, ?3, 0, ?4)",
        params![
            person_id,
            serde_json::to_string(form)?,
            serde_json::to_string(&names)?,
            now
        ],
    )?;
    Ok(())
}
