//! Public eligibility-test endpoints.
//!
//! - `POST /test/eligibilite`: validates a questionnaire, evaluates it
//!   against every published program, persists the test and returns the
//!   matching programs.
//! - `PATCH /test/eligibilite/{id}/contact`: marks a submitted test as
//!   wanting follow-up contact.
//! - `GET /test/eligibilite/phones?email=`: phone numbers previously
//!   used with an email, for prefill.
//! - `GET /test/eligibilite/personne/{id}`: a person's test history.

use actix_web::web::{get, patch, post, scope};
use actix_web::Scope;

mod contact;
mod history;
mod phones;
mod submit;

const API_PATH: &str = "/test/eligibilite";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("/phones", get().to(phones::process))
        .route("/personne/{id}", get().to(history::process))
        .route("/{id}/contact", patch().to(contact::process))
}
