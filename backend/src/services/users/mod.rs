//! Back-office views over the people who submitted tests.
//!
//! - `GET /users`: listing with per-person test counts.
//! - `GET /users/export`: the same listing as a CSV download.

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::model::person::Person;

use crate::config::Config;
use crate::db;

mod export;
mod list;

const API_PATH: &str = "/users";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/export", get().to(export::process))
}

pub(crate) fn load_persons(cfg: &Config) -> rusqlite::Result<Vec<Person>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare(
        "SELECT persons.id, persons.email, persons.nom, persons.prenom,
                persons.telephone, persons.created_at, COUNT(tests.id)
         FROM persons LEFT JOIN tests ON tests.person_id = persons.id
         GROUP BY persons.id ORDER BY persons.created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Person {
            id: Some(row.get(0)?),
            email: row.get(1)?,
            nom: row.get(2)?,
            prenom: row.get(3)?,
            telephone: row.get(4)?,
            created_at: row.get(5)?,
            tests_count: row.get(6)?,
        })
    })?;
    Ok(rows.filter_map(Result::ok).collect())
}
