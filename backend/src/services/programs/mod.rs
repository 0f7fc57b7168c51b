//! Program management and the public program listing.
//!
//! Criteria trees travel as JSON inside the `Program` payload and are
//! persisted verbatim in the `criteres` column; the evaluation engine
//! and the rule builder are the only parties interpreting them.
//!
//! Routes:
//! - `GET /programs` — published programs; every program for an
//!   authenticated admin.
//! - `GET /programs/{id}` — one program.
//! - `POST /programs`, `PUT /programs/{id}` — create/update (admin).
//! - `DELETE /programs/{id}` — delete (admin).
//! - `PUT /programs/{id}/hero` — homepage marketing copy (admin).
//! - `PUT /programs/{id}/toggle` — flip the publish flag (admin).

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;
use common::model::program::Program;
use rusqlite::params;

use crate::config::Config;
use crate::db;

mod delete_program;
mod hero;
mod list;
mod save;
mod toggle;

const API_PATH: &str = "/programs";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/{id}", get().to(list::get_one))
        .route("/{id}", put().to(save::update))
        .route("/{id}", delete().to(delete_program::process))
        .route("/{id}/hero", put().to(hero::process))
        .route("/{id}/toggle", put().to(toggle::process))
}

pub(crate) fn load_programs(cfg: &Config, only_published: bool) -> rusqlite::Result<Vec<Program>> {
    let conn = db::open(cfg)?;
    let sql = if only_published {
        "SELECT id, nom, description, organisme, lien, criteres, published, hero
         FROM programs WHERE published = 1 ORDER BY id"
    } else {
        "SELECT id, nom, description, organisme, lien, criteres, published, hero
         FROM programs ORDER BY id"
    };
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], program_from_row)?;
    Ok(rows.filter_map(Result::ok).collect())
}

pub(crate) fn load_program(cfg: &Config, id: i64) -> rusqlite::Result<Option<Program>> {
    let conn = db::open(cfg)?;
    let result = conn.query_row(
        "SELECT id, nom, description, organisme, lien, criteres, published, hero
         FROM programs WHERE id = ?1",
        params![id],
        program_from_row,
    );
    match result {
        Ok(program) => Ok(Some(program)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(err) => Err(err),
    }
}

fn program_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Program> {
    let criteres: String = row.get(5)?;
    let hero: Option<String> = row.get(7)?;
    Ok(Program {
        id: Some(row.get(0)?),
        nom: row.get(1)?,
        description: row.get(2)?,
        organisme: row.get(3)?,
        lien: row.get(4)?,
        criteres: serde_json::from_str(&criteres).unwrap_or_default(),
        published: row.get::<_, i64>(6)? != 0,
        hero: hero.and_then(|raw| serde_json::from_str(&raw).ok()),
    })
}
