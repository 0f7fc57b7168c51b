//! Admin accounts and sessions.
//!
//! Sessions are opaque tokens in an http-only cookie, re-validated
//! against the sessions table on every protected request. Whatever the
//! client caches about the logged-in profile is a UX affordance only —
//! authorization always goes through [`session::current_admin`].
//!
//! Routes (under `/admin`):
//! - `POST /login` — verify credentials, open a session.
//! - `GET /me` — the authenticated admin's profile.
//! - `POST /register` — create an account (super admin only).
//! - `GET /others` — every other admin account.
//! - `PUT /{id}` — update an account (super admin only).
//! - `DELETE /{id}` — delete an account and its sessions (super admin
//!   only, never one's own).

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

mod login;
mod manage;
mod me;
mod others;
mod register;
pub mod session;

const API_PATH: &str = "/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/me", get().to(me::process))
        .route("/register", post().to(register::process))
        .route("/others", get().to(others::process))
        .route("/{id}", put().to(manage::update))
        .route("/{id}", delete().to(manage::delete))
}
