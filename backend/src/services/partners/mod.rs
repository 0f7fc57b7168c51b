//! Partner logos shown on the public homepage. Same multipart shape as
//! news: a `json` part plus an optional `image` part for the logo.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

mod delete_partner;
mod list;
mod save;

const API_PATH: &str = "/partenaires";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/{id}", put().to(save::update))
        .route("/{id}", delete().to(delete_partner::process))
}
