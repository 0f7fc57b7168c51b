//! News articles: admin CRUD under `/admin/news`, public listing under
//! `/news`. Create/update are multipart: a `json` part carrying the
//! article plus an optional cover `image` part.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;
use common::model::news::NewsArticle;

use crate::config::Config;
use crate::db;

mod delete_news;
mod list;
mod save;

pub fn configure_admin_routes() -> Scope {
    scope("/admin/news")
        .route("", get().to(list::admin))
        .route("", post().to(save::create))
        .route("/{id}", put().to(save::update))
        .route("/{id}", delete().to(delete_news::process))
}

pub fn configure_public_routes() -> Scope {
    scope("/news")
        .route("", get().to(list::public))
        .route("/categories", get().to(list::categories))
}

pub(crate) fn load_news(cfg: &Config) -> rusqlite::Result<Vec<NewsArticle>> {
    let conn = db::open(cfg)?;
    let mut stmt = conn.prepare(
        "SELECT id, titre, resume, contenu, categorie, image, published_at
         FROM news ORDER BY published_at DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(NewsArticle {
            id: Some(row.get(0)?),
            titre: row.get(1)?,
            resume: row.get(2)?,
            contenu: row.get(3)?,
            categorie: row.get(4)?,
            image: row.get(5)?,
            published_at: row.get(6)?,
        })
    })?;
    Ok(rows.filter_map(Result::ok).collect())
}
