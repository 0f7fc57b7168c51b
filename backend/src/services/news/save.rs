use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::news::NewsArticle;
use rusqlite::params;

use crate::activity::state::{ActivityHub, ActivityKind};
use crate::config::Config;
use crate::services::admins::session;
use crate::{db, uploads};

pub async fn create(
    req: HttpRequest,
    payload: Multipart,
    cfg: web::Data<Config>,
    hub: web::Data<ActivityHub>,
) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match save_article(payload, &cfg, None).await {
        Ok(article) => {
            hub.record(
                ActivityKind::Generic,
                format!("Actualité «{}» publiée", article.titre),
            );
            HttpResponse::Ok().json(article)
        }
        Err(err) => {
            log::error!("failed to create article: {err}");
            HttpResponse::BadRequest().body(format!("Erreur lors de l'enregistrement: {err}"))
        }
    }
}

pub async fn update(
    req: HttpRequest,
    id: web::Path<i64>,
    payload: Multipart,
    cfg: web::Data<Config>,
) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match save_article(payload, &cfg, Some(*id)).await {
        Ok(article) => HttpResponse::Ok().json(article),
        Err(err) => {
            log::error!("failed to update article: {err}");
            HttpResponse::BadRequest().body(format!("Erreur lors de l'enregistrement: {err}"))
        }
    }
}

async fn save_article(
    payload: Multipart,
    cfg: &Config,
    id: Option<i64>,
) -> Result<NewsArticle, Box<dyn std::error::Error>> {
    let upload = uploads::read_entity_with_image::<NewsArticle>(payload, cfg).await?;
    let mut article = upload.entity;
    if article.titre.trim().is_empty() {
        return Err("le titre ne peut pas être vide".into());
    }
    // A freshly uploaded cover replaces the stored path; otherwise the
    // existing one is kept.
    if upload.image.is_some() {
        article.image = upload.image;
    }
    if article.published_at.trim().is_empty() {
        article.published_at = db::now();
    }

    let conn = db::open(cfg)?;
    match id {
        Some(id) => {
            let updated = conn.execute(
                "UPDATE news SET titre = ?1, resume = ?2, contenu = ?3, categorie = ?4,
                 image = ?5, published_at = ?6 WHERE id = ?7",
                params![
                    article.titre,
                    article.resume,
                    article.contenu,
                    article.categorie,
                    article.image,
                    article.published_at,
                    id
                ],
            )?;
            if updated == 0 {
                return Err("actualité introuvable".into());
            }
            article.id = Some(id);
        }
        None => {
            conn.execute(
                "INSERT INTO news (titre, resume, contenu, categorie, image, published_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    article.titre,
                    article.resume,
                    article.contenu,
                    article.categorie,
                    article.image,
                    article.published_at
                ],
            )?;
            article.id = Some(conn.last_insert_rowid());
        }
    }
    Ok(article)
}
