use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::partner::Partner;
use rusqlite::params;

use crate::config::Config;
use crate::services::admins::session;
use crate::{db, uploads};

pub async fn create(req: HttpRequest, payload: Multipart, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match save_partner(payload, &cfg, None).await {
        Ok(partner) => HttpResponse::Ok().json(partner),
        Err(err) => {
            log::error!("failed to create partner: {err}");
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
    match save_partner(payload, &cfg, Some(*id)).await {
        Ok(partner) => HttpResponse::Ok().json(partner),
        Err(err) => {
            log::error!("failed to update partner: {err}");
            HttpResponse::BadRequest().body(format!("Erreur lors de l'enregistrement: {err}"))
        }
    }
}

async fn save_partner(
    payload: Multipart,
    cfg: &Config,
    id: Option<i64>,
) -> Result<Partner, Box<dyn std::error::Error>> {
    let upload = uploads::read_entity_with_image::<Partner>(payload, cfg).await?;
    let mut partner = upload.entity;
    if partner.nom.trim().is_empty() {
        return Err("le nom du partenaire ne peut pas être vide".into());
    }
    if upload.image.is_some() {
        partner.logo = upload.image;
    }

    let conn = db::open(cfg)?;
    match id {
        Some(id) => {
            let updated = conn.execute(
                "UPDATE partenaires SET nom = ?1, site = ?2, logo = ?3 WHERE id = ?4",
                params![partner.nom, partner.site, partner.logo, id],
            )?;
            if updated == 0 {
                return Err("partenaire introuvable".into());
            }
            partner.id = Some(id);
        }
        None => {
            conn.execute(
                "INSERT INTO partenaires (nom, site, logo) VALUES (?1, ?2, ?3)",
                params![partner.nom, partner.site, partner.logo],
            )?;
            partner.id = Some(conn.last_insert_rowid());
        }
    }
    Ok(partner)
}
