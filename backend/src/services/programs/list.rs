use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::config::Config;
use crate::services::admins::session;

pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    let only_published = session::current_admin(&req, &cfg).is_none();
    match super::load_programs(&cfg, only_published) {
        Ok(programs) => HttpResponse::Ok().json(programs),
        Err(err) => {
            log::error!("failed to list programs: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des programmes")
        }
    }
}

pub async fn get_one(id: web::Path<i64>, cfg: web::Data<Config>) -> impl Responder {
    match super::load_program(&cfg, *id) {
        Ok(Some(program)) => HttpResponse::Ok().json(program),
        Ok(None) => HttpResponse::NotFound().body("Programme introuvable"),
        Err(err) => {
            log::error!("failed to load program: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement du programme")
        }
    }
}
