use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::config::Config;
use crate::services::admins::session;

pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    match super::load_persons(&cfg) {
        Ok(persons) => HttpResponse::Ok().json(persons),
        Err(err) => {
            log::error!("failed to list persons: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors du chargement des utilisateurs")
        }
    }
}
