use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::config::Config;

use super::session;

/// Session check: the client calls this on protected-route entry and
/// drops its cached profile on 401.
pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    match session::current_admin(&req, &cfg) {
        Some(account) => HttpResponse::Ok().json(account),
        None => HttpResponse::Unauthorized().body("Session requise"),
    }
}
