mod activity;
mod config;
mod db;
mod engine;
mod services;
mod uploads;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use tokio::sync::{broadcast, mpsc};

use crate::activity::state::ActivityHub;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend build; unknown paths fall back to
/// `index.html` so client-side routes deep-link correctly.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cfg = config::Config::from_env();

    db::init(&cfg).map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::create_dir_all(&cfg.uploads_dir)?;

    // Activity pipeline: handlers -> mpsc -> recorder -> broadcast -> SSE.
    let (tx, rx) = mpsc::channel(100);
    let (feed, _) = broadcast::channel(64);
    let hub = ActivityHub::new(tx, feed);

    let recorder_cfg = cfg.clone();
    let recorder_hub = hub.clone();
    tokio::spawn(async move {
        activity::state::start_activity_recorder(recorder_cfg, recorder_hub, rx).await;
    });

    info!("Server running at http://{}:{}", cfg.host, cfg.port);

    let bind = (cfg.host.clone(), cfg.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(cfg.clone()))
            .app_data(web::Data::new(hub.clone()))
            .service(services::eligibility::configure_routes())
            .service(services::programs::configure_routes())
            // More specific /admin prefixes must come before the
            // account scope, whose `{id}` route would swallow them.
            .service(services::news::configure_admin_routes())
            .service(services::news::configure_public_routes())
            .service(services::stats::configure_activity_routes())
            .service(services::admins::configure_routes())
            .service(services::partners::configure_routes())
            .service(services::users::configure_routes())
            .service(services::stats::configure_routes())
            .service(services::events::configure_routes())
            .service(actix_files::Files::new("/uploads", cfg.uploads_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
