mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::application::contact_service::ContactService;
use crate::application::post_service::PostService;
use crate::data::store::{DocumentStore, JsonFileStore};
use crate::domain::document::Document;
use crate::domain::post::Post;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::presentation::handlers;
use crate::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");

    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    seed_sample_data(store.as_ref(), &config)
        .await
        .expect("failed to seed data file");

    let write_lock = Arc::new(Mutex::new(()));
    let post_service = PostService::new(Arc::clone(&store), Arc::clone(&write_lock));
    let contact_service = ContactService::new(Arc::clone(&store), write_lock);

    let config_data = config.clone();

    info!(host = %config.host, port = config.port, "HTTP server starting");

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(post_service.clone()))
            .app_data(web::Data::new(contact_service.clone()))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health))
                    .service(handlers::post::get_posts)
                    .service(handlers::post::get_post)
                    .service(handlers::post::create_post)
                    .service(handlers::contact::get_contacts)
                    .service(handlers::contact::create_contact),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// One-time initialization for a fresh deployment: a welcome post and an
/// empty contact inbox. Never runs once the data file exists.
async fn seed_sample_data<S: DocumentStore>(store: &S, config: &AppConfig) -> anyhow::Result<()> {
    if config.data_file.exists() {
        return Ok(());
    }

    let mut document = Document::default();
    document.posts.push(Post::new(
        1,
        "Welcome to Our Blog".into(),
        "This is our first blog post. Welcome to our website!".into(),
        "Admin".into(),
    ));
    store.save(&document).await?;

    info!(path = %config.data_file.display(), "seeded data file with sample post");
    Ok(())
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
