//! # Propuesta Info Web Application
//!
//! Main entry point for the personalized real-estate pricing web
//! application. Configures logging, SSL, middleware, the CRM client and
//! route handling.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod crm;
pub mod front;
pub mod logger;
pub mod models;
pub mod utils;

use ntex::web;
use ntex_cors::Cors;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};
use rust_decimal::prelude::ToPrimitive;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = &*config::APP_CONFIG;
    if app_config.hubspot_access_token.is_none() {
        log::warn!("HUBSPOT_ACCESS_TOKEN is not set, every lookup will serve fallback pricing");
    }
    log::info!("starting propuesta-info at {}", app_config.base_url());

    configure_and_run_server().await
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor() -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    let app_config = &*config::APP_CONFIG;
    ssl_acceptor
        .set_private_key_file(&app_config.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                app_config.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&app_config.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                app_config.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Creates application state with the CRM collaborator
fn create_app_state() -> front::AppState {
    front::AppState {
        crm: Box::new(crm::hubspot::HubSpotClient::new()),
    }
}

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server() -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;
    let server_addr = ("0.0.0.0", app_config.web_server_port.to_u16().unwrap_or(443));

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "OPTIONS"])
                    .allowed_origin("http://localhost:8080")
                    .allowed_origin("https://propuesta-info.link")
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state())
            .configure(front::routes::pricing_api)
            .service((
                ntex_files::Files::new("/static", "web/static/"),
                front::server::serve_favicon,
                front::server::index,
            ))
            .default_service(web::route().to(front::server::serve_not_found))
    });

    let bound_server = if app_config.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor()?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
