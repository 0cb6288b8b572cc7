mod web;

use actix_files::Files;
use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use parivar::common::Config;

use crate::web::middleware::LocaleRedirect;
use crate::web::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = Config::from_env();
    tracing::info!(
        api_base = %cfg.api_base,
        default_lang = %cfg.default_lang,
        "starting portal front end"
    );

    let bind_addr = cfg.bind_addr.clone();
    let default_lang = cfg.default_lang;
    let state = Data::new(AppState::new(cfg));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(LocaleRedirect::new(default_lang))
            .wrap(NormalizePath::trim())
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(web::handlers::configure_catch_all)
    })
    .bind(bind_addr)?
    .run()
    .await
}
