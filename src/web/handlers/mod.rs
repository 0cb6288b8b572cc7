pub mod auth;
pub mod dashboard;
pub mod matrimony;
pub mod membership;
pub mod news;
pub mod people;
pub mod public;

use actix_web::web;

/// Configure all routes EXCEPT the locale catch-all.
/// The catch-all must be registered last to avoid matching before
/// specific routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    news::configure(cfg);
    people::configure(cfg);
    auth::configure(cfg);
    matrimony::configure(cfg);
    membership::configure(cfg);
    dashboard::configure(cfg);
}

/// Configure the catch-all route under a locale prefix. This MUST be
/// called last.
pub fn configure_catch_all(cfg: &mut web::ServiceConfig) {
    cfg.service(public::unmatched);
}
