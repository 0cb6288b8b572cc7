pub mod api;
pub mod common;
pub mod i18n;
pub mod models;
pub mod services;
