//! EduLearn API: REST backend for the course catalog site and the typed client its pages use.

pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod view;

pub use client::{ClientError, EduLearnClient};
pub use config::AppConfig;
pub use error::{AppError, ConfigError, ErrorBody};
pub use migration::apply_migrations;
pub use response::MessageBody;
pub use routes::{app, common_routes, resource_routes};
pub use service::PgStore;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, Store};
pub use view::Loadable;
