//! # Blog API Server
//!
//! Actix-web application serving the blog posts resource.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::BlogServer;
pub use state::AppState;
