//! Catalogue API: product CRUD and user registration/login over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use models::{NewProduct, Product, User};
pub use response::{success_many, success_one};
pub use routes::{app, auth_routes, common_routes, page_routes, product_routes};
pub use service::{ProductService, UserService};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_tables};
