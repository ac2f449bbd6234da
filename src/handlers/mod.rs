//! HTTP handlers for products, registration/login, and the front-end pages.

pub mod auth;
pub mod pages;
pub mod products;
