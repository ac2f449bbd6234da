//! Records as stored and their wire mappings, plus typed request bodies per endpoint.

mod product;
mod user;

pub use product::{NewProduct, Product, ProductPayload};
pub use user::{Credentials, LoginPayload, NewUser, RegisterPayload, User};
