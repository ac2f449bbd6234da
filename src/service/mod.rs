//! Persistence services over the SQLite pool, plus request validation and password hashing.

mod password;
mod products;
mod users;
mod validation;
pub use password::{hash_password, verify_password};
pub use products::ProductService;
pub use users::{UserService, LOGIN_FAILED};
pub use validation::RequestValidator;
