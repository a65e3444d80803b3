//! Password generation, policy validation and hashing.

mod generator;
mod hashing;
mod validator;

pub use generator::{MIN_GENERATED_LENGTH, PASSWORD_SYMBOLS, generate_password};
pub use hashing::{hash_password, hash_password_blocking, verify_password};
pub use validator::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_REQUIREMENTS, validate_password};
