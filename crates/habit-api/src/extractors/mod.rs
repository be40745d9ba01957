//! Axum extractors for request handling
//!
//! Authentication, validated bodies and query strings, and ID path segments.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::IdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
