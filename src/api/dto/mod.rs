//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with the backend's camelCase field names. Requests are
//! checked with `validator` before they are sent.

pub mod dashboard;
pub mod error;
pub mod shorten;
pub mod url;
