//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for the backend REST API
//! - [`navigation`] - Navigation targets (terminal output)
//! - [`session`] - Session providers built from configuration

pub mod http;
pub mod navigation;
pub mod session;
