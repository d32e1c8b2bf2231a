//! Domain layer: entities and the ports the client depends on.
//!
//! Nothing in here knows about HTTP libraries or terminals. The backend, the
//! navigation target and the session store are reached through the traits in
//! [`ports`], implemented by [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`ports`] - Trait definitions for external collaborators

pub mod entities;
pub mod ports;
