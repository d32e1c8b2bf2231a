//! Utility functions shared by the client services.
//!
//! - [`url_normalizer`] - URL validation and normalization before shortening

pub mod url_normalizer;
