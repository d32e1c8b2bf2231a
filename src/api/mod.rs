//! Wire formats of the backend REST API.
//!
//! # Endpoints consumed
//!
//! - `GET /api/url/{code}` - Short-code lookup (redirect or JSON body)
//! - `POST /api/url/shorten` - Create a short URL
//! - `DELETE /api/url/{code}` - Delete a short URL
//! - `GET /api/dashboard/urls` - Paginated URL listing
//! - `GET /api/dashboard/stats` - Account statistics

pub mod dto;
