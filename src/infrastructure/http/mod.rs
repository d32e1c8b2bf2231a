//! HTTP access to the backend REST API.

mod http_url_api;

pub use http_url_api::HttpUrlApi;
