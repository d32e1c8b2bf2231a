//! Error body returned by the backend on failed requests.

use serde::Deserialize;

/// `{ "message": "...", "limitReached": true }`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: Option<String>,
    #[serde(default)]
    pub limit_reached: bool,
}
