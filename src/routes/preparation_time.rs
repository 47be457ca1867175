use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::preparation_time;

#[derive(Debug, Deserialize)]
pub struct PreparationTimeRequest {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct PreparationTimeResponse {
    pub formatted: String,
    pub status: &'static str,
    pub help: Option<String>,
}

/// POST /api/v1/preparation-time — apply one keystroke to the field.
pub async fn format_preparation_time(
    Json(request): Json<PreparationTimeRequest>,
) -> Json<PreparationTimeResponse> {
    let formatted = preparation_time::format_preparation_time(&request.value);
    let status = formatted.status();

    Json(PreparationTimeResponse {
        status: status.as_str(),
        help: status.help().map(str::to_string),
        formatted: formatted.value,
    })
}
