use axum::http::header;
use axum::response::IntoResponse;

use crate::views::form::{SCRIPT, STYLE};

/// GET /static/form.js
pub async fn form_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT)
}

/// GET /static/form.css
pub async fn form_style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE)
}
