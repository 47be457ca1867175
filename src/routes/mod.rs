use axum::{routing::get, routing::post, Router};

use crate::app_state::AppState;

pub mod assets;
pub mod form;
pub mod health;
pub mod metrics;
pub mod preparation_time;

/// Form page and its assets, form submit, the live preparation-time helper
/// and health.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::show_form).post(form::submit_form))
        .route(
            "/api/v1/preparation-time",
            post(preparation_time::format_preparation_time),
        )
        .route("/static/form.js", get(assets::form_script))
        .route("/static/form.css", get(assets::form_style))
        .route("/health", get(health::health_check))
        .with_state(state)
}
