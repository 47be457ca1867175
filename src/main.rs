use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dish_form::app_state::AppState;
use dish_form::config::AppConfig;
use dish_form::routes;
use dish_form::services::dishes_api::HttpDishesClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing dish-form server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!(
        "dish_submissions_total",
        "Validated dish records sent to the dish service"
    );
    metrics::describe_counter!(
        "dish_submissions_succeeded",
        "Dish records the dish service accepted"
    );
    metrics::describe_counter!(
        "dish_submissions_failed",
        "Dish submissions that failed or were rejected remotely"
    );
    metrics::describe_counter!(
        "dish_form_rejected_total",
        "Submits blocked by form validation"
    );

    tracing::info!(endpoint = %config.dishes_endpoint, "Initializing dish service client");
    let client = HttpDishesClient::new(config.dishes_endpoint.clone())
        .expect("Failed to initialize dish service client");

    let state = AppState::new(client, config.dishes_endpoint.clone());

    let app = routes::router(state)
        .merge(
            Router::new()
                .route("/metrics", get(routes::metrics::prometheus_metrics))
                .with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64 KB limit

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
