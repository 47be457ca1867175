//! Test helper utilities: a stand-in dish service and an in-process app server.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::sync::{Arc, Mutex};

use dish_form::app_state::AppState;
use dish_form::routes;
use dish_form::services::dishes_api::HttpDishesClient;

/// One request received by the stand-in dish service.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Stand-in dish service answering every POST with a fixed status and body.
pub struct StubDishService {
    pub endpoint: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl StubDishService {
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    response_body: &'static str,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

async fn record_dish(
    State(stub): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    stub.received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });
    (stub.status, stub.response_body.to_string())
}

/// Start a stand-in dish service on an ephemeral port.
pub async fn spawn_dish_service(status: StatusCode, response_body: &'static str) -> StubDishService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/dishes/", post(record_dish))
        .with_state(StubState {
            status,
            response_body,
            received: received.clone(),
        });

    let addr = serve(app).await;
    StubDishService {
        endpoint: format!("http://{}/dishes/", addr),
        received,
    }
}

/// Start the dish form app, forwarding to `dishes_endpoint`. Returns its base URL.
pub async fn spawn_app(dishes_endpoint: &str) -> String {
    let client = HttpDishesClient::new(dishes_endpoint).expect("Failed to build client");
    let app = routes::router(AppState::new(client, dishes_endpoint));
    format!("http://{}", serve(app).await)
}

/// An address nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/dishes/", addr)
}

async fn serve(app: Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });
    addr
}
