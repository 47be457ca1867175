use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::dish::DishRecord;

/// Remote collaborator that stores dish records.
#[async_trait]
pub trait DishesApi: Send + Sync {
    /// Create one dish. The success body is returned as-is and not inspected.
    async fn create_dish(&self, record: &DishRecord) -> Result<serde_json::Value, DishesApiError>;
}

/// Client for the dish collection endpoint.
pub struct HttpDishesClient {
    http: Client,
    endpoint: String,
}

/// Error body the dish service sends with a rejection.
#[derive(Deserialize)]
struct RejectionBody {
    code: Option<serde_json::Value>,
    message: Option<String>,
}

impl HttpDishesClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DishesApiError> {
        let http = Client::builder()
            .user_agent(concat!("dish-form/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl DishesApi for HttpDishesClient {
    async fn create_dish(&self, record: &DishRecord) -> Result<serde_json::Value, DishesApiError> {
        info!(endpoint = %self.endpoint, dish_type = %record.details.dish_type(), "Posting dish");

        // `.json()` sets `Content-Type: application/json`.
        let response = self.http.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "Dish service responded");

        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Build a rejection from a non-2xx response, preferring the service's own
/// `code` and `message` over the HTTP status.
fn rejection(status: StatusCode, body: &[u8]) -> DishesApiError {
    let parsed = serde_json::from_slice::<RejectionBody>(body).ok();
    let (code, message) = match parsed {
        Some(RejectionBody { code, message }) => (code, message),
        None => (None, None),
    };

    let code = match code {
        Some(serde_json::Value::String(code)) => code,
        Some(serde_json::Value::Null) | None => status.as_u16().to_string(),
        Some(other) => other.to_string(),
    };
    let message = message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request rejected")
            .to_string()
    });

    DishesApiError::Rejected { code, message }
}

#[derive(Debug, thiserror::Error)]
pub enum DishesApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse dish service response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dish service rejected the request: {message} (code {code})")]
    Rejected { code: String, message: String },
}

impl DishesApiError {
    /// Code shown next to the error message.
    pub fn code(&self) -> String {
        match self {
            DishesApiError::Http(err) if err.is_timeout() => "TIMEOUT".to_string(),
            DishesApiError::Http(err) if err.is_connect() => "CONNECT".to_string(),
            DishesApiError::Http(_) => "NETWORK".to_string(),
            DishesApiError::Parse(_) => "PARSE".to_string(),
            DishesApiError::Rejected { code, .. } => code.clone(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            DishesApiError::Http(err) => err.to_string(),
            DishesApiError::Parse(err) => err.to_string(),
            DishesApiError::Rejected { message, .. } => message.clone(),
        }
    }
}
