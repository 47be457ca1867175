//! End-to-end tests: the form app served in-process, forwarding to a
//! stand-in dish service.

mod helpers;

use axum::http::StatusCode;
use helpers::*;

const MARGHERITA: [(&str, &str); 5] = [
    ("name", "Margherita"),
    ("preparation_time", "00:20:00"),
    ("type", "pizza"),
    ("no_of_slices", "8"),
    ("diameter", "30"),
];

async fn post_form(base_url: &str, fields: &[(&str, &str)]) -> String {
    let response = reqwest::Client::new()
        .post(format!("{}/", base_url))
        .form(fields)
        .send()
        .await
        .expect("Form post failed");
    assert!(response.status().is_success());
    response.text().await.unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let body: serde_json::Value = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Health check failed")
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["dishes_endpoint"], service.endpoint.as_str());
}

#[tokio::test]
async fn test_empty_form_page() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let html = reqwest::get(format!("{}/", base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"placeholder="hh:mm:ss""#));
    assert!(html.contains("Submit"));
    assert!(!html.contains("Success!"));
}

#[tokio::test]
async fn test_valid_pizza_submitted() {
    let service = spawn_dish_service(StatusCode::CREATED, r#"{"id": 1}"#).await;
    let base_url = spawn_app(&service.endpoint).await;

    let html = post_form(&base_url, &MARGHERITA).await;
    assert!(html.contains("Success!"));
    assert!(!html.contains("Code:"));

    let received = service.received();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].body,
        serde_json::json!({
            "name": "Margherita",
            "preparation_time": "00:20:00",
            "type": "pizza",
            "no_of_slices": 8,
            "diameter": 30.0,
        })
    );
}

#[tokio::test]
async fn test_blank_name_never_reaches_service() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let mut fields = MARGHERITA;
    fields[0] = ("name", "   ");
    let html = post_form(&base_url, &fields).await;

    assert!(html.contains("Please enter the name of the dish"));
    assert!(!html.contains("Success!"));
    assert!(service.received().is_empty());
}

#[tokio::test]
async fn test_rejection_displayed() {
    let service = spawn_dish_service(
        StatusCode::BAD_REQUEST,
        r#"{"code": 400, "message": "Bad Request"}"#,
    )
    .await;
    let base_url = spawn_app(&service.endpoint).await;

    let html = post_form(&base_url, &MARGHERITA).await;
    assert!(html.contains("Code: 400"));
    assert!(html.contains("Error: Bad Request"));
    assert!(!html.contains("Success!"));
}

#[tokio::test]
async fn test_fields_of_other_types_not_sent() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let html = post_form(
        &base_url,
        &[
            ("name", "Minestrone"),
            ("preparation_time", "00:40:00"),
            ("type", "soup"),
            ("no_of_slices", "8"),
            ("diameter", "30"),
            ("spiciness_scale", "2"),
        ],
    )
    .await;
    assert!(html.contains("Success!"));

    let body = &service.received()[0].body;
    assert_eq!(body["type"], "soup");
    assert_eq!(body["spiciness_scale"], 2);
    assert!(body.get("no_of_slices").is_none());
    assert!(body.get("diameter").is_none());
}

#[tokio::test]
async fn test_preparation_time_keystrokes() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;
    let client = reqwest::Client::new();

    let check = |value: &'static str| {
        let client = client.clone();
        let url = format!("{}/api/v1/preparation-time", base_url);
        async move {
            client
                .post(url)
                .json(&serde_json::json!({ "value": value }))
                .send()
                .await
                .unwrap()
                .json::<serde_json::Value>()
                .await
                .unwrap()
        }
    };

    let partial = check("1234").await;
    assert_eq!(partial["formatted"], "12:34");
    assert_eq!(partial["status"], "neutral");
    assert!(partial["help"].is_null());

    let quirk = check("236060").await;
    assert_eq!(quirk["formatted"], "23:60:60");
    assert_eq!(quirk["status"], "success");

    let invalid = check("24:00:00").await;
    assert_eq!(invalid["status"], "error");
    assert_eq!(
        invalid["help"],
        "Invalid preparation time. The acceptable range for hours is 0 to 23, and for minutes and seconds it is 0 to 60"
    );
}

#[tokio::test]
async fn test_nan_diameter_never_sent() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let mut fields = MARGHERITA;
    fields[4] = ("diameter", "NaN");
    let html = post_form(&base_url, &fields).await;

    assert!(html.contains("must be a finite number"));
    assert!(!html.contains("Success!"));
    assert!(service.received().is_empty());
}

#[tokio::test]
async fn test_out_of_range_counts_get_range_messages() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let soup = post_form(
        &base_url,
        &[
            ("name", "Chili"),
            ("preparation_time", "01:00:00"),
            ("type", "soup"),
            ("spiciness_scale", "300"),
        ],
    )
    .await;
    assert!(soup.contains(r#"value="300""#));
    assert!(!soup.contains("Please enter the Spiciness"));

    let sandwich = post_form(
        &base_url,
        &[
            ("name", "Club"),
            ("preparation_time", "00:05:00"),
            ("type", "sandwich"),
            ("slices_of_bread", "-1"),
        ],
    )
    .await;
    assert!(sandwich.contains(r#"value="-1""#));
    assert!(!sandwich.contains("Please enter the number of slices"));

    assert!(service.received().is_empty());
}

#[tokio::test]
async fn test_form_assets_served() {
    let service = spawn_dish_service(StatusCode::OK, "{}").await;
    let base_url = spawn_app(&service.endpoint).await;

    let script = reqwest::get(format!("{}/static/form.js", base_url))
        .await
        .unwrap();
    assert_eq!(
        script.headers()["content-type"],
        "text/javascript; charset=utf-8"
    );
    assert!(script.text().await.unwrap().contains("/api/v1/preparation-time"));

    let style = reqwest::get(format!("{}/static/form.css", base_url))
        .await
        .unwrap();
    assert_eq!(style.headers()["content-type"], "text/css; charset=utf-8");
}
