use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use foodmap_core::{
    domain::{
        common::{ApiConfig, entities::app_errors::CoreError},
        submission::{
            entities::{Field, FormState},
            ports::ApiClient,
            services::FormController,
            value_objects::RESTAURANTS_PATH,
        },
    },
    infrastructure::http::ReqwestApiClient,
};
use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

fn client(base_url: &str, timeout: Duration) -> ReqwestApiClient {
    ReqwestApiClient::new(ApiConfig::from_base_url(Some(base_url), timeout).unwrap()).unwrap()
}

async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    (
        StatusCode::CREATED,
        Json(json!({ "id": "r-1", "contentType": content_type, "received": body })),
    )
}

#[tokio::test]
async fn test_post_json_returns_decoded_body() {
    let base_url = serve(Router::new().route(RESTAURANTS_PATH, post(echo))).await;
    let api_client = client(&base_url, Duration::from_secs(5));

    let response = api_client
        .post_json(RESTAURANTS_PATH, json!({ "name": "학식당" }))
        .await
        .unwrap();

    assert_eq!(response["id"], "r-1");
    assert_eq!(response["contentType"], "application/json");
    assert_eq!(response["received"], json!({ "name": "학식당" }));
}

#[tokio::test]
async fn test_post_json_empty_success_body_is_null() {
    let router = Router::new().route(RESTAURANTS_PATH, post(|| async { StatusCode::NO_CONTENT }));
    let base_url = serve(router).await;

    let response = client(&base_url, Duration::from_secs(5))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap();

    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn test_post_json_rejection_carries_server_message() {
    let router = Router::new().route(
        RESTAURANTS_PATH,
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({ "message": "duplicate entry" })),
            )
        }),
    );
    let base_url = serve(router).await;

    let error = client(&base_url, Duration::from_secs(5))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        CoreError::Rejected {
            status: 409,
            message: Some("duplicate entry".to_string()),
        }
    );
    assert_eq!(error.user_message(), "duplicate entry");
}

#[tokio::test]
async fn test_post_json_rejection_without_json_body() {
    let router = Router::new().route(
        RESTAURANTS_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = serve(router).await;

    let error = client(&base_url, Duration::from_secs(5))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        CoreError::Rejected {
            status: 500,
            message: None,
        }
    );
}

#[tokio::test]
async fn test_post_json_rejection_with_truncated_body_keeps_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.ends_with(b"{}") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 409 Conflict\r\nContent-Length: 100\r\n\r\n{\"mess")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let error = client(&format!("http://{addr}"), Duration::from_secs(5))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        CoreError::Rejected {
            status: 409,
            message: None,
        }
    );
}

#[tokio::test]
async fn test_post_json_invalid_success_body() {
    let router = Router::new().route(RESTAURANTS_PATH, post(|| async { "created" }));
    let base_url = serve(router).await;

    let error = client(&base_url, Duration::from_secs(5))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap_err();

    assert!(matches!(error, CoreError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_post_json_times_out() {
    let router = Router::new().route(
        RESTAURANTS_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::CREATED
        }),
    );
    let base_url = serve(router).await;

    let error = client(&base_url, Duration::from_millis(100))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap_err();

    assert_eq!(error, CoreError::Timeout);
}

#[tokio::test]
async fn test_post_json_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = client(&format!("http://{addr}"), Duration::from_secs(5))
        .post_json(RESTAURANTS_PATH, json!({}))
        .await
        .unwrap_err();

    assert!(matches!(error, CoreError::Network(_)));
}

#[tokio::test]
async fn test_form_controller_submits_through_http_client() {
    let base_url = serve(Router::new().route(RESTAURANTS_PATH, post(echo))).await;
    let mut controller = FormController::new(client(&base_url, Duration::from_secs(5)));

    controller.set_field(Field::Name, "학식당").unwrap();
    controller.set_field(Field::Category, "korean").unwrap();
    controller.set_field(Field::Location, "학생회관").unwrap();
    controller.set_field(Field::SubmitterEmail, "kim@campus.ac.kr").unwrap();

    let ack = controller.submit().await.unwrap();

    assert_eq!(controller.state(), FormState::Submitted);
    assert_eq!(
        ack["received"],
        json!({
            "name": "학식당",
            "category": "한식",
            "location": "학생회관",
            "priceRange": null,
            "recommendedMenu": [],
            "review": null,
            "submitter": { "name": null, "email": "kim@campus.ac.kr" }
        })
    );
}
