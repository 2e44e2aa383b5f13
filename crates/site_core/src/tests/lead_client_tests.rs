use super::*;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct CapturedPost {
    content_type: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct EndpointState {
    respond_with: StatusCode,
    delay: Duration,
    captured: Arc<Mutex<Vec<CapturedPost>>>,
}

async fn collect(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.captured.lock().await.push(CapturedPost {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    });
    state.respond_with
}

async fn spawn_collection_endpoint(
    respond_with: StatusCode,
    delay: Duration,
) -> anyhow::Result<(Url, Arc<Mutex<Vec<CapturedPost>>>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        respond_with,
        delay,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/f/test-form", post(collect))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((Url::parse(&format!("http://{addr}/f/test-form"))?, captured))
}

#[tokio::test]
async fn posts_email_as_json_and_accepts_ok_status() {
    let (endpoint, captured) = spawn_collection_endpoint(StatusCode::OK, Duration::ZERO)
        .await
        .expect("endpoint");
    let sink = HttpLeadSink::new(endpoint);

    sink.submit(&LeadCaptureRequest::new("ceo@example.com"))
        .await
        .expect("accepted");

    let captured = captured.lock().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured[0].body,
        serde_json::json!({ "email": "ceo@example.com" })
    );
    assert_eq!(captured[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn any_2xx_counts_as_success() {
    let (endpoint, _) = spawn_collection_endpoint(StatusCode::ACCEPTED, Duration::ZERO)
        .await
        .expect("endpoint");
    let result = HttpLeadSink::new(endpoint)
        .submit(&LeadCaptureRequest::new("ceo@example.com"))
        .await;
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn non_ok_status_is_reported_as_rejected() {
    let (endpoint, captured) =
        spawn_collection_endpoint(StatusCode::UNPROCESSABLE_ENTITY, Duration::ZERO)
            .await
            .expect("endpoint");
    let result = HttpLeadSink::new(endpoint)
        .submit(&LeadCaptureRequest::new("ceo@example.com"))
        .await;

    assert_eq!(result, Err(SubmitError::Rejected { status: 422 }));
    assert_eq!(captured.lock().await.len(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_reported_as_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/f/test-form")).expect("url");
    let result = HttpLeadSink::new(endpoint)
        .submit(&LeadCaptureRequest::new("ceo@example.com"))
        .await;

    assert!(matches!(result, Err(SubmitError::Network(_))), "{result:?}");
}

#[tokio::test]
async fn configured_timeout_turns_a_hung_endpoint_into_network_error() {
    let (endpoint, _) = spawn_collection_endpoint(StatusCode::OK, Duration::from_secs(5))
        .await
        .expect("endpoint");
    let result = HttpLeadSink::new(endpoint)
        .with_timeout(Some(Duration::from_millis(100)))
        .submit(&LeadCaptureRequest::new("ceo@example.com"))
        .await;

    assert!(matches!(result, Err(SubmitError::Network(_))), "{result:?}");
}
