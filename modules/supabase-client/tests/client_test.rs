//! Insert tests against an in-process stub of the PostgREST endpoint.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use supabase_client::{SupabaseClient, SupabaseError};

#[derive(Debug, Clone)]
struct Captured {
    table: String,
    headers: HeaderMap,
    body: Value,
}

type Captures = Arc<Mutex<Vec<Captured>>>;

#[derive(Serialize)]
struct Row {
    name: &'static str,
    image_url: Option<&'static str>,
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn capture(
    State(captures): State<Captures>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    captures.lock().unwrap().push(Captured {
        table,
        headers,
        body,
    });
    StatusCode::CREATED
}

#[tokio::test]
async fn insert_sends_credentials_preference_and_array_body() {
    let captures: Captures = Arc::default();
    let app = Router::new()
        .route("/rest/v1/{table}", post(capture))
        .with_state(captures.clone());
    let base = serve(app).await;

    let client = SupabaseClient::new(&base, "anon-key");
    let rows = [
        Row {
            name: "Lampang",
            image_url: None,
        },
        Row {
            name: "Nakhon Lampang",
            image_url: Some("https://x/a.jpg"),
        },
    ];
    client.insert("places", &rows).await.unwrap();

    let captured = captures.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let req = &captured[0];
    assert_eq!(req.table, "places");
    assert_eq!(req.headers["apikey"], "anon-key");
    assert_eq!(req.headers["authorization"], "Bearer anon-key");
    assert_eq!(req.headers["content-type"], "application/json");
    assert_eq!(req.headers["prefer"], "return=minimal");
    assert_eq!(
        req.body,
        json!([
            { "name": "Lampang", "image_url": null },
            { "name": "Nakhon Lampang", "image_url": "https://x/a.jpg" }
        ])
    );
}

#[tokio::test]
async fn rejected_insert_returns_status_and_body() {
    let app = Router::new().route(
        "/rest/v1/{table}",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                r#"{"code":"PGRST204","message":"Could not find the 'type' column"}"#,
            )
        }),
    );
    let base = serve(app).await;

    let err = SupabaseClient::new(&base, "anon-key")
        .insert("places", &[Row { name: "A", image_url: None }])
        .await
        .unwrap_err();

    match err {
        SupabaseError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("PGRST204"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_store_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = SupabaseClient::new(&format!("http://{addr}"), "anon-key")
        .insert("places", &[Row { name: "A", image_url: None }])
        .await
        .unwrap_err();

    assert!(matches!(err, SupabaseError::Network(_)));
}

#[test]
fn table_url_strips_trailing_slash() {
    let client = SupabaseClient::new("https://abc.supabase.co/", "k");
    assert_eq!(client.table_url("places"), "https://abc.supabase.co/rest/v1/places");
}
