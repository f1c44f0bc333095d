#![cfg(feature = "http_api")]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use jetlag_planner::http_api::{self, PlanResponse};
use jetlag_planner::{Direction, PlannerConfig};
use serde_json::json;
use tower::util::ServiceExt;

fn new_router() -> axum::Router {
    let state = http_api::AppState::new(PlannerConfig::default());
    http_api::router(state)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = new_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn schedule_endpoint_returns_plan_and_rows() {
    let payload = json!({
        "departure": "2024-03-01T22:00",
        "arrival": "2024-03-02T08:00",
        "strategy": "after-arrival",
        "bedtime": "23:00",
        "wake_time": "07:00",
        "departure_city": "London",
        "arrival_city": "Tokyo"
    });
    let response = new_router()
        .oneshot(json_request("POST", "/schedule", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let plan: PlanResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(plan.result.time_zone_difference_hours, 10);
    assert_eq!(plan.result.direction, Direction::Ahead);
    assert_eq!(plan.summary, "+10h (ahead)");
    assert_eq!(plan.rows.len(), 5);
    assert_eq!(plan.rows[0].day, "Sat, Mar 2");
    assert_eq!(plan.rows[0].bedtime, "01:00");
    assert_eq!(plan.labels.arrival_city.as_deref(), Some("Tokyo"));
    assert!(plan.table.contains("London -> Tokyo"));
}

#[tokio::test]
async fn malformed_trip_is_bad_request() {
    let payload = json!({ "departure": "soon", "arrival": "2024-03-02T08:00" });
    let response = new_router()
        .oneshot(json_request("POST", "/schedule", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], json!("invalid_request"));
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("departure")
    );
}

#[tokio::test]
async fn config_update_changes_defaults_for_later_plans() {
    let app = new_router();

    let mut config = PlannerConfig::default();
    config.default_bedtime = chrono::NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/config",
            serde_json::to_value(&config).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/config").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(read_json(response).await["default_bedtime"], json!("22:00:00"));

    let payload = json!({
        "departure": "2024-03-01T12:00",
        "arrival": "2024-03-01T12:00"
    });
    let response = app
        .oneshot(json_request("POST", "/schedule", payload))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["rows"][0]["bedtime"], json!("22:00"));
    assert_eq!(body["result"]["direction"], json!("behind"));
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let mut config = PlannerConfig::default();
    config.default_wake_time = config.default_bedtime;
    let response = new_router()
        .oneshot(json_request(
            "PUT",
            "/config",
            serde_json::to_value(&config).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let response = new_router()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"], json!("not_found"));
    assert!(body["message"].as_str().unwrap_or_default().contains("/nope"));
}

#[tokio::test]
async fn unparseable_body_is_json_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/schedule")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = new_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], json!("invalid_request"));
}
