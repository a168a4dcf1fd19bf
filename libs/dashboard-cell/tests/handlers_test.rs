use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashboard_cell::router::dashboard_routes;
use resource_view::AppState;
use shared_models::dates::today_string;
use shared_utils::test_utils::{MockBackendResponses, TestConfig};

fn create_test_app(server: &MockServer) -> Router {
    let config = TestConfig::with_base_url(server.uri()).to_admin_config();
    dashboard_routes(Arc::new(AppState::new(config).unwrap()))
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn mount_stats(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/admin/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBackendResponses::dashboard_stats()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_dashboard_shows_four_counters() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let response = create_test_app(&server).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Total Patients</span><strong>120</strong>"));
    assert!(html.contains("Total Doctors</span><strong>14</strong>"));
    assert!(html.contains("Total Appointments</span><strong>356</strong>"));
    assert!(html.contains("Today's Appointments</span><strong>9</strong>"));
    assert!(html.contains("No appointments today"));
    assert!(!html.contains("error-banner\""));
}

#[tokio::test]
async fn test_today_table_uses_live_appointments() {
    let server = MockServer::start().await;
    mount_stats(&server).await;

    let amit = MockBackendResponses::patient(1, "UH1", "Amit", "Sharma", "9876500001");
    let neha = MockBackendResponses::patient(2, "UH2", "Neha", "Patel", "9876500002");
    let priya = MockBackendResponses::doctor(1, "Priya", "Singh", "Cardiology", "Cardiology");
    let raj = MockBackendResponses::doctor(2, "Raj", "Kumar", "Orthopedics", "Surgery");
    let today = today_string();
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::appointment(1, neha, raj, &today, "11:30", "Scheduled"),
            MockBackendResponses::appointment(2, amit.clone(), priya.clone(), &today, "10:00", "Completed"),
            MockBackendResponses::appointment(3, amit, priya, "2001-01-01", "09:00", "Scheduled"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let html = body_text(create_test_app(&server).oneshot(get("/")).await.unwrap()).await;

    let first = html.find("<td>10:00</td>").unwrap();
    let second = html.find("<td>11:30</td>").unwrap();
    assert!(first < second);
    assert!(html.contains("<td>Dr. Raj Kumar</td>"));
    assert!(!html.contains("<td>09:00</td>"));
}

#[tokio::test]
async fn test_stats_failure_shows_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/dashboard"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let response = create_test_app(&server).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Error loading dashboard: "));
    assert!(html.contains("database unavailable"));
    assert!(!html.contains("Total Patients"));
}

#[tokio::test]
async fn test_appointment_failure_only_empties_table() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let html = body_text(create_test_app(&server).oneshot(get("/")).await.unwrap()).await;

    assert!(html.contains("Total Patients</span><strong>120</strong>"));
    assert!(html.contains("No appointments today"));
}
