use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use patient_cell::router::patient_routes;
use resource_view::AppState;
use shared_utils::test_utils::{MockBackendResponses, TestConfig};

fn create_test_app(server: &MockServer) -> Router {
    let config = TestConfig::with_base_url(server.uri()).to_admin_config();
    patient_routes(Arc::new(AppState::new(config).unwrap()))
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn mount_patients(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBackendResponses::patients()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_list_renders_all_patients() {
    let server = MockServer::start().await;
    mount_patients(&server, 1).await;

    let response = create_test_app(&server).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Amit Sharma"));
    assert!(html.contains("Neha Patel"));
    assert!(html.contains("Admin User"));
    assert!(!html.contains("class=\"modal\""));
}

#[tokio::test]
async fn test_search_filters_rows() {
    let server = MockServer::start().await;
    mount_patients(&server, 1).await;

    let response = create_test_app(&server).oneshot(get("/?search=sharma")).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("Amit Sharma"));
    assert!(!html.contains("Neha Patel"));
}

#[tokio::test]
async fn test_backend_failure_renders_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = create_test_app(&server).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No patients found"));
}

#[tokio::test]
async fn test_new_form_opens_empty_modal() {
    let server = MockServer::start().await;
    mount_patients(&server, 1).await;

    let response = create_test_app(&server).oneshot(get("/?form=new")).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("Add New Patient"));
    assert!(html.contains("action=\"/patients\""));
}

#[tokio::test]
async fn test_edit_form_is_prefilled_with_date_only() {
    let server = MockServer::start().await;
    mount_patients(&server, 1).await;

    let response = create_test_app(&server).oneshot(get("/?edit=2")).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("Edit Patient"));
    assert!(html.contains("action=\"/patients/2\""));
    assert!(html.contains("name=\"date_of_birth\" value=\"1990-06-15\""));
    assert!(html.contains("name=\"first_name\" value=\"Neha\""));
}

#[tokio::test]
async fn test_create_posts_once_and_reloads_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patients"))
        .and(body_json(json!({
            "first_name": "Ravi",
            "last_name": "Iyer",
            "gender": "Male",
            "date_of_birth": "1979-11-02",
            "age": 45,
            "phone": "9000000003",
            "email": null,
            "address": null,
            "city": "Chennai",
            "state": null,
            "pincode": null,
            "emergency_contact": null,
            "blood_group": "AB+"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::patient(3, "UH3", "Ravi", "Iyer", "9000000003"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_patients(&server, 1).await;

    let body = "first_name=Ravi&last_name=Iyer&gender=Male&date_of_birth=1979-11-02&age=45\
&phone=9000000003&email=&address=&city=Chennai&state=&pincode=&emergency_contact=&blood_group=AB%2B";
    let response = create_test_app(&server).oneshot(form_post("/", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("class=\"modal\""));
}

#[tokio::test]
async fn test_failed_create_keeps_modal_with_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patients"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(MockBackendResponses::error_response("value is not a valid email address")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_patients(&server, 1).await;

    let body = "first_name=Ravi&last_name=Iyer&gender=Male&date_of_birth=1979-11-02&age=45&phone=9000000003&email=bad";
    let response = create_test_app(&server).oneshot(form_post("/", body)).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("Add New Patient"));
    assert!(html.contains("name=\"first_name\" value=\"Ravi\""));
    assert!(html.contains("name=\"email\" value=\"bad\""));
    assert!(!html.contains("valid email"));
}

#[tokio::test]
async fn test_update_puts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/patients/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::patient(2, "UH2", "Neha", "Patel", "9876500099"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_patients(&server, 1).await;

    let body = "first_name=Neha&last_name=Patel&gender=Female&date_of_birth=1990-06-15&age=34&phone=9876500099";
    let response = create_test_app(&server).oneshot(form_post("/2", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_confirm_page_asks_before_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::patient(1, "UH1", "Amit", "Sharma", "9876500001"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = create_test_app(&server).oneshot(get("/1/delete")).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("Are you sure you want to delete this patient?"));
    assert!(html.contains("Amit Sharma"));
}

#[tokio::test]
async fn test_declined_delete_redirects_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    mount_patients(&server, 0).await;

    let response = create_test_app(&server)
        .oneshot(form_post("/1/delete", "confirm=no"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/patients");
}

#[tokio::test]
async fn test_confirmed_delete_then_reload() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/patients/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    mount_patients(&server, 1).await;

    let response = create_test_app(&server)
        .oneshot(form_post("/1/delete", "confirm=yes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let server = MockServer::start().await;
    let response = create_test_app(&server).oneshot(get("/0/delete")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
