use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use dashboard_cell::router::dashboard_routes;
use doctor_cell::router::doctor_routes;
use medical_record_cell::router::medical_record_routes;
use patient_cell::router::patient_routes;
use resource_view::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "Hospital admin console is running!" }))
        .merge(dashboard_routes(state.clone()))
        .nest("/patients", patient_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/medical-records", medical_record_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use shared_utils::test_utils::{MockBackendResponses, TestConfig};

    fn app_for(server: &MockServer) -> Router {
        let config = TestConfig::with_base_url(server.uri()).to_admin_config();
        create_router(Arc::new(AppState::new(config).unwrap()))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_needs_no_backend() {
        let server = MockServer::start().await;
        let response = app_for(&server).oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Hospital admin console is running!");
    }

    #[tokio::test]
    async fn test_screens_mark_their_nav_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(MockBackendResponses::dashboard_stats()))
            .mount(&server)
            .await;
        for list in ["/appointments", "/patients", "/doctors"] {
            Mock::given(method("GET"))
                .and(path(list))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .mount(&server)
                .await;
        }

        let app = app_for(&server);
        for (uri, active) in [
            ("/", "/"),
            ("/patients", "/patients"),
            ("/doctors", "/doctors"),
            ("/appointments", "/appointments"),
            ("/medical-records", "/medical-records"),
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);

            let html = body_text(response).await;
            assert!(html.contains(&format!("<a href=\"{}\" class=\"active\">", active)), "{}", uri);
            assert!(html.contains("Admin User"));
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let server = MockServer::start().await;
        let response = app_for(&server).oneshot(get("/billing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
