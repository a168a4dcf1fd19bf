use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use shared_config::AdminConfig;
use shared_models::ApiError;

/// JSON-over-HTTP access to the hospital backend. No retries, no caching,
/// no auth headers.
#[derive(Clone)]
pub struct HospitalApiClient {
    client: Client,
    base_url: String,
}

impl HospitalApiClient {
    pub fn new(config: &AdminConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(Self::default_headers())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`request`](Self::request) but ignores whatever body comes back.
    pub async fn request_discarding<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await?;
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Body-less PATCH; whatever the backend echoes back is ignored.
    pub async fn patch(&self, path: &str) -> Result<(), ApiError> {
        self.request_discarding::<()>(Method::PATCH, path, None).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request_discarding::<()>(Method::DELETE, path, None).await
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url);

        if let Some(body_data) = body {
            req = req.json(body_data);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(match status {
                StatusCode::NOT_FOUND => ApiError::NotFound(error_text),
                _ => ApiError::Status {
                    status: status.as_u16(),
                    body: error_text,
                },
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HospitalApiClient {
        HospitalApiClient::new(&AdminConfig::for_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_patients": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let value: Value = client_for(&server).get("/admin/dashboard").await.unwrap();
        assert_eq!(value["total_patients"], 3);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/patients"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"first_name": "Neha"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let value: Value = client_for(&server)
            .post("/patients", &json!({"first_name": "Neha"}))
            .await
            .unwrap();
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doctors/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Doctor not found"))
            .mount(&server)
            .await;

        let err = client_for(&server).get::<Value>("/doctors/99").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/patients/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).delete("/patients/1").await.unwrap_err();
        assert_matches!(err, ApiError::Status { status: 500, ref body } if body == "boom");
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/patients"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get::<Vec<Value>>("/patients").await.unwrap_err();
        assert_matches!(err, ApiError::Decode(_));
    }

    #[tokio::test]
    async fn test_patch_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/appointments/4/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .patch("/appointments/4/status?status=Completed")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let client = HospitalApiClient::new(&AdminConfig::for_base_url("http://127.0.0.1:1")).unwrap();
        let err = client.get::<Value>("/patients").await.unwrap_err();
        assert_matches!(err, ApiError::Transport(_));
    }
}
