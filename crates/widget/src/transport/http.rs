//! reqwest-backed transport.

use async_trait::async_trait;
use events_widget_core::transport::{HttpRequest, Transport, TransportError, TransportResponse};

/// Transport performing real HTTP requests with reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing client, e.g. one with custom TLS or proxy settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<TransportResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in request.headers() {
            builder = builder.header(*name, *value);
        }
        if let Some(data) = &request.data {
            builder = builder.body(data.clone());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(TransportResponse::done(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::get,
        Router,
    };
    use events_widget_core::transport::Method;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn request(method: Method, url: String, data: Option<&str>) -> HttpRequest {
        HttpRequest {
            method,
            url,
            data: data.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let base = serve(Router::new().route("/events/", get(|| async { r#"{"events":[]}"# }))).await;

        let response = ReqwestTransport::new()
            .send(&request(Method::Get, format!("{}/events/", base), None))
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.body, r#"{"events":[]}"#);
    }

    #[tokio::test]
    async fn test_error_status_is_a_completion() {
        let base = serve(Router::new().route(
            "/events/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        ))
        .await;

        let response = ReqwestTransport::new()
            .send(&request(Method::Get, format!("{}/events/", base), None))
            .await
            .unwrap();

        assert!(!response.is_success());
        assert_eq!(response.status, 503);
        assert_eq!(response.body, "down");
    }

    #[tokio::test]
    async fn test_post_sends_form_headers_and_body() {
        let base = serve(Router::new().route(
            "/events/",
            axum::routing::post(|headers: HeaderMap, body: String| async move {
                let requested_with = headers
                    .get("x-requested-with")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                format!("{}|{}|{}", requested_with, content_type, body)
            }),
        ))
        .await;

        let response = ReqwestTransport::new()
            .send(&request(
                Method::Post,
                format!("{}/events/", base),
                Some("name=Gala"),
            ))
            .await
            .unwrap();

        assert_eq!(
            response.body,
            "XMLHttpRequest|application/x-www-form-urlencoded|name=Gala"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = ReqwestTransport::new()
            .send(&request(Method::Get, format!("http://{}/", addr), None))
            .await;

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_invalid_request() {
        let result = ReqwestTransport::new()
            .send(&request(Method::Get, "not a url".to_string(), None))
            .await;

        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }
}
