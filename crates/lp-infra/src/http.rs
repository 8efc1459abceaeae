//! HTTP adapter for the onboarding-link endpoint.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use lp_core::onboarding::{OnboardingLinkResponse, OnboardingRequest};
use lp_core::ports::{OnboardingLinkError, OnboardingLinkPort};

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid page origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot resolve endpoint {path:?}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Resolve a same-origin endpoint path against the page origin.
///
/// Absolute endpoints are returned unchanged.
pub fn resolve_endpoint(origin: &str, path: &str) -> Result<Url, EndpointError> {
    let base = Url::parse(origin).map_err(|source| EndpointError::InvalidOrigin {
        origin: origin.to_string(),
        source,
    })?;
    base.join(path).map_err(|source| EndpointError::InvalidPath {
        path: path.to_string(),
        source,
    })
}

/// POSTs `{"user_id": ...}` as JSON and decodes `{"url": ...}`.
pub struct ReqwestOnboardingLinkClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestOnboardingLinkClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OnboardingLinkPort for ReqwestOnboardingLinkClient {
    async fn post_request(
        &self,
        request: &OnboardingRequest,
    ) -> Result<OnboardingLinkResponse, OnboardingLinkError> {
        debug!(endpoint = %self.endpoint, user_id = %request.user_id, "requesting onboarding link");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| OnboardingLinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "onboarding endpoint rejected request");
            return Err(OnboardingLinkError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OnboardingLinkError::Transport(e.to_string()))?;
        serde_json::from_slice(&body)
            .map_err(|e| OnboardingLinkError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn request(user_id: &str) -> OnboardingRequest {
        OnboardingRequest {
            user_id: user_id.to_string(),
        }
    }

    fn client_for(server: &Server) -> ReqwestOnboardingLinkClient {
        let endpoint = resolve_endpoint(&server.url(), "/pay/stripe/onboard-link").unwrap();
        ReqwestOnboardingLinkClient::new(endpoint)
    }

    #[test]
    fn resolve_endpoint_joins_relative_path() {
        let url = resolve_endpoint("https://shop.example", "/pay/stripe/onboard-link").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/pay/stripe/onboard-link");
    }

    #[test]
    fn resolve_endpoint_keeps_absolute_url() {
        let url = resolve_endpoint("https://shop.example", "https://api.example/link").unwrap();
        assert_eq!(url.as_str(), "https://api.example/link");
    }

    #[test]
    fn resolve_endpoint_rejects_opaque_origin() {
        let err = resolve_endpoint("null", "/pay/stripe/onboard-link").unwrap_err();
        assert!(matches!(err, EndpointError::InvalidOrigin { .. }));
    }

    #[tokio::test]
    async fn posts_user_id_and_returns_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/pay/stripe/onboard-link")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({ "user_id": "user-42" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"https://connect.stripe.com/setup/abc"}"#)
            .create_async()
            .await;

        let link = client_for(&server)
            .request_link(&request("user-42"))
            .await
            .expect("link should be returned");

        mock.assert_async().await;
        assert_eq!(link.as_str(), "https://connect.stripe.com/setup/abc");
    }

    #[tokio::test]
    async fn non_success_status_is_status_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/pay/stripe/onboard-link")
            .with_status(500)
            .with_body(r#"{"error":"boom"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .request_link(&request("demo"))
            .await
            .unwrap_err();

        assert!(matches!(err, OnboardingLinkError::Status { status: 500 }));
        assert_eq!(
            err.user_message().as_deref(),
            Some("Could not create onboarding link")
        );
    }

    #[tokio::test]
    async fn success_without_url_is_missing_url() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/pay/stripe/onboard-link")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let err = client_for(&server)
            .request_link(&request("demo"))
            .await
            .unwrap_err();

        assert!(matches!(err, OnboardingLinkError::MissingUrl));
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/pay/stripe/onboard-link")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .request_link(&request("demo"))
            .await
            .unwrap_err();

        assert!(matches!(err, OnboardingLinkError::InvalidResponse(_)));
        assert_eq!(err.user_message(), None);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let endpoint = resolve_endpoint("http://127.0.0.1:1", "/pay/stripe/onboard-link").unwrap();
        let client = ReqwestOnboardingLinkClient::new(endpoint);

        let err = client.request_link(&request("demo")).await.unwrap_err();

        assert!(matches!(err, OnboardingLinkError::Transport(_)));
        assert!(err.user_message().is_some());
    }
}
