//! High-level client for the pull request endpoints.

use log::{debug, warn};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::request::{CreatePullRequest, ListPullsRequest, UpdatePullRequest};
use crate::router::Route;
use crate::transport::{HttpResponse, HttpTransport, Transport};
use crate::types::PullRequest;

/// Client for the `repos/{owner}/{repo}/pulls` resource family.
///
/// Each operation performs exactly one HTTP round trip through the
/// configured [`Transport`] and resolves once with either a decoded value
/// or an [`Error`]. The client keeps no cache and no session state beyond
/// the connection configuration.
pub struct PullsClient {
    config: ApiConfig,
    transport: Box<dyn Transport>,
}

impl PullsClient {
    /// Create a client backed by a real HTTP transport.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            config,
            transport: Box::new(transport),
        })
    }

    /// Create a client with an injected transport.
    ///
    /// Used by tests to substitute a mock; also the hook for callers that
    /// route requests through their own HTTP stack.
    pub fn with_transport(
        config: ApiConfig,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self { config, transport }
    }

    /// Fetch a single pull request by number.
    pub async fn get(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Result<PullRequest> {
        let owner = owner.into();
        let repo = repo.into();
        debug!("fetching pull request {owner}/{repo}#{number}");
        self.run(Route::Get {
            owner,
            repo,
            number,
        })
        .await
    }

    /// List pull requests, in the order the server returns them.
    pub async fn list(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        params: ListPullsRequest,
    ) -> Result<Vec<PullRequest>> {
        let owner = owner.into();
        let repo = repo.into();
        debug!("listing pull requests for {owner}/{repo}");
        self.run(Route::List {
            owner,
            repo,
            params,
        })
        .await
    }

    /// Open a new pull request and return the created record.
    pub async fn create(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        params: CreatePullRequest,
    ) -> Result<PullRequest> {
        let owner = owner.into();
        let repo = repo.into();
        debug!(
            "creating pull request {} -> {} in {owner}/{repo}",
            params.head, params.base
        );
        self.run(Route::Create {
            owner,
            repo,
            params,
        })
        .await
    }

    /// Update an existing pull request and return the new record.
    pub async fn update(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
        params: UpdatePullRequest,
    ) -> Result<PullRequest> {
        let owner = owner.into();
        let repo = repo.into();
        debug!("updating pull request {owner}/{repo}#{number}");
        self.run(Route::Update {
            owner,
            repo,
            number,
            params,
        })
        .await
    }

    async fn run<T: DeserializeOwned>(&self, route: Route) -> Result<T> {
        let request = route.to_request(&self.config)?;
        let url = request.url.clone();
        let response = self.transport.execute(request).await?;
        decode(&url, response)
    }
}

/// Turn a raw response into a decoded value or the matching error.
///
/// 404 maps to [`Error::NotFound`] with the requested URL for context;
/// any other non-2xx status carries the raw body so callers can inspect
/// the server's message.
fn decode<T: DeserializeOwned>(url: &Url, response: HttpResponse) -> Result<T> {
    if response.status.is_success() {
        return Ok(serde_json::from_str(&response.body)?);
    }

    warn!("{url} returned {}", response.status);

    if response.status == StatusCode::NOT_FOUND {
        return Err(Error::not_found(url.as_str()));
    }

    Err(Error::Status {
        status: response.status,
        body: response.body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpRequest, MockTransport};
    use crate::types::Openness;
    use reqwest::Method;

    fn client(mock: MockTransport) -> PullsClient {
        PullsClient::with_transport(ApiConfig::default(), Box::new(mock))
    }

    fn respond(status: StatusCode, body: &str) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    #[tokio::test]
    async fn get_decodes_pull_request() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|request: &HttpRequest| {
                request.method == Method::GET
                    && request.url.as_str()
                        == "https://api.github.com/repos/octo/hello-world/pulls/42"
                    && request.body.is_none()
            })
            .times(1)
            .returning(|_| {
                respond(
                    StatusCode::OK,
                    r#"{"id":1,"number":42,"state":"open"}"#,
                )
            });

        let client = client(mock);
        let pull = client.get("octo", "hello-world", 42).await.unwrap();

        assert_eq!(pull.id, 1);
        assert_eq!(pull.number, Some(42));
        assert_eq!(pull.state, Some(Openness::Open));
        assert!(pull.title.is_none());
        assert!(pull.user.is_none());
    }

    #[tokio::test]
    async fn get_missing_pull_is_not_found() {
        let mut mock = MockTransport::new();
        mock.expect_execute().returning(|_| {
            respond(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#)
        });

        let client = client(mock);
        let err = client.get("octo", "hello-world", 42).await.unwrap_err();

        match err {
            Error::NotFound(route) => assert!(route.contains("pulls/42")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_surfaces_status_and_body() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .returning(|_| respond(StatusCode::INTERNAL_SERVER_ERROR, "boom"));

        let client = client(mock);
        let err = client.get("octo", "hello-world", 42).await.unwrap_err();

        match err {
            Error::Status { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .returning(|_| respond(StatusCode::OK, "not json"));

        let client = client(mock);
        let err = client.get("octo", "hello-world", 42).await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test_log::test(tokio::test)]
    async fn list_sends_default_filters_and_preserves_order() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|request: &HttpRequest| {
                request.method == Method::GET
                    && request.url.path() == "/repos/octo/hello-world/pulls"
                    && request.url.query()
                        == Some("state=open&sort=created&direction=desc")
            })
            .times(1)
            .returning(|_| {
                respond(
                    StatusCode::OK,
                    r#"[{"id":2,"number":7},{"id":1,"number":3}]"#,
                )
            });

        let client = client(mock);
        let pulls = client
            .list("octo", "hello-world", ListPullsRequest::default())
            .await
            .unwrap();

        let ids: Vec<u64> = pulls.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn list_decodes_empty_array() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .returning(|_| respond(StatusCode::OK, "[]"));

        let client = client(mock);
        let pulls = client
            .list("octo", "hello-world", ListPullsRequest::default())
            .await
            .unwrap();

        assert!(pulls.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn create_posts_body_and_decodes_created() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|request: &HttpRequest| {
                let body: serde_json::Value =
                    serde_json::from_str(request.body.as_deref().unwrap())
                        .unwrap();
                request.method == Method::POST
                    && request.url.as_str()
                        == "https://api.github.com/repos/octo/hello-world/pulls"
                    && body["title"] == "Add feature"
                    && body["head"] == "feature"
                    && body["base"] == "main"
                    && body.get("body").is_none()
            })
            .times(1)
            .returning(|_| {
                respond(
                    StatusCode::CREATED,
                    r#"{"id":99,"number":5,"state":"open","title":"Add feature"}"#,
                )
            });

        let client = client(mock);
        let pull = client
            .create(
                "octo",
                "hello-world",
                CreatePullRequest::new("Add feature", "feature", "main"),
            )
            .await
            .unwrap();

        assert_eq!(pull.id, 99);
        assert_eq!(pull.number, Some(5));
        assert_eq!(pull.title.as_deref(), Some("Add feature"));
    }

    #[tokio::test]
    async fn update_patches_changed_fields() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|request: &HttpRequest| {
                request.method == Method::PATCH
                    && request.url.as_str()
                        == "https://api.github.com/repos/octo/hello-world/pulls/42"
                    && request.body.as_deref() == Some(r#"{"state":"closed"}"#)
            })
            .times(1)
            .returning(|_| {
                respond(
                    StatusCode::OK,
                    r#"{"id":1,"number":42,"state":"closed"}"#,
                )
            });

        let client = client(mock);
        let pull = client
            .update(
                "octo",
                "hello-world",
                42,
                UpdatePullRequest {
                    state: Some(Openness::Closed),
                    ..UpdatePullRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(pull.state, Some(Openness::Closed));
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .returning(|_| Err(Error::Transport("connection reset".into())));

        let client = client(mock);
        let err = client.get("octo", "hello-world", 42).await.unwrap_err();

        match err {
            Error::Transport(msg) => assert!(msg.contains("connection reset")),
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
