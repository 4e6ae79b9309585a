//! Maps logical pull request operations onto HTTP request descriptors.

use reqwest::{Method, Url};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::request::{CreatePullRequest, ListPullsRequest, UpdatePullRequest};
use crate::transport::HttpRequest;

/// One logical operation on the pull request resource family, carrying the
/// typed parameters needed to build its HTTP request.
///
/// Reads encode parameters on the query string; create and update send JSON
/// bodies. [`Route::to_request`] is a pure function of the route and the
/// connection configuration.
#[derive(Debug, Clone)]
pub enum Route {
    /// GET `repos/{owner}/{repo}/pulls/{number}`
    Get {
        owner: String,
        repo: String,
        number: u64,
    },
    /// GET `repos/{owner}/{repo}/pulls`
    List {
        owner: String,
        repo: String,
        params: ListPullsRequest,
    },
    /// POST `repos/{owner}/{repo}/pulls`
    Create {
        owner: String,
        repo: String,
        params: CreatePullRequest,
    },
    /// PATCH `repos/{owner}/{repo}/pulls/{number}`
    Update {
        owner: String,
        repo: String,
        number: u64,
        params: UpdatePullRequest,
    },
}

impl Route {
    /// Build the fully-specified request descriptor for this route.
    pub fn to_request(&self, config: &ApiConfig) -> Result<HttpRequest> {
        let base = config.base_url()?;

        match self {
            Route::Get {
                owner,
                repo,
                number,
            } => {
                let url = pulls_url(&base, owner, repo, Some(*number))?;
                Ok(HttpRequest {
                    method: Method::GET,
                    url,
                    body: None,
                })
            }
            Route::List {
                owner,
                repo,
                params,
            } => {
                let mut url = pulls_url(&base, owner, repo, None)?;
                {
                    let mut query = url.query_pairs_mut();
                    query
                        .append_pair("state", params.state.as_str())
                        .append_pair("sort", params.sort.as_str())
                        .append_pair("direction", params.direction.as_str());

                    if let Some(base_branch) = &params.base {
                        query.append_pair("base", base_branch);
                    }
                    if let Some(head) = &params.head {
                        query.append_pair("head", head);
                    }
                    if let Some(per_page) = params.per_page {
                        query.append_pair("per_page", &per_page.to_string());
                    }
                    if let Some(page) = params.page {
                        query.append_pair("page", &page.to_string());
                    }
                }
                Ok(HttpRequest {
                    method: Method::GET,
                    url,
                    body: None,
                })
            }
            Route::Create {
                owner,
                repo,
                params,
            } => {
                let url = pulls_url(&base, owner, repo, None)?;
                let body = serde_json::to_string(params)?;
                Ok(HttpRequest {
                    method: Method::POST,
                    url,
                    body: Some(body),
                })
            }
            Route::Update {
                owner,
                repo,
                number,
                params,
            } => {
                let url = pulls_url(&base, owner, repo, Some(*number))?;
                let body = serde_json::to_string(params)?;
                Ok(HttpRequest {
                    method: Method::PATCH,
                    url,
                    body: Some(body),
                })
            }
        }
    }
}

/// Join `repos/{owner}/{repo}/pulls[/{number}]` onto the base URL with each
/// segment percent-encoded.
fn pulls_url(
    base: &Url,
    owner: &str,
    repo: &str,
    number: Option<u64>,
) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            Error::invalid_config(format!("base URL cannot hold a path: {base}"))
        })?;
        segments.pop_if_empty();
        segments.extend(["repos", owner, repo, "pulls"]);
        if let Some(number) = number {
            segments.push(&number.to_string());
        }
    }
    Ok(url)
}
