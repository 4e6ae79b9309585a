//! Typed inputs for pull request operations.
//!
//! Optional fields left unset never reach the wire: list queries skip the
//! pair entirely and JSON bodies skip the key, rather than sending empty
//! strings or nulls.

use serde::Serialize;

use crate::types::{Openness, Sort, SortDirection};

/// Filters for listing pull requests.
///
/// `state`, `sort`, and `direction` always go out on the query string;
/// `Default` yields open pull requests sorted by creation date, newest
/// first. The remaining fields are appended only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPullsRequest {
    pub state: Openness,
    pub sort: Sort,
    pub direction: SortDirection,
    /// Filter by base branch name.
    pub base: Option<String>,
    /// Filter by head, in `user:ref-name` form.
    pub head: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

/// Request to create a new pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePullRequest {
    pub title: String,
    /// Branch the changes come from.
    pub head: String,
    /// Branch the changes go into.
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

impl CreatePullRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body: None,
            maintainer_can_modify: None,
        }
    }
}

/// Request to update an existing pull request. Unset fields are left
/// untouched on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Openness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}
