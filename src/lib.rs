//! # octopull
//!
//! Typed async client for the pull request endpoints of the GitHub REST
//! API: fetch one, list with filters, open new ones, and edit existing
//! ones, with responses decoded into typed records.
//!
//! The crate splits into three layers:
//!
//! - [`router::Route`] names each supported operation and maps it onto a
//!   plain HTTP request descriptor
//! - [`transport::Transport`] executes descriptors; the default
//!   implementation wraps `reqwest`, and tests inject a mock instead
//! - [`PullsClient`] ties the two together and turns responses into
//!   [`types::PullRequest`] values or typed errors
//!
//! ## Example
//!
//! ```no_run
//! use octopull::request::ListPullsRequest;
//! use octopull::{ApiConfig, PullsClient};
//!
//! # async fn run() -> octopull::Result<()> {
//! let token = std::env::var("GITHUB_TOKEN").unwrap_or_default();
//! let client = PullsClient::new(ApiConfig::with_token(token))?;
//!
//! let open = client
//!     .list("rust-lang", "rust", ListPullsRequest::default())
//!     .await?;
//! for pull in open {
//!     println!("#{} {}", pull.number.unwrap_or(0), pull.title.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

/// Connection configuration: scheme, host, and credentials.
pub mod config;
/// Error and result types shared across the crate.
pub mod error;
/// The pull request client and its response decode policy.
pub mod pulls;
/// Typed parameter sets for list, create, and update calls.
pub mod request;
/// Logical operations and their mapping onto HTTP requests.
pub mod router;
/// The HTTP seam: request descriptors and the transport trait.
pub mod transport;
/// Wire types for pull requests and their nested records.
pub mod types;

pub use config::ApiConfig;
pub use error::{Error, Result};
pub use pulls::PullsClient;
