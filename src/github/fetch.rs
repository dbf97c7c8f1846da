// src/github/fetch.rs
// =============================================================================
// This module fetches the complete public repository listing for a user.
//
// Strategy:
// - Request pages of up to 100 repositories from the GitHub listing API
// - Ask GitHub to sort by last-push time so page 1 is the freshest
// - Keep requesting pages sequentially until a short page arrives
// - Stop after 10 pages no matter what (safety cap against huge accounts)
//
// Why sequential and not concurrent?
// - We don't know how many pages exist until a short page tells us
// - The page count is tiny (one or two pages for almost everyone)
// - Sequential requests keep us well inside GitHub's rate limits
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a typed error: The caller can inspect the HTTP status
// - serde defaults: Absent optional fields become 0/false/None at ingestion
// =============================================================================

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Production API root. Tests swap this out for a mock server.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

// GitHub's maximum page size for the repository listing endpoint
const PER_PAGE: usize = 100;

// Hard cap on pages fetched in one load. 10 pages * 100 repos = 1000 repos;
// accounts larger than that get truncated (we warn when it happens).
const MAX_PAGES: u32 = 10;

// One entry in the fetched listing
//
// Optional fields carry #[serde(default)] so a sparse API response still
// produces a fully populated record: counts default to 0, flags to false,
// optional strings to None. Downstream code never re-checks for "missing".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, unique per owner
    pub name: String,
    /// Short description, often absent
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the repository page
    pub html_url: String,
    /// Project homepage, may lack a scheme ("example.com")
    #[serde(default)]
    pub homepage: Option<String>,
    /// Primary language as detected by GitHub
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    /// True when this repository is a fork of another
    #[serde(default)]
    pub fork: bool,
    /// True when the owner has archived the repository
    #[serde(default)]
    pub archived: bool,
    /// Last push timestamp (ISO-8601 in the API response)
    pub pushed_at: DateTime<Utc>,
}

// Why the load can fail
//
// A non-success HTTP status on ANY page aborts the whole load - we never
// return a partial listing. The status code rides along so the caller can
// show it (403 usually means rate limited, 404 means no such user).
#[derive(Debug, Error)]
pub enum FetchError {
    /// A page request came back with a non-success HTTP status
    #[error("GitHub API returned HTTP {status} for page {page}")]
    Status { status: u16, page: u32 },
    /// The request never produced a response (DNS, timeout, TLS, ...)
    #[error("network error while fetching repositories: {0}")]
    Network(#[from] reqwest::Error),
}

// Fetches repository listings, page by page
//
// Holds the HTTP client (reused across pages for connection pooling) and
// the API root, which is injectable so tests can point at a mock server.
pub struct RepoFetcher {
    client: Client,
    api_root: String,
}

impl RepoFetcher {
    /// Creates a fetcher against the real GitHub API
    pub fn new() -> Self {
        Self::with_api_root(DEFAULT_API_ROOT)
    }

    /// Creates a fetcher against a custom API root (used by tests)
    pub fn with_api_root(api_root: impl Into<String>) -> Self {
        // GitHub rejects requests without a User-Agent, so always send one
        let client = Client::builder()
            .user_agent(concat!("repo-showcase/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        RepoFetcher {
            client,
            api_root: api_root.into(),
        }
    }

    // Fetches the complete ordered repository listing for a user
    //
    // Pages are requested sequentially starting at page 1 and concatenated
    // in request order. GitHub does the ordering (sort=updated), so the
    // result is newest-pushed first.
    //
    // Returns: every public repository, or FetchError if any page fails
    pub async fn fetch_all_repos(&self, user: &str) -> Result<Vec<Repository>, FetchError> {
        let mut all = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}/users/{}/repos?per_page={}&page={}&sort=updated",
                self.api_root, user, PER_PAGE, page
            );

            let response = self
                .client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(FetchError::Status {
                    status: response.status().as_u16(),
                    page,
                });
            }

            let batch: Vec<Repository> = response.json().await?;
            let batch_len = batch.len();
            all.extend(batch);

            // A short page means we just consumed the last one
            if batch_len < PER_PAGE {
                break;
            }

            page += 1;
            if page > MAX_PAGES {
                // The last page was still full, so more data likely exists.
                // Truncating silently would hide it; say so instead.
                eprintln!(
                    "Warning: stopped after {} pages ({} repositories); the listing may be truncated",
                    MAX_PAGES,
                    all.len()
                );
                break;
            }
        }

        Ok(all)
    }
}

impl Default for RepoFetcher {
    fn default() -> Self {
        Self::new()
    }
}
