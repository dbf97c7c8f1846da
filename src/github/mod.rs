// src/github/mod.rs
// =============================================================================
// This module handles talking to the GitHub API.
//
// Currently implements:
// - Fetching a user's complete public repository listing, page by page
// - Applying defaults for absent optional fields at the ingestion boundary
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `github::RepoFetcher` instead of `github::fetch::RepoFetcher`.
// =============================================================================

mod fetch;

pub use fetch::{FetchError, RepoFetcher, Repository};
