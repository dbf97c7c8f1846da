// src/showcase/filter.rs
// =============================================================================
// This module derives the display view from the full repository set.
//
// The pipeline is deliberately dumb: every time the criteria change we
// recompute the whole view from scratch (filter, then sort). No incremental
// diffing, no cached partial state. With dozens of repositories that's
// microseconds of work, and "recompute everything" is impossible to get
// subtly wrong.
//
// Filtering is a chain of independent AND-conditions; sorting picks one of
// three total orders. Rust's sort_by is stable, which matters for the stars
// order: repositories with equal star counts keep their fetched order.
//
// Rust concepts:
// - Slices and iterators: Filter borrows the full set, clones only survivors
// - Enums with a lenient parser: Unknown sort keys fall back to the default
// =============================================================================

use crate::github::Repository;

// Repository names excluded by exact match, case-insensitive.
// The portfolio/CV repos of the site itself - showing them would be circular.
pub const BLOCKED_NAMES: [&str; 2] = ["jethro-portfolio", "jethro-kimande-cv"];

// Repositories whose names start with this prefix are coursework exercises
// and never shown, case-insensitive.
pub const BLOCKED_PREFIX: &str = "plp";

/// How the view is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by star count, ties keep fetched order
    Stars,
    /// Ascending by name, case-insensitive
    Name,
    /// Descending by last-push time (the default)
    #[default]
    Updated,
}

impl SortKey {
    // Lenient parser: any unrecognized key degrades to the default order
    // rather than erroring, mirroring how a missing UI control would behave.
    pub fn parse(key: &str) -> SortKey {
        match key {
            "stars" => SortKey::Stars,
            "name" => SortKey::Name,
            _ => SortKey::Updated,
        }
    }
}

/// The current combination of search text, sort mode, and inclusion toggles
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name + description
    pub search: String,
    /// Show repositories that are forks of other projects
    pub include_forks: bool,
    /// Show repositories the owner has archived
    pub include_archived: bool,
    pub sort: SortKey,
}

// Produces the exact ordered subsequence of repositories to display
//
// Applies the filter predicate to every repository, then sorts the
// survivors. Pure: same inputs always give the same output, so applying
// the same criteria twice is a no-op on the result.
pub fn filter_and_sort(repos: &[Repository], criteria: &FilterCriteria) -> Vec<Repository> {
    let query = criteria.search.trim().to_lowercase();

    let mut view: Vec<Repository> = repos
        .iter()
        .filter(|repo| matches_criteria(repo, criteria, &query))
        .cloned()
        .collect();

    sort_repos(&mut view, criteria.sort);
    view
}

// The per-repository filter predicate
//
// All checks are independent AND-conditions; any failing check excludes
// the record. `query` is the pre-lowercased search text.
fn matches_criteria(repo: &Repository, criteria: &FilterCriteria, query: &str) -> bool {
    let name = repo.name.to_lowercase();

    if name.starts_with(BLOCKED_PREFIX) {
        return false;
    }
    if BLOCKED_NAMES.contains(&name.as_str()) {
        return false;
    }
    if repo.fork && !criteria.include_forks {
        return false;
    }
    if repo.archived && !criteria.include_archived {
        return false;
    }
    if !query.is_empty() {
        // Search looks at the name and description together
        let haystack = format!(
            "{} {}",
            repo.name,
            repo.description.as_deref().unwrap_or("")
        )
        .to_lowercase();
        if !haystack.contains(query) {
            return false;
        }
    }

    true
}

fn sort_repos(list: &mut [Repository], key: SortKey) {
    match key {
        SortKey::Stars => {
            // b vs a for descending; stable sort preserves input order on ties
            list.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        }
        SortKey::Name => {
            list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::Updated => {
            list.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
        }
    }
}
