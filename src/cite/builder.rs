// src/cite/builder.rs
// =============================================================================
// This module builds the three citation strings from publication metadata.
//
// The builder is deterministic: the output is a pure function of the
// metadata plus the accessed date (only Harvard uses the date). Absent
// fields get fixed defaults here, at one place, so the templates below
// never handle "missing" themselves.
//
// Rust concepts:
// - Option + unwrap_or: Default substitution at the boundary
// - NaiveDate parameter: The clock is an input, which keeps tests exact
// =============================================================================

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::cite::names::{join_apa, join_harvard, join_mla, normalize_name};

// Month abbreviations for the Harvard accessed date, indexed by month0
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Publication metadata, as configured by the user
//
// Every field is optional; the builder substitutes defaults. Deserialize
// lets the whole thing load from a JSON file via --meta.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitationMeta {
    pub title: Option<String>,
    /// Free-form names in listed author order
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication year, or the literal "n.d." when unknown
    pub year: Option<String>,
    pub venue: Option<String>,
    pub url: Option<String>,
}

/// The three formatted citation strings
#[derive(Debug, Clone)]
pub struct Citations {
    pub apa: String,
    pub mla: String,
    pub harvard: String,
}

// Builds all three citation strings
//
// `accessed` is the date stamped into the Harvard citation; callers pass
// today's local date, tests pass a fixed one.
pub fn build_citations(meta: &CitationMeta, accessed: NaiveDate) -> Citations {
    let title = meta.title.as_deref().unwrap_or("Untitled");
    let year = meta.year.as_deref().unwrap_or("n.d.");
    let venue = meta.venue.as_deref().unwrap_or("Repository");
    let url = meta.url.as_deref().unwrap_or("");

    // Normalize once; empty entries (all-whitespace names) drop out
    let authors: Vec<String> = meta
        .authors
        .iter()
        .map(|name| normalize_name(name))
        .filter(|name| !name.is_empty())
        .collect();

    let accessed_str = format!(
        "{} {} {}",
        accessed.day(),
        MONTHS[accessed.month0() as usize],
        accessed.year()
    );

    Citations {
        apa: format!("{} ({}). {}. {}. {}", join_apa(&authors), year, title, venue, url),
        mla: format!(
            "{}. \"{}.\" {}, {}, {}.",
            join_mla(&authors),
            title,
            venue,
            year,
            url
        ),
        harvard: format!(
            "{} {}. {}. {}. Available at: {} (Accessed {}).",
            join_harvard(&authors),
            year,
            title,
            venue,
            url,
            accessed_str
        ),
    }
}
