// src/showcase/render.rs
// =============================================================================
// This module turns the filtered view into visible output.
//
// The pipeline logic never touches the terminal directly. Instead it drives
// a small capability trait (RenderSurface) with three operations:
//   - set_count(n):     "<N> repos" label
//   - show_empty(bool): the empty-state indicator
//   - render_list(..):  one card per repository
//
// main.rs plugs in TerminalSurface; tests plug in a recording fake. That
// keeps filtering/sorting testable without any real display.
//
// Rust concepts:
// - Traits: The seam between pipeline logic and presentation
// - Generics: The controller works with any surface implementation
// =============================================================================

use chrono::{DateTime, Utc};
use url::Url;

use crate::github::Repository;
use crate::showcase::filter::{filter_and_sort, FilterCriteria};

// Placeholder shown when a repository has no description
const NO_DESCRIPTION: &str = "No description provided.";

/// Where the rendered view goes
pub trait RenderSurface {
    /// Updates the "<N> repos" count label
    fn set_count(&mut self, count: usize);
    /// Shows or hides the empty-state indicator
    fn show_empty(&mut self, empty: bool);
    /// Replaces the displayed cards with one per repository, in order
    fn render_list(&mut self, items: &[Repository]);
}

// Owns the repository state for one session
//
// Two pieces of state, single writer each: the full set is written once at
// construction, the view is rewritten on every apply(). The view is always
// recomputed in full from the full set - it never feeds back into itself.
pub struct ShowcaseController<S: RenderSurface> {
    all: Vec<Repository>,
    view: Vec<Repository>,
    surface: S,
}

impl<S: RenderSurface> ShowcaseController<S> {
    pub fn new(all: Vec<Repository>, surface: S) -> Self {
        ShowcaseController {
            all,
            view: Vec::new(),
            surface,
        }
    }

    // Recomputes the view for the given criteria and reconciles the surface
    //
    // Call this on every criteria change. Order matches the original UI:
    // count label first, then either the empty indicator or the cards.
    pub fn apply(&mut self, criteria: &FilterCriteria) {
        self.view = filter_and_sort(&self.all, criteria);

        self.surface.set_count(self.view.len());
        if self.view.is_empty() {
            self.surface.show_empty(true);
        } else {
            self.surface.show_empty(false);
            self.surface.render_list(&self.view);
        }
    }

    /// The currently displayed view (filtered and sorted)
    pub fn view(&self) -> &[Repository] {
        &self.view
    }
}

// Prints repository cards to stdout
//
// Holds a clock value so every card in one render agrees on "now"
// (and so tests of card formatting are deterministic).
pub struct TerminalSurface {
    now: DateTime<Utc>,
}

impl TerminalSurface {
    pub fn new(now: DateTime<Utc>) -> Self {
        TerminalSurface { now }
    }
}

impl RenderSurface for TerminalSurface {
    fn set_count(&mut self, count: usize) {
        println!("{} repos\n", count);
    }

    fn show_empty(&mut self, empty: bool) {
        if empty {
            println!("No repositories match the current filters.");
        }
    }

    fn render_list(&mut self, items: &[Repository]) {
        for repo in items {
            print!("{}", format_card(repo, self.now));
            println!();
        }
    }
}

// Formats one repository card
//
// Layout mirrors the portfolio card: name with badges, description (or a
// placeholder), a metadata line, then the links.
pub fn format_card(repo: &Repository, now: DateTime<Utc>) -> String {
    let mut card = String::new();

    card.push_str(&repo.name);
    if repo.fork {
        card.push_str(" [Fork]");
    }
    if repo.archived {
        card.push_str(" [Archived]");
    }
    card.push('\n');

    card.push_str("  ");
    card.push_str(repo.description.as_deref().unwrap_or(NO_DESCRIPTION));
    card.push('\n');

    card.push_str("  ");
    if let Some(language) = &repo.language {
        card.push_str(language);
        card.push_str(" | ");
    }
    card.push_str(&format!(
        "⭐ {} | 🍴 {} | Updated {}\n",
        repo.stargazers_count,
        repo.forks_count,
        time_ago(repo.pushed_at, now)
    ));

    card.push_str(&format!("  Repository: {}\n", repo.html_url));
    if let Some(homepage) = &repo.homepage {
        card.push_str(&format!("  Live: {}\n", homepage_url(homepage)));
    }

    card
}

// Normalizes a homepage value into something clickable
//
// GitHub lets owners enter bare hosts like "example.com"; a value that
// doesn't parse as an absolute URL gets "https://" prepended.
fn homepage_url(homepage: &str) -> String {
    match Url::parse(homepage) {
        Ok(_) => homepage.to_string(),
        Err(_) => format!("https://{}", homepage),
    }
}

// Formats elapsed time as a compact "<n><unit> ago" label
//
// Buckets: minutes under an hour, hours under a day, days under 30,
// months (30-day months) under 12, then years. All values are floored,
// never rounded - 119 minutes is "1h ago", not "2h ago".
pub fn time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // A clock skew can put pushed_at slightly in the future; clamp to zero
    let mins = (now - past).num_minutes().max(0);
    if mins < 60 {
        return format!("{}m ago", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{}d ago", days);
    }
    let months = days / 30;
    if months < 12 {
        return format!("{}mo ago", months);
    }
    format!("{}y ago", months / 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/someone/{}", name),
            homepage: None,
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
            archived: false,
            pushed_at: fixed_now(),
        }
    }

    #[test]
    fn test_time_ago_bucket_boundaries() {
        let now = fixed_now();
        let ago = |d: Duration| time_ago(now - d, now);

        assert_eq!(ago(Duration::minutes(59)), "59m ago");
        assert_eq!(ago(Duration::minutes(60)), "1h ago");
        assert_eq!(ago(Duration::hours(23)), "23h ago");
        assert_eq!(ago(Duration::hours(24)), "1d ago");
        assert_eq!(ago(Duration::days(29)), "29d ago");
        assert_eq!(ago(Duration::days(30)), "1mo ago");
        assert_eq!(ago(Duration::days(359)), "11mo ago");
        assert_eq!(ago(Duration::days(360)), "1y ago");
    }

    #[test]
    fn test_time_ago_floors_and_never_rounds() {
        let now = fixed_now();
        assert_eq!(time_ago(now - Duration::minutes(119), now), "1h ago");
        assert_eq!(time_ago(now - Duration::days(59), now), "1mo ago");
    }

    #[test]
    fn test_time_ago_clamps_future_timestamps() {
        let now = fixed_now();
        assert_eq!(time_ago(now + Duration::minutes(5), now), "0m ago");
    }

    #[test]
    fn test_homepage_without_scheme_gets_https() {
        assert_eq!(homepage_url("example.com"), "https://example.com");
        assert_eq!(homepage_url("https://example.com"), "https://example.com");
        assert_eq!(homepage_url("http://old.example.com"), "http://old.example.com");
    }

    #[test]
    fn test_card_shows_placeholder_description_and_badges() {
        let mut r = repo("demo");
        r.fork = true;
        r.archived = true;
        r.pushed_at = fixed_now() - Duration::days(3);

        let card = format_card(&r, fixed_now());
        assert!(card.starts_with("demo [Fork] [Archived]\n"));
        assert!(card.contains("No description provided."));
        assert!(card.contains("Updated 3d ago"));
        assert!(card.contains("Repository: https://github.com/someone/demo"));
        // No homepage, so no Live link
        assert!(!card.contains("Live:"));
    }

    #[test]
    fn test_card_includes_language_and_live_link() {
        let mut r = repo("site");
        r.language = Some("Rust".to_string());
        r.homepage = Some("site.example.com".to_string());

        let card = format_card(&r, fixed_now());
        assert!(card.contains("Rust | "));
        assert!(card.contains("Live: https://site.example.com"));
    }

    // A surface that records calls instead of printing, for controller tests
    #[derive(Default)]
    struct RecordingSurface {
        counts: Vec<usize>,
        empties: Vec<bool>,
        rendered: Vec<Vec<String>>,
    }

    impl RenderSurface for RecordingSurface {
        fn set_count(&mut self, count: usize) {
            self.counts.push(count);
        }
        fn show_empty(&mut self, empty: bool) {
            self.empties.push(empty);
        }
        fn render_list(&mut self, items: &[Repository]) {
            self.rendered
                .push(items.iter().map(|r| r.name.clone()).collect());
        }
    }

    #[test]
    fn test_controller_drives_surface_on_apply() {
        let repos = vec![repo("alpha"), repo("beta")];
        let mut controller = ShowcaseController::new(repos, RecordingSurface::default());

        controller.apply(&FilterCriteria::default());

        assert_eq!(controller.surface.counts, vec![2]);
        assert_eq!(controller.surface.empties, vec![false]);
        assert_eq!(controller.surface.rendered.len(), 1);
        assert_eq!(controller.view().len(), 2);
    }

    #[test]
    fn test_controller_shows_empty_state_and_skips_cards() {
        let repos = vec![repo("alpha")];
        let mut controller = ShowcaseController::new(repos, RecordingSurface::default());

        controller.apply(&FilterCriteria {
            search: "no-such-repo".to_string(),
            ..Default::default()
        });

        assert_eq!(controller.surface.counts, vec![0]);
        assert_eq!(controller.surface.empties, vec![true]);
        assert!(controller.surface.rendered.is_empty());
    }

    #[test]
    fn test_controller_recomputes_view_on_each_apply() {
        let repos = vec![repo("alpha"), repo("beta")];
        let mut controller = ShowcaseController::new(repos, RecordingSurface::default());

        controller.apply(&FilterCriteria {
            search: "alpha".to_string(),
            ..Default::default()
        });
        assert_eq!(controller.view().len(), 1);

        // Clearing the search restores the full view
        controller.apply(&FilterCriteria::default());
        assert_eq!(controller.view().len(), 2);
    }
}
