// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print the rendered output
// 4. Exit with proper code (0 = success, 1 = repo grid failed to load,
//    2 = unexpected error)
//
// The two subcommands are independent pipelines: a fetch failure in `repos`
// says nothing about `cite`, which never touches the network.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cite; // src/cite/     - citation strings and clipboard
mod cli; // src/cli.rs    - command-line parsing
mod github; // src/github/   - repository listing fetch
mod showcase; // src/showcase/ - filter/sort pipeline and rendering

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;

use cite::{build_citations, copy_to_clipboard, CitationMeta, Citations};
use cli::{CitationStyle, Cli, Commands};
use github::RepoFetcher;
use showcase::{filter_and_sort, FilterCriteria, ShowcaseController, SortKey, TerminalSurface};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Repos {
            user,
            search,
            sort,
            include_forks,
            include_archived,
            json,
        } => {
            let criteria = FilterCriteria {
                search,
                include_forks,
                include_archived,
                sort: SortKey::parse(&sort),
            };
            handle_repos(&user, criteria, json).await
        }
        Commands::Cite {
            meta,
            title,
            authors,
            year,
            venue,
            url,
            style,
            copy,
        } => {
            let meta = resolve_meta(meta, title, authors, year, venue, url)?;
            handle_cite(&meta, style, copy)
        }
    }
}

// Handles the 'repos' subcommand
//
// Fetches the complete listing, applies the filter/sort pipeline once with
// the criteria from the command line, and renders the view. A failed fetch
// is terminal for the grid: nothing partial is shown.
async fn handle_repos(user: &str, criteria: FilterCriteria, json: bool) -> Result<i32> {
    let fetcher = RepoFetcher::new();

    let all_repos = match fetcher.fetch_all_repos(user).await {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Couldn't load repositories for '{}'.", user);
            return Ok(1);
        }
    };

    if json {
        // Machine-readable path: the filtered view, nothing else
        let view = filter_and_sort(&all_repos, &criteria);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(0);
    }

    let surface = TerminalSurface::new(Utc::now());
    let mut controller = ShowcaseController::new(all_repos, surface);
    controller.apply(&criteria);

    Ok(0)
}

// Handles the 'cite' subcommand
//
// The citations are built once from static metadata - no network. A failed
// clipboard copy is reported but never changes the exit code; the citation
// is already on stdout.
fn handle_cite(
    meta: &CitationMeta,
    style: Option<CitationStyle>,
    copy: Option<CitationStyle>,
) -> Result<i32> {
    let citations = build_citations(meta, Local::now().date_naive());

    match style {
        Some(style) => println!("{}", citation_for(&citations, style)),
        None => {
            println!("APA:     {}", citations.apa);
            println!("MLA:     {}", citations.mla);
            println!("Harvard: {}", citations.harvard);
        }
    }

    if let Some(style) = copy {
        match copy_to_clipboard(citation_for(&citations, style)) {
            Ok(()) => println!("\nCopied!"),
            Err(e) => println!("\nCopy failed: {}", e),
        }
    }

    Ok(0)
}

fn citation_for(citations: &Citations, style: CitationStyle) -> &str {
    match style {
        CitationStyle::Apa => &citations.apa,
        CitationStyle::Mla => &citations.mla,
        CitationStyle::Harvard => &citations.harvard,
    }
}

// Merges the metadata file (if any) with the individual flags
//
// Flags win over file values; the authors list is replaced wholesale when
// any --author flag is given.
fn resolve_meta(
    meta_file: Option<std::path::PathBuf>,
    title: Option<String>,
    authors: Vec<String>,
    year: Option<String>,
    venue: Option<String>,
    url: Option<String>,
) -> Result<CitationMeta> {
    let mut meta = match meta_file {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Can't read metadata file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid metadata JSON in {}", path.display()))?
        }
        None => CitationMeta::default(),
    };

    if title.is_some() {
        meta.title = title;
    }
    if !authors.is_empty() {
        meta.authors = authors;
    }
    if year.is_some() {
        meta.year = year;
    }
    if venue.is_some() {
        meta.venue = venue;
    }
    if url.is_some() {
        meta.url = url;
    }

    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_meta_flags_override_defaults() {
        let meta = resolve_meta(
            None,
            Some("A Title".to_string()),
            vec!["Alice Brown".to_string()],
            None,
            None,
            None,
        )
        .unwrap();

        assert_eq!(meta.title.as_deref(), Some("A Title"));
        assert_eq!(meta.authors, vec!["Alice Brown".to_string()]);
        assert!(meta.year.is_none());
    }

    #[test]
    fn test_resolve_meta_missing_file_is_an_error() {
        let result = resolve_meta(
            Some(std::path::PathBuf::from("/no/such/file.json")),
            None,
            Vec::new(),
            None,
            None,
            None,
        );
        assert!(result.is_err());
    }
}
