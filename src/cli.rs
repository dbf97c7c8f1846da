// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// One subcommand per pipeline:
// - repos: fetch and display a user's repository grid
// - cite:  build APA/MLA/Harvard citation strings for a publication
// =============================================================================

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repo-showcase",
    version = "0.1.0",
    about = "Showcase a user's public GitHub repositories and cite their publications",
    long_about = "repo-showcase renders the dynamic widgets of a portfolio as terminal output: \
                  a filterable, sortable grid of a user's public repositories, and \
                  APA/MLA/Harvard citation strings for a publication."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and display a user's public repositories as a card grid
    ///
    /// Example: repo-showcase repos JethroKimande --search api --sort stars
    Repos {
        /// GitHub account whose public repositories to list
        user: String,

        /// Only show repositories whose name or description contains this text
        /// (case-insensitive substring match)
        #[arg(long, default_value = "")]
        search: String,

        /// Sort order: stars, name, or updated
        ///
        /// Anything unrecognized falls back to 'updated', the default,
        /// so a typo degrades gracefully instead of erroring
        #[arg(long, default_value = "updated")]
        sort: String,

        /// Include repositories that are forks (hidden by default)
        #[arg(long)]
        include_forks: bool,

        /// Include archived repositories (hidden by default)
        #[arg(long)]
        include_archived: bool,

        /// Output the filtered view as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Build citation strings for a publication
    ///
    /// Example: repo-showcase cite --meta citation.json --style apa
    Cite {
        /// JSON file with the publication metadata
        /// (keys: title, authors, year, venue, url; all optional)
        #[arg(long, value_name = "FILE")]
        meta: Option<PathBuf>,

        /// Publication title (overrides the metadata file)
        #[arg(long)]
        title: Option<String>,

        /// Author name, repeatable in listed author order
        /// (e.g. --author "Alice Brown" --author "Carl Day")
        #[arg(long = "author", value_name = "NAME")]
        authors: Vec<String>,

        /// Publication year, or "n.d." when unknown
        #[arg(long)]
        year: Option<String>,

        /// Where the publication appeared (journal, platform, ...)
        #[arg(long)]
        venue: Option<String>,

        /// Link to the publication
        #[arg(long)]
        url: Option<String>,

        /// Print only one style instead of all three
        #[arg(long, value_enum)]
        style: Option<CitationStyle>,

        /// Also copy the chosen style to the system clipboard
        #[arg(long, value_enum, value_name = "STYLE")]
        copy: Option<CitationStyle>,
    },
}

/// One of the three supported citation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CitationStyle {
    Apa,
    Mla,
    Harvard,
}
