// src/cite/mod.rs
// =============================================================================
// This module contains the citation generator.
//
// Submodules:
// - names: Pure name-formatting transforms (invert, initials, list joins)
// - builder: Applies defaults and fills the APA/MLA/Harvard templates
// - clipboard: Copies one citation string to the system clipboard
//
// The citation pipeline is completely independent of the repository
// pipeline - it shares nothing with it and can't be broken by a fetch
// failure.
// =============================================================================

mod builder;
mod clipboard;
mod names;

pub use builder::{build_citations, CitationMeta, Citations};
pub use clipboard::copy_to_clipboard;
