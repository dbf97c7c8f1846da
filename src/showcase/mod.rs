// src/showcase/mod.rs
// =============================================================================
// This module contains the repository display pipeline.
//
// Submodules:
// - filter: Derives the ordered view from the full set and the criteria
// - render: The controller, the render-surface seam, and card formatting
//
// Data flows one way: full set -> filter/sort -> view -> surface.
// =============================================================================

mod filter;
mod render;

pub use filter::{filter_and_sort, FilterCriteria, SortKey};
pub use render::{RenderSurface, ShowcaseController, TerminalSurface};
