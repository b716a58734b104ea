//! Shared data layer for the documentation viewer.
//!
//! Holds the navigation catalog (entries, sections, sub-tabs), the static
//! content table, and the pure selection/resolution rules the frontend
//! renders from. No UI dependencies; everything here is testable on the
//! host target.

pub mod data;
pub mod nav;
pub mod selection;

pub use data::{catalog, default_entry, entry};
pub use nav::{NavigationEntry, PageContent, Section, SubTab};
pub use selection::{ContentView, Selection};
