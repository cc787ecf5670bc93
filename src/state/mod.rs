/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The cross-page Selection Store (selection.rs)
/// - Deriving the selected rows of the visible page (projector.rs)
/// - "Select first N rows" (bulk.rs)
/// - Paginator arithmetic (pagination.rs)
/// - The browsing session tying it all together (browser.rs)

pub mod data;
pub mod selection;
pub mod projector;
pub mod bulk;
pub mod pagination;
pub mod browser;
