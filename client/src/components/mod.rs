//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the fixed chrome around routed pages and read/write the
//! shared `UiState` from the Leptos context provided by `app::App`.

pub mod breadcrumb;
pub mod page_footer;
pub mod page_header;
pub mod shell;
pub mod sidebar;
