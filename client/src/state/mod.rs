//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the only mutable presentation flag; `section` is the closed set
//! of routed panels and the path lookup the sidebar highlights from.

pub mod section;
pub mod ui;
