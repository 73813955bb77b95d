//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a static section view selected by the router in `app::App`
//! and rendered inside the shell's content panel.

pub mod about;
pub mod home;
pub mod recipes;
