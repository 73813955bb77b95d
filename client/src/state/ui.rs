//! Local UI chrome state (sidebar expansion).
//!
//! DESIGN
//! ======
//! Kept out of the page modules so the shell can own the one mutable flag
//! while section views stay static. Nothing here is persisted; every fresh
//! load starts from `UiState::default()`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sidebar width in pixels while expanded.
pub const SIDEBAR_EXPANDED_WIDTH: f64 = 200.0;

/// Sidebar width in pixels while collapsed to glyphs only.
pub const SIDEBAR_COLLAPSED_WIDTH: f64 = 80.0;

/// UI state for the layout shell.
///
/// Provided to the component tree as `RwSignal<UiState>`; only the shell's
/// sidebar toggle writes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
}

impl UiState {
    /// Flip the sidebar between collapsed and expanded, returning the new flag.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    /// Rendered sidebar width for the current flag.
    pub fn sidebar_width(&self) -> f64 {
        sidebar_width(self.sidebar_collapsed)
    }
}

/// Width in pixels for a sidebar in the given collapsed state.
pub fn sidebar_width(collapsed: bool) -> f64 {
    if collapsed { SIDEBAR_COLLAPSED_WIDTH } else { SIDEBAR_EXPANDED_WIDTH }
}
