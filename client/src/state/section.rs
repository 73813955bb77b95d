//! Routed content sections and their path mapping.
//!
//! The router decides which page renders; this module gives the shell the
//! same answer for highlighting the sidebar. Section routes claim their
//! sub-paths and everything else falls back to `Home`.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Content panels reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Recipes,
    About,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 3] = [Section::Home, Section::Recipes, Section::About];

    /// Resolve a browser path to the section it renders.
    ///
    /// Sub-paths resolve to their top-level section and anything unknown
    /// falls back to `Home`.
    pub fn from_path(path: &str) -> Self {
        let first = path
            .trim_start_matches('/')
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        match first {
            "recipes" => Self::Recipes,
            "about" => Self::About,
            _ => Self::Home,
        }
    }

    /// Route path used by sidebar links.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Recipes => "/recipes",
            Self::About => "/about",
        }
    }

    /// Sidebar menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Recipes => "Recipes",
            Self::About => "About",
        }
    }

    /// Glyph shown in place of the label when the sidebar is collapsed.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Recipes => "☰",
            Self::About => "ℹ",
        }
    }

    /// Heading rendered by the section's page.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Recipes => "Recipe List",
            Self::About => "About",
        }
    }
}
