//! Color palettes as configuration data.
//!
//! Sections pick a palette and render it as CSS custom properties on their
//! root element; the stylesheet only ever reads `var(--…)`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub secondary: &'static str,
    pub paper: &'static str,
    pub border: &'static str,
}

/// Main page palette.
pub const SHOWCASE: Theme = Theme {
    name: "showcase",
    bg: "#F8FAFC",
    text: "#1E1E3C",
    primary: "#4F46E5",
    accent: "#F59E0B",
    secondary: "#10B981",
    paper: "#FFFFFF",
    border: "#E2E8F0",
};

/// Warm rice-paper palette of the Solo Lab section.
pub const SOLO_LAB: Theme = Theme {
    name: "solo-lab",
    bg: "#FDF6E3",
    text: "#433422",
    primary: "#433422",
    accent: "#D35400",
    secondary: "#27AE60",
    paper: "#FFFFFF",
    border: "#D7CCC8",
};

impl Theme {
    /// Inline `style` value declaring the palette as custom properties.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg:{};--text:{};--primary:{};--accent:{};--secondary:{};--paper:{};--border:{};",
            self.bg, self.text, self.primary, self.accent, self.secondary, self.paper, self.border
        )
    }
}
