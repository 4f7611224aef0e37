//! Open/closed state for a case card's blueprint panel.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Per-card disclosure. Each card owns its own value; cards never
/// influence one another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub open: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Label for the toggle button in the current state.
    pub fn toggle_label(self) -> &'static str {
        if self.open { "Close Blueprint" } else { "Explore Blueprint" }
    }
}
