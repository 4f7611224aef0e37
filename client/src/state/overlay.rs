//! Top-level overlay state owned by the home page.
//!
//! DESIGN
//! ======
//! A single enumerated value replaces independent visibility flags, so the
//! contact and resume-access overlays can never be visible together. Opening
//! one overlay while the other is showing swaps them.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Which overlay, if any, is drawn above the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    /// Contact card with the mail-to link.
    Contact,
    /// Password prompt guarding the résumé document.
    ResumeAccess,
}

impl Overlay {
    /// Show `next`, replacing whatever is currently open.
    pub fn open(&mut self, next: Overlay) {
        *self = next;
    }

    /// Close `target` if it is the one showing. Closing an overlay that is not
    /// visible leaves the state untouched.
    pub fn close(&mut self, target: Overlay) {
        if *self == target {
            *self = Overlay::None;
        }
    }

    pub fn is_open(self) -> bool {
        self != Overlay::None
    }

    pub fn shows_contact(self) -> bool {
        self == Overlay::Contact
    }

    pub fn shows_resume_access(self) -> bool {
        self == Overlay::ResumeAccess
    }
}
