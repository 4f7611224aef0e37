//! Password prompt state for the résumé download.
//!
//! SECURITY
//! ========
//! The access code ships inside the client bundle, so this gate only keeps
//! casual visitors from stumbling onto the document. It is not access
//! control; anything that must stay private needs a server-side check.

#[cfg(test)]
#[path = "resume_access_test.rs"]
mod resume_access_test;

use crate::config::SiteConfig;
use crate::content::profile::RESUME_DOCUMENT;
use crate::state::overlay::Overlay;

/// Code the visitor must type to reach the résumé.
pub const RESUME_ACCESS_CODE: &str = "0821ava";

/// Message shown after a wrong code.
pub const INCORRECT_PASSWORD: &str = "Incorrect password. Please try again.";

/// Result of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Code matched; the caller opens the document and closes the overlay.
    Granted,
    /// Code did not match; the overlay stays open with an error.
    Denied,
}

/// In-progress password entry. Lives only while the overlay is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordAttempt {
    pub input: String,
    pub error: Option<String>,
}

impl PasswordAttempt {
    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Compare the current input against [`RESUME_ACCESS_CODE`] by exact
    /// equality. The input is cleared whatever the outcome. Retries are
    /// unlimited.
    pub fn submit(&mut self) -> AccessOutcome {
        let input = std::mem::take(&mut self.input);
        if input == RESUME_ACCESS_CODE {
            self.error = None;
            AccessOutcome::Granted
        } else {
            self.error = Some(INCORRECT_PASSWORD.to_owned());
            AccessOutcome::Denied
        }
    }

    /// Forget input and error, e.g. on cancel.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whether a key press inside the password field submits the form.
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Whether a key press inside an overlay dismisses it.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Submit the attempt from the open resume-access overlay.
///
/// On a match the attempt is reset, the overlay closes, and the document URL
/// under the site's base path is returned for the caller to open. On a
/// mismatch the overlay stays open and nothing is returned.
pub fn submit_access(attempt: &mut PasswordAttempt, overlay: &mut Overlay, config: &SiteConfig) -> Option<String> {
    match attempt.submit() {
        AccessOutcome::Granted => {
            attempt.reset();
            overlay.close(Overlay::ResumeAccess);
            Some(config.asset(RESUME_DOCUMENT))
        }
        AccessOutcome::Denied => None,
    }
}

/// Cancel, backdrop click, or Escape: forget the attempt and close.
pub fn dismiss_access(attempt: &mut PasswordAttempt, overlay: &mut Overlay) {
    attempt.reset();
    overlay.close(Overlay::ResumeAccess);
}
