//! Image source with a one-shot placeholder fallback.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Tracks which URL an `<img>` should show.
///
/// The first load error swaps in the placeholder. Later errors are ignored
/// so a missing placeholder cannot retrigger the swap forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    placeholder: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self { primary: primary.into(), placeholder: placeholder.into(), failed: false }
    }

    /// URL to render right now.
    pub fn current(&self) -> &str {
        if self.failed { &self.placeholder } else { &self.primary }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Record a load error. Returns `true` if the source changed.
    pub fn on_error(&mut self) -> bool {
        if self.failed || self.primary == self.placeholder {
            return false;
        }
        self.failed = true;
        true
    }
}
