//! Browser side effects triggered by page interactions.
//!
//! Every helper is a no-op outside the `csr` build so the page logic stays
//! testable on the host.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Open `url` in a new tab without giving it a handle back to this page.
///
/// Returns `false` when the browser refused (popup blocker, no window).
pub fn open_in_new_context(url: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
            Ok(_) => true,
            Err(e) => {
                log::warn!("window.open failed: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        false
    }
}

/// Smooth-scroll the element with `id` into view. Missing anchors are
/// ignored.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
