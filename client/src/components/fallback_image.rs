//! `<img>` that swaps to the site placeholder when loading fails.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::image::ImageSource;

/// Image resolved under the site base path. `src` is site-relative.
#[component]
pub fn FallbackImage(src: &'static str, alt: String, #[prop(optional)] class: &'static str) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let source = RwSignal::new(ImageSource::new(config.asset(src), config.placeholder()));

    let on_error = move |_| {
        source.update(|s| {
            if s.on_error() {
                #[cfg(feature = "csr")]
                log::warn!("image {src} failed to load, using placeholder");
            }
        });
    };

    view! {
        <img
            class=class
            class:img--fallback=move || source.with(ImageSource::is_fallback)
            src=move || source.with(|s| s.current().to_owned())
            alt=alt
            on:error=on_error
        />
    }
}
