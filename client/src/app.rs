//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::content::profile::OWNER_NAME;
use crate::pages::home::HomePage;

/// Root application component.
///
/// Provides the site configuration and mounts the router under the
/// configured base path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    let base = config.base.mount_point().map(str::to_owned);
    provide_context(config);

    view! {
        <Title text=format!("{OWNER_NAME} · Product Portfolio")/>
        <Meta name="description" content="Senior Product Manager bridging game economics and fintech infrastructure."/>

        <Router base=base.unwrap_or_default()>
            <Routes fallback=|| view! { <HomePage/> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
