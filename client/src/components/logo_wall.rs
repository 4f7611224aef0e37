//! "Trusted by Industry Leaders" strip.

use leptos::prelude::*;

use crate::content::profile::LOGOS;

#[component]
pub fn LogoWall() -> impl IntoView {
    view! {
        <section class="logo-wall">
            <p class="logo-wall__caption">"Trusted by Industry Leaders"</p>
            <div class="logo-wall__row">
                {LOGOS.iter().map(|name| view! { <h3 class="logo-wall__logo">{*name}</h3> }).collect_view()}
            </div>
        </section>
    }
}
