//! Fixed top navigation with the résumé trigger.

use leptos::prelude::*;

use crate::content::profile::{LINKEDIN_URL, MONOGRAM, NAV_LINKS, OWNER_NAME};

#[component]
pub fn Navbar(on_resume: Callback<()>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__left">
                    <a href="#" class="navbar__brand">
                        <div class="navbar__monogram">{MONOGRAM}</div>
                        <span class="navbar__name">{OWNER_NAME}</span>
                    </a>
                    <div class="navbar__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a href=format!("#{}", link.anchor) class="navbar__link">{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>
                <div class="navbar__right">
                    <a href=LINKEDIN_URL target="_blank" rel="noreferrer" class="navbar__social" aria-label="LinkedIn">
                        "in"
                    </a>
                    <button class="navbar__resume" on:click=move |_| on_resume.run(())>
                        "↓ Resume"
                    </button>
                </div>
            </div>
        </nav>
    }
}
