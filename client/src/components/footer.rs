//! Contact footer.

use leptos::prelude::*;

use crate::content::profile::{LINKEDIN_URL, OWNER_NAME};

#[component]
pub fn Footer(on_contact: Callback<()>) -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__rainbow" aria-hidden="true"></div>
            <div class="footer__inner">
                <div class="footer__slogan">
                    <h2>"Let's build something scalable."</h2>
                    <div class="footer__slogan-sub">"Learn in public."</div>
                </div>
                <div class="footer__actions">
                    <a href=LINKEDIN_URL target="_blank" rel="noreferrer" class="footer__action" aria-label="LinkedIn">
                        "in"
                    </a>
                    <button class="footer__action" on:click=move |_| on_contact.run(()) aria-label="Email">
                        "✉"
                    </button>
                </div>
            </div>
            <div class="footer__legal">
                <span>{format!("© 2026 {}", OWNER_NAME.to_uppercase())}</span>
                <span>"DESIGNED WITH LOGIC & PASSION"</span>
            </div>
        </footer>
    }
}
