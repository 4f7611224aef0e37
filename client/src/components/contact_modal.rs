//! "Let's Stay in Touch!" overlay with the mail-to link.

use leptos::prelude::*;

use crate::components::decor::HandDivider;
use crate::content::profile::{CONTACT_EMAIL, mailto};
use crate::state::resume_access::is_dismiss_key;

/// Closes on the button, a backdrop click, or Escape.
#[component]
pub fn ContactModal(on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the dialog on mount so Escape reaches its keydown handler.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="-1"
                node_ref=dialog_ref
            >
                <div class="dialog__tape dialog__tape--left" aria-hidden="true"></div>
                <div class="dialog__tape dialog__tape--right" aria-hidden="true"></div>
                <h3 class="dialog__title">"Let's Stay in Touch!"</h3>
                <HandDivider/>
                <div class="dialog__body">
                    <p>
                        "Feel free to reach out anytime. I'm always open to discussing new projects, "
                        "creative ideas, or opportunities to be part of your visions."
                    </p>
                    <div class="dialog__email">
                        <a href=mailto()>{CONTACT_EMAIL}</a>
                    </div>
                </div>
                <button class="btn btn--primary btn--block" on:click=on_close_click>
                    "Got it! Let's Connect"
                </button>
            </div>
        </div>
    }
}
