//! Password prompt guarding the résumé download.
//!
//! DESIGN
//! ======
//! The prompt owns its `PasswordAttempt` and is mounted only while the
//! overlay is open. Submission and dismissal go through `submit_access` and
//! `dismiss_access`, which reset the attempt and close the overlay together.
//! The password field takes focus on mount so Enter and Escape reach it.

use leptos::prelude::*;

use crate::components::decor::HandDivider;
use crate::config::SiteConfig;
use crate::state::overlay::Overlay;
use crate::state::resume_access::{
    PasswordAttempt, dismiss_access, is_dismiss_key, is_submit_key, submit_access,
};
use crate::util::browser;

#[component]
pub fn ResumeAccessModal(overlay: RwSignal<Overlay>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let attempt = RwSignal::new(PasswordAttempt::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = Callback::new(move |()| {
        let document = overlay
            .try_update(|o| attempt.try_update(|a| submit_access(a, o, &config)))
            .flatten()
            .flatten();
        match document {
            Some(url) => {
                #[cfg(feature = "csr")]
                log::info!("résumé access granted");
                browser::open_in_new_context(&url);
            }
            None => {
                #[cfg(feature = "csr")]
                log::info!("résumé access denied");
            }
        }
    });
    let dismiss = Callback::new(move |()| {
        overlay.update(|o| {
            attempt.update(|a| dismiss_access(a, o));
        });
    });

    let on_backdrop = move |_| dismiss.run(());
    let on_cancel = move |_| dismiss.run(());
    let on_dialog_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            dismiss.run(());
        }
    };
    let on_input_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            submit.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_dialog_keydown
            >
                <div class="dialog__tape dialog__tape--left" aria-hidden="true"></div>
                <div class="dialog__tape dialog__tape--right" aria-hidden="true"></div>
                <h3 class="dialog__title">"Resume Access"</h3>
                <HandDivider/>
                <div class="dialog__body">
                    <p>"Please enter the password to access my resume."</p>
                    <input
                        class="dialog__password"
                        type="password"
                        placeholder="Enter password..."
                        node_ref=input_ref
                        prop:value=move || attempt.with(|a| a.input.clone())
                        on:input=move |ev| attempt.update(|a| a.set_input(event_target_value(&ev)))
                        on:keydown=on_input_keydown
                    />
                    <Show when=move || attempt.with(|a| a.error.is_some())>
                        <p class="dialog__error" role="alert">
                            {move || attempt.with(|a| a.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--muted" on:click=on_cancel>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>"↓ Access"</button>
                </div>
            </div>
        </div>
    }
}
