//! Home page: the single page of the site.
//!
//! ARCHITECTURE
//! ============
//! The page owns the only cross-section state, the `Overlay` value, and hands
//! open/close callbacks to the navbar, footer, and contact overlay. The
//! resume-access prompt receives the signal itself so a successful
//! submission can close it in the same step that resolves the document.
//! Sections are assembled from `SECTION_ORDER` so the vertical layout is
//! data, not a hand-copied tree.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::{
    contact_modal::ContactModal, footer::Footer, hero::Hero, impact::Impact, logo_wall::LogoWall,
    navbar::Navbar, resume_modal::ResumeAccessModal, showcase::Showcase, solo_lab::SoloLab,
    testimonials::Testimonials,
};
use crate::state::overlay::Overlay;
use crate::theme::SHOWCASE;

/// Page sections, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Navbar,
    Hero,
    LogoWall,
    Showcase,
    SoloLab,
    Impact,
    Testimonials,
    Footer,
}

pub const SECTION_ORDER: &[Section] = &[
    Section::Navbar,
    Section::Hero,
    Section::LogoWall,
    Section::Showcase,
    Section::SoloLab,
    Section::Impact,
    Section::Testimonials,
    Section::Footer,
];

#[component]
pub fn HomePage() -> impl IntoView {
    let overlay = RwSignal::new(Overlay::default());

    let open = move |target: Overlay| {
        #[cfg(feature = "csr")]
        log::debug!("overlay {:?} -> {target:?}", overlay.get_untracked());
        overlay.update(|o| o.open(target));
    };
    let close = move |target: Overlay| {
        #[cfg(feature = "csr")]
        log::debug!("overlay close {target:?}");
        overlay.update(|o| o.close(target));
    };

    let on_resume = Callback::new(move |()| open(Overlay::ResumeAccess));
    let on_contact = Callback::new(move |()| open(Overlay::Contact));
    let close_contact = Callback::new(move |()| close(Overlay::Contact));

    let sections = SECTION_ORDER
        .iter()
        .map(|section| match section {
            Section::Navbar => view! { <Navbar on_resume=on_resume/> }.into_any(),
            Section::Hero => view! { <Hero/> }.into_any(),
            Section::LogoWall => view! { <LogoWall/> }.into_any(),
            Section::Showcase => view! { <Showcase/> }.into_any(),
            Section::SoloLab => view! { <SoloLab/> }.into_any(),
            Section::Impact => view! { <Impact/> }.into_any(),
            Section::Testimonials => view! { <Testimonials/> }.into_any(),
            Section::Footer => view! { <Footer on_contact=on_contact/> }.into_any(),
        })
        .collect_view();

    view! {
        <div class="page" style=SHOWCASE.css_vars()>
            <main>{sections}</main>
            <Show when=move || overlay.get().shows_contact()>
                <ContactModal on_close=close_contact/>
            </Show>
            <Show when=move || overlay.get().shows_resume_access()>
                <ResumeAccessModal overlay=overlay/>
            </Show>
        </div>
    }
}
