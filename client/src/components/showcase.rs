//! "Selected Showcase" grid of case cards.

use leptos::prelude::*;

use crate::components::case_card::CaseCard;
use crate::content::case_studies::{CASE_STUDIES, SHOWCASE_SUMMARY};
use crate::content::profile::SHOWCASE_ANCHOR;

#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <section id=SHOWCASE_ANCHOR class="showcase">
            <div class="showcase__header">
                <div>
                    <h2 class="section-title">"Selected " <span class="section-title__accent">"Showcase."</span></h2>
                    <p class="section-lede">"Four key projects demonstrating the convergence of growth and infrastructure."</p>
                </div>
                <div class="showcase__summary">
                    <div class="showcase__summary-label">"Total Impact"</div>
                    <div class="showcase__summary-value">{SHOWCASE_SUMMARY}</div>
                </div>
            </div>
            <div class="showcase__grid">
                {CASE_STUDIES.iter().map(|study| view! { <CaseCard study=*study/> }).collect_view()}
            </div>
        </section>
    }
}
