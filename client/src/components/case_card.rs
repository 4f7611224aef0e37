//! Showcase card with an expandable "blueprint" panel.
//!
//! DESIGN
//! ======
//! Each card owns its own `Disclosure` signal. Opening one card never closes
//! another. The reveal animation is pure CSS and has no effect on state.

use leptos::prelude::*;

use crate::components::decor::{PaperTexture, Sparkline};
use crate::content::case_studies::CaseStudy;
use crate::state::disclosure::Disclosure;

#[component]
pub fn CaseCard(study: CaseStudy) -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::default());
    let is_open = move || disclosure.with(|d| d.open);

    view! {
        <article class="case-card" class:case-card--open=is_open>
            <div class="case-card__body">
                <div class="case-card__header">
                    <div class="case-card__tags">
                        {study.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                    </div>
                    <span class="case-card__ordinal">{study.ordinal()}</span>
                </div>
                <h3 class="case-card__title">{study.title}</h3>
                <p class="case-card__subtitle">{study.subtitle}</p>
                <div class="case-card__metrics">
                    {study
                        .metrics
                        .iter()
                        .enumerate()
                        .map(|(i, metric)| {
                            let lead = i == 0;
                            view! {
                                <div class="metric">
                                    <div class="metric__value-row">
                                        <span class="metric__value">{metric.value}</span>
                                        {lead.then(|| view! { <span class="metric__spark-icon" aria-hidden="true">"✦"</span> })}
                                    </div>
                                    <div class="metric__label">
                                        {metric.label}
                                        {lead.then(|| view! { <Sparkline/> })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="case-card__toggle"
                    class:case-card__toggle--open=is_open
                    aria-expanded=move || if is_open() { "true" } else { "false" }
                    on:click=move |_| disclosure.update(Disclosure::toggle)
                >
                    {move || disclosure.with(|d| d.toggle_label())}
                </button>
            </div>
            <Show when=is_open>
                <div class="blueprint">
                    <PaperTexture/>
                    <div class="blueprint__inner">
                        <div class="blueprint__caption">
                            <span>"// Logic Architecture v1.0"</span>
                            <span>"HAND-SKETCHED"</span>
                        </div>
                        <ol class="blueprint__steps">
                            {study
                                .blueprint
                                .steps
                                .iter()
                                .enumerate()
                                .map(|(i, step)| {
                                    view! {
                                        <li class="blueprint__step" style=format!("animation-delay: {}ms;", i * 150)>
                                            <span class="blueprint__node"></span>
                                            <span class="blueprint__label">{*step}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                        <div class="blueprint__insight">
                            <span class="blueprint__insight-tag">"AVA'S NOTE:"</span>
                            {format!("\"{}\"", study.blueprint.insight)}
                        </div>
                    </div>
                </div>
            </Show>
        </article>
    }
}
