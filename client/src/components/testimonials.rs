//! Quotes from colleagues and mentees.

use leptos::prelude::*;

use crate::content::testimonials::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="testimonials__inner">
                <div class="testimonials__heading">
                    <span class="testimonials__heart" aria-hidden="true">"♥"</span>
                    <span>"Loved by Colleagues & Mentees"</span>
                </div>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class=format!("quote quote--{}", t.accent)>
                                    <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                    <figcaption class="quote__author">
                                        <div class="quote__avatar">{t.initials}</div>
                                        <div>
                                            <div class="quote__source">{t.source}</div>
                                            <div class="quote__role">{t.role}</div>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
