//! Decorative primitives: tape strips, hand-drawn strokes, paper grain.
//!
//! All stateless and render-only.

use leptos::prelude::*;

/// Translucent strip of washi tape pinned over a photo corner.
#[component]
pub fn WashiTape(#[prop(default = "-2deg")] rotate: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div
            class=format!("washi-tape {class}")
            style=format!("transform: rotate({rotate});")
            aria-hidden="true"
        ></div>
    }
}

/// Wavy underline drawn beneath the hero headline.
#[component]
pub fn HandLine() -> impl IntoView {
    view! {
        <svg class="hand-line" viewBox="0 0 100 10" preserveAspectRatio="none" aria-hidden="true">
            <path
                class="hand-line__stroke draw-in"
                d="M0,5 Q50,10 100,5"
                fill="none"
                stroke="var(--accent)"
                stroke-width="3"
                stroke-linecap="round"
            />
        </svg>
    }
}

/// Small rising trend line shown next to a card's lead metric.
#[component]
pub fn Sparkline(#[prop(default = "var(--secondary)")] color: &'static str) -> impl IntoView {
    view! {
        <svg class="sparkline" viewBox="0 0 100 30" aria-hidden="true">
            <path
                class="draw-in"
                d="M0,25 L20,20 L40,25 L60,10 L80,15 L100,0"
                fill="none"
                stroke=color
                stroke-width="3"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <circle cx="100" cy="0" r="3" fill=color />
        </svg>
    }
}

/// Faint crosshatch overlay for dark panels.
#[component]
pub fn PaperTexture() -> impl IntoView {
    view! { <div class="paper-texture" aria-hidden="true"></div> }
}

/// Squiggle divider under modal headings.
#[component]
pub fn HandDivider() -> impl IntoView {
    view! {
        <div class="hand-divider" aria-hidden="true">
            <svg viewBox="0 0 400 10">
                <path
                    d="M0,5 Q50,2 100,5 Q150,8 200,5 Q250,2 300,5 Q350,8 400,5"
                    fill="none"
                    stroke="var(--primary)"
                    stroke-width="3"
                    stroke-linecap="round"
                />
            </svg>
        </div>
    }
}
