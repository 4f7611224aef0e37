//! Landing hero: headline, pitch, and pinned portrait.

use leptos::prelude::*;

use crate::components::decor::{HandLine, WashiTape};
use crate::components::fallback_image::FallbackImage;
use crate::content::profile::{OWNER_NAME, PROFILE_IMAGE, SHOWCASE_ANCHOR};
use crate::util::browser;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__copy">
                <div class="hero__badge">
                    <span class="hero__badge-dot"></span>
                    "Open for new opportunities"
                </div>
                <h1 class="hero__title">
                    "Architecting " <br/>
                    <span class="hero__title-accent">
                        "Growth."
                        <div class="hero__underline"><HandLine/></div>
                    </span>
                </h1>
                <p class="hero__pitch">
                    "A Senior Product Manager combining "
                    <strong class="hero__highlight">"Game Economics"</strong>
                    " insight with "
                    <strong class="hero__highlight hero__highlight--blue">"FinTech Infrastructure"</strong>
                    " precision."
                    <br/>
                    <span class="hero__location">"Based in Hong Kong. Global Perspective."</span>
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary hero__cta" on:click=move |_| browser::scroll_to_anchor(SHOWCASE_ANCHOR)>
                        "View Showcase →"
                    </button>
                </div>
            </div>
            <div class="hero__visual">
                <div class="hero__polaroid">
                    <div class="hero__photo">
                        <FallbackImage src=PROFILE_IMAGE alt=OWNER_NAME.to_owned() class="hero__photo-img"/>
                    </div>
                    <WashiTape class="washi-tape--top" rotate="-2deg"/>
                    <WashiTape class="washi-tape--bottom" rotate="85deg"/>
                    <div class="hero__sticker">"Ava sailing on the way ⛵️"</div>
                </div>
            </div>
        </section>
    }
}
