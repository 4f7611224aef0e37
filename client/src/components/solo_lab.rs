//! Solo Lab: the Wanderlust side project with its phone carousel.

use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::content::solo_lab::{GAME_SCREENS, GROWTH_CURVE, MILESTONES, STAT_TILES, TAGS};
use crate::state::carousel::Carousel;
use crate::theme::SOLO_LAB;

#[component]
pub fn SoloLab() -> impl IntoView {
    view! {
        <section id="solo-lab" class="solo-lab" style=SOLO_LAB.css_vars()>
            <div class="solo-lab__dots" aria-hidden="true"></div>
            <div class="solo-lab__inner">
                <div class="solo-lab__header">
                    <div>
                        <div class="solo-lab__eyebrow">
                            <span class="pill pill--orange">"Solo Lab"</span>
                            <span class="solo-lab__kicker">"SIDE PROJECT"</span>
                        </div>
                        <h2 class="solo-lab__title">
                            "Project: Wanderlust" <br/>
                            <span class="solo-lab__subtitle">"The 24h Launch Experiment"</span>
                        </h2>
                    </div>
                    <div class="solo-lab__powered">"✨ Powered by AI-Agent & Cursor"</div>
                </div>

                <div class="solo-lab__grid">
                    <div class="solo-lab__phone-col">
                        <div class="solo-lab__glow" aria-hidden="true"></div>
                        <PhoneCarousel screens=GAME_SCREENS/>
                        <div class="solo-lab__credit">"Ghibli-Game By Ava"</div>
                    </div>

                    <div class="solo-lab__stats">
                        <div class="growth-card">
                            <div class="growth-card__label">"VIRAL GROWTH TRAJECTORY"</div>
                            <div class="growth-card__chart">
                                <GrowthPath/>
                            </div>
                            <div class="growth-card__tags">
                                {TAGS.iter().map(|tag| view! { <span class="tag tag--square">{format!("#{tag}")}</span> }).collect_view()}
                            </div>
                        </div>
                        <div class="solo-lab__tiles">
                            {STAT_TILES
                                .iter()
                                .map(|tile| {
                                    view! {
                                        <div class=format!("stat-tile stat-tile--{}", tile.tone)>
                                            <div class="stat-tile__value">{tile.value}</div>
                                            <div class="stat-tile__label">{tile.label}</div>
                                            <div class="stat-tile__caption">{tile.caption}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Hand-drawn growth curve with annotated milestones.
#[component]
fn GrowthPath() -> impl IntoView {
    view! {
        <svg class="growth-path" viewBox="0 0 200 120">
            <line x1="10" y1="10" x2="10" y2="110" class="growth-path__axis"/>
            <line x1="10" y1="110" x2="190" y2="110" class="growth-path__axis"/>
            <path
                class="growth-path__curve draw-in"
                d=GROWTH_CURVE
                fill="none"
                stroke="var(--secondary)"
                stroke-width="3"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <g class="growth-path__labels">
                {MILESTONES
                    .iter()
                    .map(|m| {
                        let class = if m.emphasized { "growth-path__milestone growth-path__milestone--hot" } else { "growth-path__milestone" };
                        view! {
                            <circle cx=m.x.to_string() cy=m.y.to_string() r="3" class=class/>
                            <text x={(m.x + 5.0).to_string()} y=m.y.to_string() class=class>{m.label}</text>
                        }
                    })
                    .collect_view()}
            </g>
        </svg>
    }
}

/// Phone mockup cycling through screenshots via dot buttons.
///
/// Only the dots move the index; there is no timer and no wraparound.
#[component]
pub fn PhoneCarousel(screens: &'static [&'static str]) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(screens.len()));

    view! {
        <div class="phone">
            <div class="phone__frame">
                <div class="phone__notch"></div>
                <div class="phone__screen">
                    {screens
                        .iter()
                        .enumerate()
                        .map(|(idx, src)| {
                            view! {
                                <div class="phone__slide" class:phone__slide--active=move || carousel.with(|c| c.is_active(idx))>
                                    <FallbackImage src=*src alt=format!("Game screen {}", idx + 1) class="phone__img"/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="phone__dots">
                    {(0..screens.len())
                        .map(|idx| {
                            view! {
                                <button
                                    class="phone__dot"
                                    class:phone__dot--active=move || carousel.with(|c| c.is_active(idx))
                                    on:click=move |_| carousel.update(|c| {
                                        c.select(idx);
                                    })
                                >
                                    <span class="sr-only">{format!("Screen {}", idx + 1)}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="phone__sun" aria-hidden="true"></div>
        </div>
    }
}
