//! "Life & Impact" section.

use leptos::prelude::*;

use crate::components::decor::PaperTexture;
use crate::content::impact::{EDUCATION, INTRO, LEADERSHIP_STATS, RECENT_POSTS};

#[component]
pub fn Impact() -> impl IntoView {
    view! {
        <section id="impact" class="impact">
            <div class="impact__inner">
                <div class="impact__header">
                    <h2 class="section-title">"Life & " <span class="section-title__accent">"Impact."</span></h2>
                    <p class="section-lede">{INTRO}</p>
                </div>
                <div class="impact__grid">
                    <div class="impact__foundation">
                        <h3 class="impact__heading">"📖 The Foundation"</h3>
                        <div class="impact__card">
                            <h4>{EDUCATION.school}</h4>
                            <div class="impact__field">{EDUCATION.field}</div>
                            <div class="impact__extras">
                                {EDUCATION.extras.iter().map(|e| view! { <span class="chip">{*e}</span> }).collect_view()}
                            </div>
                        </div>
                        <div class="impact__card impact__card--green">
                            <h4>"Social Responsibility"</h4>
                            <p>
                                "Led a university volunteer team to build classrooms in "
                                <strong>"Enshi mountainous areas"</strong>
                                ". Empowering rural education through infrastructure."
                            </p>
                            <div class="impact__hashtag">"#Altruism"</div>
                        </div>
                    </div>
                    <div class="impact__leadership">
                        <PaperTexture/>
                        <div class="impact__leadership-copy">
                            <div class="pill pill--indigo">"Leadership"</div>
                            <h3>"The Multiplier."</h3>
                            <p>
                                "I believe in open-sourcing knowledge. I've mentored "
                                <span class="impact__emphasis">"10+ individuals"</span>
                                " to land core positions in Big Tech firms by reconstructing their product thinking."
                            </p>
                        </div>
                        <div class="impact__leadership-stats">
                            {LEADERSHIP_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="impact__stat">
                                            <div class="impact__stat-value">{stat.value}</div>
                                            <div class="impact__stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="thinking">
                    <h4 class="thinking__heading">"Recent Thinking"</h4>
                    <div class="thinking__grid">
                        {RECENT_POSTS
                            .iter()
                            .map(|post| {
                                view! {
                                    <a href="#" class="thinking__post">
                                        <div class="thinking__post-head">
                                            <span class="chip chip--round">{post.kind}</span>
                                            <span class="thinking__arrow" aria-hidden="true">"→"</span>
                                        </div>
                                        <h5>{post.title}</h5>
                                        <p>{post.summary}</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
