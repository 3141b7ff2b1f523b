//! Hero banner and the trust bar under it.

use crate::types::{Hero, HeroMedia, RatingSummary};
use leptos::prelude::*;

/// Gradient hero banner with badge, copy, and media panel.
#[component]
pub fn HeroSection(hero: Hero) -> impl IntoView {
    let starting = format!("Starting at ${}", hero.starting_price);
    let media = match hero.media {
        HeroMedia::Image { src, alt } => view! {
            <div class="hero-media">
                <img src=src alt=alt />
            </div>
        }
        .into_any(),
        HeroMedia::ComingSoon { note } => view! {
            <div class="hero-media">
                <div class="hero-coming-soon">
                    <h3>"Coming Soon"</h3>
                    <p>{note}</p>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="hero" style=hero.accent.gradient()>
            <div class="hero-grid">
                <div>
                    <div class="hero-badge">
                        <span>{hero.badge}</span>
                    </div>
                    <h1 class="hero-title">{hero.title}</h1>
                    <p class="hero-tagline">{hero.tagline}</p>
                    <div class="hero-actions">
                        <a href="#pricing" class="pill-primary">{starting}</a>
                        <a href="/" class="pill-ghost">"View all deals"</a>
                    </div>
                </div>
                {media}
            </div>
        </section>
    }
}

/// "ADOPLE AI ★★★★★ 4.9/5 from 156 reviews" strip.
#[component]
pub fn TrustBar(rating: RatingSummary) -> impl IntoView {
    let summary = format!("{:.1}/5 from {} reviews", rating.score, rating.reviews);
    view! {
        <div class="trust-bar">
            <span>"ADOPLE AI"</span>
            <span class="stars">"★★★★★"</span>
            <span>{summary}</span>
        </div>
    }
}
