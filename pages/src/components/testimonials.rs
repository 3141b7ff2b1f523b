//! Customer testimonial grid.

use crate::types::Testimonial;
use leptos::prelude::*;

/// Six-up testimonial card grid.
#[component]
pub fn Testimonials(items: Vec<Testimonial>) -> impl IntoView {
    let cards = items
        .into_iter()
        .map(|item| {
            let byline = format!("{} — {}", item.date, item.author);
            view! {
                <div class="card">
                    <div class="stars">"★★★★★"</div>
                    <h4>{item.title}</h4>
                    <p class="quote">{item.quote}</p>
                    <div class="byline">{byline}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section">
            <h3 class="section-title">"See what customers are saying"</h3>
            <div class="card-grid cols-3">
                {cards}
            </div>
        </section>
    }
}
