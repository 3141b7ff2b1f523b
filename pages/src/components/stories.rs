//! "Stories you'll love" card strip.

use crate::types::StoryCard;
use leptos::prelude::*;

/// Three-up story card strip.
#[component]
pub fn StoryCards(items: Vec<StoryCard>) -> impl IntoView {
    let cards = items
        .into_iter()
        .map(|item| {
            view! {
                <div class="card">
                    <div class="card-thumb"></div>
                    <h4>{item.title}</h4>
                    <div class="byline">{item.date}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section">
            <h3 class="section-title">"Stories you'll love"</h3>
            <div class="card-grid cols-3">
                {cards}
            </div>
        </section>
    }
}
