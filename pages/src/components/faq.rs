//! "Insider Knowledge" FAQ section.
//!
//! The search field and tab strip are presentational affordances of the
//! layout; only the FAQ tab carries content in this site.

use crate::types::FaqEntry;
use leptos::prelude::*;

/// FAQ panel with search affordance and tab strip.
#[component]
pub fn FaqSection(faqs: Vec<FaqEntry>) -> impl IntoView {
    let entries = faqs
        .into_iter()
        .map(|faq| {
            view! {
                <details>
                    <summary>{faq.question}</summary>
                    <p>{faq.answer}</p>
                </details>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="faq" class="section">
            <div class="faq-shell">
                <h3 class="section-title">"Insider Knowledge"</h3>
                <div class="faq-search">
                    <input placeholder="Search" />
                    <button>"Search"</button>
                </div>
                <div class="faq-tabs">
                    <span class="active-tab">"FAQs"</span>
                    <span>"Questions"</span>
                    <span>"Reviews"</span>
                    <span>"News & Updates"</span>
                </div>
                <div class="faq-list">
                    {entries}
                </div>
            </div>
        </section>
    }
}
