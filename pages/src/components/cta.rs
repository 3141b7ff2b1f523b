//! Bottom call-to-action banner.

use crate::types::CallToAction;
use leptos::prelude::*;

/// Centered purchase banner above the footer.
#[component]
pub fn BottomCta(cta: CallToAction) -> impl IntoView {
    view! {
        <section class="bottom-cta">
            <div class="container">
                <h3 class="section-title" style="margin-bottom:0">{cta.heading}</h3>
                <p>{cta.tagline}</p>
                <a
                    href=cta.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="pill-primary"
                >
                    {cta.label}
                </a>
            </div>
        </section>
    }
}
