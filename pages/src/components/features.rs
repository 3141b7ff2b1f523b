//! Feature accordion with the screenshot panel beside it.

use crate::types::{FeatureTopic, Slide};
use leptos::prelude::*;

/// Expandable feature topics; the first topic renders open, matching the
/// page's "lead feature first" presentation.
#[component]
pub fn FeatureAccordion(
    heading: String,
    topics: Vec<FeatureTopic>,
    panel: Slide,
) -> impl IntoView {
    view! {
        <div class="feature-grid">
            <div>
                <h2 class="section-title">{heading}</h2>
                <ul class="feature-topics">
                    {topics
                        .into_iter()
                        .enumerate()
                        .map(|(idx, topic)| view! { <Topic topic=topic open=idx == 0 /> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="feature-panel">
                <img src=panel.src alt=panel.alt />
            </div>
        </div>
    }
}

#[component]
fn Topic(topic: FeatureTopic, open: bool) -> impl IntoView {
    let label = format!("{} {}", topic.icon, topic.title);
    let body = if topic.bullets.is_empty() {
        view! {
            <p>{topic.summary.unwrap_or_default()}</p>
        }
        .into_any()
    } else {
        view! {
            <ul>
                {topic
                    .bullets
                    .into_iter()
                    .map(|bullet| view! { <li>{bullet}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <li class="feature-topic">
            <details open=open>
                <summary>{label}</summary>
                {body}
            </details>
        </li>
    }
}
