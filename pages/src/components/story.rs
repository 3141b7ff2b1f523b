//! Company fact card and story article.

use crate::types::{CompanyFacts, Story};
use leptos::prelude::*;

/// Company fact card beside the story article.
#[component]
pub fn StoryBlock(company: CompanyFacts, story: Story) -> impl IntoView {
    let founded = format!("Founded {}", company.founded);
    let team = format!("Team size: {}", company.team_size);
    let funding = format!("Funding: {}", company.funding);
    let site_label = company
        .website
        .trim_start_matches("https://")
        .trim_end_matches('/')
        .to_string();

    view! {
        <section class="section story-grid">
            <aside class="fact-card">
                <div>{founded}</div>
                <div>{company.location}</div>
                <div>{team}</div>
                <div>{funding}</div>
                <a href=company.website>{site_label}</a>
            </aside>
            <article>
                <h3 class="section-title">{story.heading}</h3>
                <p class="story-body">{story.body}</p>
            </article>
        </section>
    }
}
