//! Deals listing page - a product card grid over the whole catalog.

use super::{AppScripts, SiteFooter, SiteHeader};
use crate::styles::{CSP, PAGE_CSS};
use crate::types::{Accent, Product, Theme};
use crate::ScriptAssets;
use leptos::prelude::*;

/// The complete HTML document for the deals listing.
#[component]
pub fn DealsDocument(products: Vec<Product>, assets: ScriptAssets) -> impl IntoView {
    let cards = products
        .into_iter()
        .map(|product| view! { <DealCard product=product /> })
        .collect::<Vec<_>>();

    view! {
        <html class=Theme::default().class()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>"Adople Marketplace"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <SiteHeader />
                <main>
                    <div class="deals-header">
                        <h1 class="section-title">"Explore and manage digital assets"</h1>
                    </div>
                    <section class="section">
                        <div class="card-grid cols-3">
                            {cards}
                        </div>
                    </section>
                </main>
                <SiteFooter />
                <AppScripts assets=assets />
            </body>
        </html>
    }
}

/// One product card linking to its detail page.
#[component]
pub fn DealCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}/", product.slug);
    let price = format!("${}", product.price);
    let rating = format!("★ {:.1} ({} reviews)", product.rating, product.reviews);
    let art_style = product
        .accent
        .as_ref()
        .unwrap_or(&Accent::default())
        .gradient();
    let integrations = product
        .integrations
        .iter()
        .map(|name| view! { <span>{name.clone()}</span> })
        .collect::<Vec<_>>();

    view! {
        <a class="deal-card" href=href>
            <div class="deal-art" style=art_style></div>
            <div class="deal-body">
                {product.badge.map(|badge| view! { <div class="deal-badge">{badge}</div> })}
                <h3 class="deal-name">{product.name}</h3>
                <div class="deal-kind">{product.kind}</div>
                <p class="deal-short">{product.short}</p>
                <div class="deal-rating">{rating}</div>
                <div class="deal-integrations">
                    {integrations}
                </div>
                <div class="deal-meta">
                    <span class="deal-price">{price}</span>
                    {product
                        .compare_at
                        .map(|compare| view! { <span class="deal-compare">{format!("${compare}")}</span> })}
                    <span class="deal-plan">{product.plan.label()}</span>
                </div>
            </div>
        </a>
    }
}
