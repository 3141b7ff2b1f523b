//! Pricing comparison table.
//!
//! Every cell value comes out of [`FeatureMatrix::resolve`], so the table
//! is a pure projection of the tier list against the feature rules - the
//! business logic stays in the types, not the markup.

use super::{Icon, ICON_CHECK, ICON_X};
use crate::types::{FeatureValue, PricingSection, PricingTier};
use leptos::prelude::*;

/// Tier comparison table with one column per pricing tier.
#[component]
pub fn PricingComparison(pricing: PricingSection) -> impl IntoView {
    let header_cells = pricing
        .tiers
        .iter()
        .map(|tier| {
            view! {
                <TierHeader
                    tier=tier.clone()
                    purchase_url=pricing.purchase_url.clone()
                    note=pricing.tier_note.clone()
                />
            }
        })
        .collect::<Vec<_>>();

    let rows = pricing
        .matrix
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let cells = pricing
                .tiers
                .iter()
                .map(|tier| {
                    let value = pricing.matrix.resolve(&row.feature, tier);
                    view! { <td><ValueCell value=value /></td> }
                })
                .collect::<Vec<_>>();
            let class = if idx % 2 == 1 { "alt" } else { "" };
            view! {
                <tr class=class>
                    <td>{row.feature.clone()}</td>
                    {cells}
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="pricing" class="section">
            <h2 class="section-title" style="text-align:center">
                "Choose the plan that's right for you"
            </h2>
            <div class="pricing-table-wrap">
                <table class="pricing-table">
                    <thead>
                        <tr>
                            <th></th>
                            {header_cells}
                        </tr>
                    </thead>
                    <tbody>
                        {rows}
                    </tbody>
                </table>
            </div>
            <p class="fine-print">{pricing.fine_print}</p>
        </section>
    }
}

#[component]
fn TierHeader(tier: PricingTier, purchase_url: String, note: String) -> impl IntoView {
    let price = format!("${}", tier.price);
    view! {
        <th>
            <div class="tier-name">{tier.name}</div>
            <div class="tier-price">{price}</div>
            <a
                href=purchase_url
                target="_blank"
                rel="noopener noreferrer"
                class="tier-buy"
            >
                "Buy now"
            </a>
            <div class="tier-note">{note}</div>
        </th>
    }
}

#[component]
fn ValueCell(value: FeatureValue) -> impl IntoView {
    match value {
        FeatureValue::Label(label) => view! { <span>{label}</span> }.into_any(),
        FeatureValue::Included => view! {
            <span class="value-check"><Icon path=ICON_CHECK size="16" /></span>
        }
        .into_any(),
        FeatureValue::Excluded => view! {
            <span class="value-cross"><Icon path=ICON_X size="16" /></span>
        }
        .into_any(),
    }
}
