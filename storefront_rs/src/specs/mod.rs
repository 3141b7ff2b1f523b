//! Per-product page specifications.
//!
//! One [`PageSpec`] per catalog entry: the flagship products carry bespoke
//! content modules, everything else derives its page from the catalog
//! record. This is the single dispatch point - pages differ in data, never
//! in layout.

use page_leptos::types::{PageSpec, Product};

mod ai_agents;
mod email_verifier;
mod generic;

/// Build the page spec for one product.
pub fn for_product(product: &Product) -> PageSpec {
    match product.slug.as_str() {
        "ai-agents" => ai_agents::spec(),
        "email-verifier" => email_verifier::spec(),
        _ => generic::spec(product),
    }
}

/// Page specs for the whole catalog, in listing order.
pub fn all() -> Vec<PageSpec> {
    crate::catalog::products()
        .iter()
        .map(for_product)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn every_product_gets_a_spec_with_matching_slug() {
        for product in catalog::products() {
            let spec = for_product(&product);
            assert_eq!(spec.slug, product.slug);
            assert!(!spec.slides.is_empty(), "{}", product.slug);
            assert_eq!(spec.pricing.tiers.len(), 4, "{}", product.slug);
        }
    }

    #[test]
    fn flagship_products_use_their_bespoke_pages() {
        let agents = for_product(&catalog::find("ai-agents").unwrap());
        assert_eq!(agents.hero.title, "AI Agents - RAG Platform");
        assert_eq!(agents.slides.len(), 6);

        let verifier = for_product(&catalog::find("email-verifier").unwrap());
        assert_eq!(verifier.feature_heading, "Multi-Layer Verification Pipeline");
    }

    #[test]
    fn all_covers_the_catalog_in_order() {
        let specs = all();
        let slugs: Vec<String> = specs.iter().map(|spec| spec.slug.clone()).collect();
        let expected: Vec<String> = catalog::products()
            .iter()
            .map(|product| product.slug.clone())
            .collect();
        assert_eq!(slugs, expected);
    }
}
