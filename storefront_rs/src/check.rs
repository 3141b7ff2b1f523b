//! Validation pass over the catalog and the generated page specs.
//!
//! `storefront check` runs this before a deploy; the same invariants are
//! what the renderer and the carousel rely on (non-empty slides, ascending
//! tier ladder, total scaled rules).

use page_leptos::types::{FeatureRule, PageSpec, Product};
use thiserror::Error;

/// One invariant violation found by the validation pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("duplicate product slug {0:?}")]
    DuplicateSlug(String),

    #[error("product {slug:?} has an empty slug or name")]
    MissingIdentity { slug: String },

    #[error("product {slug:?}: compare-at price {compare_at} does not exceed price {price}")]
    CompareAtNotAbovePrice {
        slug: String,
        price: u32,
        compare_at: u32,
    },

    #[error("page {slug:?} has no carousel slides")]
    NoSlides { slug: String },

    #[error("page {slug:?}: expected 4 pricing tiers, found {found}")]
    WrongTierCount { slug: String, found: usize },

    #[error("page {slug:?}: tier capacities must be strictly ascending")]
    UnorderedTiers { slug: String },

    #[error("page {slug:?}: scaled rule {feature:?} is missing its base step at capacity 0")]
    ScaledRuleWithoutBase { slug: String, feature: String },

    #[error("page {slug:?}: scaled rule {feature:?} steps must be strictly ascending")]
    UnorderedSteps { slug: String, feature: String },

    #[error("page {slug:?} has no purchase URL")]
    MissingPurchaseUrl { slug: String },
}

/// Validate the catalog records.
pub fn check_catalog(products: &[Product]) -> Vec<CheckError> {
    let mut findings = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for product in products {
        if product.slug.is_empty() || product.name.is_empty() {
            findings.push(CheckError::MissingIdentity {
                slug: product.slug.clone(),
            });
        }
        if !seen.insert(product.slug.clone()) {
            findings.push(CheckError::DuplicateSlug(product.slug.clone()));
        }
        if let Some(compare_at) = product.compare_at {
            if compare_at <= product.price {
                findings.push(CheckError::CompareAtNotAbovePrice {
                    slug: product.slug.clone(),
                    price: product.price,
                    compare_at,
                });
            }
        }
    }

    findings
}

/// Validate one page spec.
pub fn check_spec(spec: &PageSpec) -> Vec<CheckError> {
    let mut findings = Vec::new();
    let slug = spec.slug.clone();

    if spec.slides.is_empty() {
        findings.push(CheckError::NoSlides { slug: slug.clone() });
    }

    if spec.pricing.tiers.len() != 4 {
        findings.push(CheckError::WrongTierCount {
            slug: slug.clone(),
            found: spec.pricing.tiers.len(),
        });
    }
    let capacities: Vec<u32> = spec.pricing.tiers.iter().map(|tier| tier.capacity).collect();
    if capacities.windows(2).any(|pair| pair[0] >= pair[1]) {
        findings.push(CheckError::UnorderedTiers { slug: slug.clone() });
    }

    for row in &spec.pricing.matrix.rows {
        if let FeatureRule::Scaled { steps } = &row.rule {
            if steps.first().map(|step| step.min_capacity) != Some(0) {
                findings.push(CheckError::ScaledRuleWithoutBase {
                    slug: slug.clone(),
                    feature: row.feature.clone(),
                });
            }
            if steps
                .windows(2)
                .any(|pair| pair[0].min_capacity >= pair[1].min_capacity)
            {
                findings.push(CheckError::UnorderedSteps {
                    slug: slug.clone(),
                    feature: row.feature.clone(),
                });
            }
        }
    }

    if spec.pricing.purchase_url.is_empty() {
        findings.push(CheckError::MissingPurchaseUrl { slug });
    }

    findings
}

/// Validate the whole site: catalog plus every page spec.
pub fn check_site() -> Vec<CheckError> {
    let products = crate::catalog::products();
    let mut findings = check_catalog(&products);
    for product in &products {
        findings.extend(check_spec(&crate::specs::for_product(product)));
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_leptos::types::{FeatureRow, PricingTier, Slide};

    #[test]
    fn shipped_site_passes() {
        let findings = check_site();
        assert!(findings.is_empty(), "{findings:?}");
    }

    #[test]
    fn duplicate_slugs_are_reported() {
        let mut products = crate::catalog::products();
        products.push(products[0].clone());
        let findings = check_catalog(&products);
        assert!(findings
            .iter()
            .any(|f| matches!(f, CheckError::DuplicateSlug(slug) if slug == "grigora")));
    }

    #[test]
    fn empty_slides_are_reported() {
        let mut spec = crate::specs::for_product(&crate::catalog::find("ai-agents").unwrap());
        spec.slides.clear();
        let findings = check_spec(&spec);
        assert!(findings
            .iter()
            .any(|f| matches!(f, CheckError::NoSlides { .. })));
    }

    #[test]
    fn baseless_scaled_rule_is_reported() {
        let mut spec = crate::specs::for_product(&crate::catalog::find("grigora").unwrap());
        spec.pricing.matrix.rows.push(FeatureRow::scaled(
            "Mystery meter",
            [(200, "some"), (400, "more")],
        ));
        let findings = check_spec(&spec);
        assert!(findings.iter().any(
            |f| matches!(f, CheckError::ScaledRuleWithoutBase { feature, .. } if feature == "Mystery meter")
        ));
    }

    #[test]
    fn descending_tiers_are_reported() {
        let mut spec = crate::specs::for_product(&crate::catalog::find("grigora").unwrap());
        spec.pricing.tiers = vec![
            PricingTier {
                name: "A".into(),
                price: 1,
                capacity: 400,
            },
            PricingTier {
                name: "B".into(),
                price: 2,
                capacity: 200,
            },
            PricingTier {
                name: "C".into(),
                price: 3,
                capacity: 600,
            },
            PricingTier {
                name: "D".into(),
                price: 4,
                capacity: 800,
            },
        ];
        let findings = check_spec(&spec);
        assert!(findings
            .iter()
            .any(|f| matches!(f, CheckError::UnorderedTiers { .. })));
    }

    #[test]
    fn default_spec_reports_missing_pricing() {
        let spec = PageSpec {
            slug: "broken".into(),
            slides: vec![Slide::new("/x.png", "x")],
            ..Default::default()
        };
        let findings = check_spec(&spec);
        // Default spec has zero tiers and no purchase URL
        assert!(findings
            .iter()
            .any(|f| matches!(f, CheckError::WrongTierCount { found: 0, .. })));
        assert!(findings
            .iter()
            .any(|f| matches!(f, CheckError::MissingPurchaseUrl { .. })));
    }
}
