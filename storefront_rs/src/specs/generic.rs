//! Fallback page spec derived from a catalog record.
//!
//! Products without a bespoke page get the same layout as the flagship
//! pages, filled from their catalog fields: the standard four-tier ladder,
//! the shared feature rules, and copy built from the record itself.

use page_leptos::types::{
    Accent, CallToAction, CompanyFacts, FaqEntry, FeatureMatrix, FeatureRow, FeatureTopic, Hero,
    HeroMedia, PageSpec, PricingSection, PricingTier, Product, RatingSummary, Slide, Story,
    Testimonial,
};

/// Price multipliers for the four license tiers, matching the ladder the
/// flagship pages use (base, x3, x6, x10).
const TIER_PRICE_FACTORS: [u32; 4] = [1, 3, 6, 10];

/// The shared capacity ladder.
const TIER_CAPACITIES: [u32; 4] = [0, 200, 400, 800];

pub fn spec(product: &Product) -> PageSpec {
    let website = format!("https://{}.ai/", product.slug);
    let purchase_url = website.clone();

    PageSpec {
        slug: product.slug.clone(),
        title: format!("{} - Adople Marketplace", product.name),
        hero: Hero {
            badge: product
                .badge
                .clone()
                .unwrap_or_else(|| "ADOPLE AI SELECT".into()),
            title: format!("{} - {}", product.name, product.kind),
            tagline: product.short.clone(),
            accent: product.accent.clone().unwrap_or(Accent {
                from: "#4f46e5".into(),
                to: "#7c3aed".into(),
            }),
            starting_price: product.price,
            media: HeroMedia::Image {
                src: product.image.clone(),
                alt: product.name.clone(),
            },
        },
        rating: RatingSummary {
            score: product.rating,
            reviews: product.reviews,
        },
        feature_heading: format!("{} Features", product.name),
        features: features(product),
        feature_image: Slide::new(product.image.clone(), product.name.clone()),
        slides: vec![Slide::new(product.image.clone(), product.name.clone())],
        pricing: PricingSection {
            tiers: tiers(product.price),
            matrix: matrix(),
            purchase_url: purchase_url.clone(),
            tier_note: format!("{} access", product.plan.label()),
            fine_print: "Deal terms & conditions. Ability to upgrade between license tiers \
                         within 60 days of purchase."
                .into(),
        },
        company: CompanyFacts {
            founded: "2024".into(),
            location: "San Francisco, United States".into(),
            team_size: "10–25".into(),
            funding: "Seed".into(),
            website,
        },
        story: Story {
            heading: format!("Why teams pick {}", product.name),
            body: product.short.clone(),
        },
        testimonials: testimonials(product),
        story_cards: vec![],
        faqs: faqs(product),
        cta: CallToAction {
            heading: format!("Get started with {} today", product.name),
            tagline: product.kind.clone(),
            label: format!("Get {} now", product.name),
            url: purchase_url,
        },
    }
}

/// Standard tier ladder scaled off the catalog price.
fn tiers(base_price: u32) -> Vec<PricingTier> {
    TIER_PRICE_FACTORS
        .into_iter()
        .zip(TIER_CAPACITIES)
        .enumerate()
        .map(|(idx, (factor, capacity))| PricingTier {
            name: format!("License Tier {}", idx + 1),
            price: base_price * factor,
            capacity,
        })
        .collect()
}

/// Feature rules every product shares; product-specific rows only exist on
/// the bespoke pages.
fn matrix() -> FeatureMatrix {
    FeatureMatrix {
        rows: vec![
            FeatureRow::scaled("Monthly usage credits", [(0, "1,000"), (200, "Unlimited")]),
            FeatureRow::scaled(
                "API access & rate limits",
                [(0, "100/min"), (200, "1000/min")],
            ),
            FeatureRow::unlocked("Team workspaces", 200),
            FeatureRow::unlocked("Advanced analytics", 400),
            FeatureRow::unlocked("Priority support", 400),
            FeatureRow::unlocked("White-label options", 800),
            FeatureRow::unlocked("Custom integrations", 800),
        ],
    }
}

fn features(product: &Product) -> Vec<FeatureTopic> {
    let mut topics = vec![FeatureTopic {
        icon: "✨".into(),
        title: product.kind.clone(),
        summary: Some(product.short.clone()),
        bullets: vec![],
    }];
    if !product.integrations.is_empty() {
        topics.push(FeatureTopic {
            icon: "🔗".into(),
            title: "Integrations".into(),
            summary: None,
            bullets: product
                .integrations
                .iter()
                .map(|name| format!("Works with {name}"))
                .collect(),
        });
    }
    topics.push(FeatureTopic {
        icon: "🛠️".into(),
        title: "Built for teams".into(),
        summary: Some(
            "Shared workspaces, role-based access, and usage analytics on the higher \
             license tiers."
                .into(),
        ),
        bullets: vec![],
    });
    topics
}

fn testimonials(product: &Product) -> Vec<Testimonial> {
    vec![
        Testimonial {
            title: format!("{} paid for itself in a week", product.name),
            quote: "Setup took minutes and the results were immediate.".into(),
            author: "Alex Morgan".into(),
            date: "Mar 2, 2025".into(),
        },
        Testimonial {
            title: "Exactly what our workflow was missing".into(),
            quote: "The lifetime deal made this an easy decision.".into(),
            author: "Priya Natarajan".into(),
            date: "Feb 27, 2025".into(),
        },
        Testimonial {
            title: "Support is fast and helpful".into(),
            quote: "Questions answered within hours, every time.".into(),
            author: "Chris Dubois".into(),
            date: "Feb 21, 2025".into(),
        },
    ]
}

fn faqs(product: &Product) -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: format!("How do I get started with {}?", product.name),
            answer: "Pick a license tier, check out, and your account is ready in minutes."
                .into(),
        },
        FaqEntry {
            question: "Can I upgrade my license later?".into(),
            answer: "Yes - you can upgrade between license tiers within 60 days of purchase."
                .into(),
        },
        FaqEntry {
            question: "Is there a refund policy?".into(),
            answer: "Every deal comes with a 60-day money-back guarantee.".into(),
        },
        FaqEntry {
            question: "Can I integrate with my existing tools?".into(),
            answer: "API access is included in every tier; higher tiers add custom \
                     integrations."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn ladder_scales_off_the_catalog_price() {
        let product = catalog::find("restreamer").unwrap();
        let spec = spec(&product);
        let prices: Vec<_> = spec.pricing.tiers.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![39, 117, 234, 390]);
        let capacities: Vec<_> = spec.pricing.tiers.iter().map(|t| t.capacity).collect();
        assert_eq!(capacities, vec![0, 200, 400, 800]);
    }

    #[test]
    fn spec_inherits_catalog_copy() {
        let product = catalog::find("jodian").unwrap();
        let spec = spec(&product);
        assert_eq!(spec.slug, "jodian");
        assert_eq!(spec.hero.title, "SEC Analysis - Audit support");
        assert_eq!(spec.rating.reviews, 73);
        assert_eq!(spec.pricing.tier_note, "Subscription access");
        assert!(!spec.slides.is_empty());
    }

    #[test]
    fn integrations_become_a_feature_topic() {
        let product = catalog::find("document-insights").unwrap();
        let spec = spec(&product);
        let integrations = spec
            .features
            .iter()
            .find(|topic| topic.title == "Integrations")
            .unwrap();
        assert!(integrations
            .bullets
            .iter()
            .any(|line| line == "Works with Google Docs"));
    }
}
