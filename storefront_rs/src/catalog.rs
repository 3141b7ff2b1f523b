//! The static product catalog.
//!
//! Six products, defined at build time and never mutated. The deals listing
//! renders cards straight from these records; detail pages are built from
//! them by [`crate::specs`].

use page_leptos::types::{Accent, Plan, PriceRange, Product, Status};

fn accent(from: &str, to: &str) -> Option<Accent> {
    Some(Accent {
        from: from.into(),
        to: to.into(),
    })
}

/// Every product in the marketplace, in listing order.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            slug: "grigora".into(),
            name: "Adople Voice Agent".into(),
            kind: "Document Search".into(),
            category: "Software".into(),
            short: "Use it to transforms static documents into dynamic conversations—upload \
                    PDFs or other files, ask questions ..."
                .into(),
            price: 59,
            compare_at: Some(299),
            rating: 5.0,
            reviews: 42,
            badge: Some("ADOPLE AI SELECT".into()),
            image: "/image2.png".into(),
            accent: accent("#4f46e5", "#7c3aed"),
            integrations: vec!["WordPress".into(), "Zapier".into()],
            plan: Plan::Lifetime,
            status: Some(Status::New),
            price_range: Some(PriceRange::From50To100),
        },
        Product {
            slug: "jodian".into(),
            name: "SEC Analysis".into(),
            kind: "Audit support".into(),
            category: "Software".into(),
            short: "Use it to evaluate the financial status of your businesses based on key \
                    metrics, trends, and risk indicators..."
                .into(),
            price: 69,
            compare_at: Some(516),
            rating: 4.9,
            reviews: 73,
            badge: Some("ADOPLE AI SELECT".into()),
            image: "/image7.png".into(),
            accent: accent("#0ea5e9", "#4f46e5"),
            integrations: vec!["OpenAI".into(), "Zapier".into()],
            plan: Plan::Subscription,
            status: Some(Status::New),
            price_range: Some(PriceRange::From50To100),
        },
        Product {
            slug: "restreamer".into(),
            name: "Resume Analyzer".into(),
            kind: "Recruitment & HR".into(),
            category: "Software".into(),
            short: "Use this tool evaluates resumes against job descriptions, scoring \
                    candidates by relevance and fit. Recruiters can ..."
                .into(),
            price: 39,
            compare_at: Some(468),
            rating: 4.8,
            reviews: 156,
            badge: Some("ADOPLE AI SELECT".into()),
            image: "/image10.png".into(),
            accent: accent("#9333ea", "#d946ef"),
            integrations: vec!["Meta Ads".into(), "Google Ads".into()],
            plan: Plan::Lifetime,
            status: Some(Status::New),
            price_range: Some(PriceRange::Under50),
        },
        Product {
            slug: "document-insights".into(),
            name: "Document Insights".into(),
            kind: "Document Analysis".into(),
            category: "Software".into(),
            short: "Advanced AI-powered document analysis tool that extracts key insights, \
                    summarizes content, and identifies patterns in your documents..."
                .into(),
            price: 79,
            compare_at: Some(399),
            rating: 4.9,
            reviews: 128,
            badge: Some("ADOPLE AI SELECT".into()),
            image: "/imgs.png".into(),
            accent: accent("#2563eb", "#4f46e5"),
            integrations: vec!["PDF".into(), "Word".into(), "Google Docs".into()],
            plan: Plan::Lifetime,
            status: Some(Status::New),
            price_range: Some(PriceRange::From50To100),
        },
        Product {
            slug: "email-verifier".into(),
            name: "Email Verifier".into(),
            kind: "Email Validation".into(),
            category: "Software".into(),
            short: "Comprehensive, high-performance email verification system that validates \
                    email addresses in real-time using multiple verification techniques..."
                .into(),
            price: 29,
            compare_at: Some(599),
            rating: 4.8,
            reviews: 89,
            badge: Some("ADOPLE AI SELECT".into()),
            image: "/email-img.png".into(),
            accent: accent("#059669", "#0d9488"),
            integrations: vec!["API".into(), "CSV".into(), "SMTP".into()],
            plan: Plan::Lifetime,
            status: Some(Status::New),
            price_range: Some(PriceRange::Under50),
        },
        Product {
            slug: "ai-agents".into(),
            name: "AI Agents".into(),
            kind: "RAG Platform".into(),
            category: "Software".into(),
            short: "Comprehensive Retrieval-Augmented Generation (RAG) platform that combines \
                    document management, AI-powered chat, and knowledge base functionality \
                    with 40+ connectors..."
                .into(),
            price: 99,
            compare_at: Some(999),
            rating: 4.9,
            reviews: 156,
            badge: Some("ADOPLE AI SELECT".into()),
            image: "/agent0.png".into(),
            accent: accent("#9333ea", "#4f46e5"),
            integrations: vec![
                "OpenAI".into(),
                "Google AI".into(),
                "Mistral".into(),
                "LangChain".into(),
            ],
            plan: Plan::Lifetime,
            status: Some(Status::New),
            price_range: Some(PriceRange::From50To100),
        },
    ]
}

/// Look up one product by its slug.
pub fn find(slug: &str) -> Option<Product> {
    products().into_iter().find(|product| product.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_six_products_with_unique_slugs() {
        let products = products();
        assert_eq!(products.len(), 6);
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn find_matches_on_slug() {
        let product = find("ai-agents").unwrap();
        assert_eq!(product.name, "AI Agents");
        assert_eq!(product.price, 99);
        assert!(find("no-such-product").is_none());
    }

    #[test]
    fn compare_at_always_exceeds_price() {
        for product in products() {
            if let Some(compare_at) = product.compare_at {
                assert!(compare_at > product.price, "{}", product.slug);
            }
        }
    }

    #[test]
    fn records_round_trip_through_json() {
        let products = products();
        let json = serde_json::to_string(&products).unwrap();
        // Field names follow the published catalog schema
        assert!(json.contains("\"compareAt\""));
        assert!(json.contains("\"priceRange\""));
        assert!(json.contains("\"50-100\""));
        let back: Vec<page_leptos::types::Product> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), products.len());
        assert_eq!(back[5].slug, "ai-agents");
    }
}
