//! # page-leptos
//!
//! Leptos SSR renderer for the Adople AI Marketplace storefront.
//!
//! This crate provides a type-safe, component-based approach to generating
//! the marketplace's static HTML pages using [Leptos](https://leptos.dev/)
//! server-side rendering. One generic page layout is rendered from a
//! per-product [`types::PageSpec`] - a data-driven template rather than one
//! hand-written page per product.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed; a small
//!   inline script wires the theme toggle and carousel controls
//! - **Component-Based** - Modular, reusable UI components
//! - **Type-Safe** - Full Rust type safety from catalog data to HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::{render_product_page, ScriptAssets, types::{PageSpec, Slide}};
//!
//! // Create page data (normally built from the catalog)
//! let spec = PageSpec {
//!     slug: "email-verifier".into(),
//!     title: "Email Verifier - Adople Marketplace".into(),
//!     slides: vec![Slide::new("/email.png", "Email Verifier Dashboard")],
//!     ..Default::default()
//! };
//!
//! // Render to HTML string
//! let html = render_product_page(&spec, &ScriptAssets::default());
//!
//! // Write to file
//! std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{DealsDocument, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{PageSpec, Product};

/// Render a complete product detail page.
///
/// This is the main entry point for product pages. It takes one
/// [`PageSpec`] and produces a complete HTML document as a string.
///
/// # Example
///
/// ```rust
/// use page_leptos::{render_product_page, ScriptAssets, types::PageSpec};
///
/// let spec = PageSpec {
///     title: "AI Agents - Adople Marketplace".into(),
///     ..Default::default()
/// };
/// let html = render_product_page(&spec, &ScriptAssets::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_product_page(spec: &PageSpec, assets: &ScriptAssets) -> String {
    let doc = view! {
        <PageDocument spec=spec.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the deals listing page from the catalog.
pub fn render_deals_page(products: &[Product], assets: &ScriptAssets) -> String {
    let doc = view! {
        <DealsDocument products=products.to_vec() assets=assets.clone() />
    };

    let html = doc.to_html();

    format!("<!DOCTYPE html>\n{}", html)
}

/// Paths to the optional browser-native stepping module.
///
/// The carousel and theme logic ship as an inline script either way; when
/// both paths are set, the generated pages also load the `page-wasm` module
/// and route the carousel arithmetic through it.
///
/// # Example
///
/// ```rust
/// use page_leptos::ScriptAssets;
///
/// // Bundled module next to the generated pages
/// let assets = ScriptAssets {
///     wasm_glue_path: "/assets/page_wasm.js".into(),
///     wasm_module_path: "/assets/page_wasm_bg.wasm".into(),
/// };
///
/// // Or use defaults (empty paths - inline fallback only)
/// let assets = ScriptAssets::default();
/// ```
#[derive(Clone, Default, Debug)]
pub struct ScriptAssets {
    /// Path to the wasm-bindgen JS glue file.
    pub wasm_glue_path: String,
    /// Path to the `.wasm` module itself.
    pub wasm_module_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{
        CallToAction, CompanyFacts, FaqEntry, FeatureMatrix, FeatureRow, FeatureTopic, Hero,
        HeroMedia, PageSpec, PricingSection, PricingTier, Product, RatingSummary, Slide, Story,
        StoryCard, Testimonial,
    };

    fn sample_spec() -> PageSpec {
        PageSpec {
            slug: "ai-agents".into(),
            title: "AI Agents - Adople Marketplace".into(),
            hero: Hero {
                badge: "ADOPLE AI SELECT".into(),
                title: "AI Agents - RAG Platform".into(),
                tagline: "Document management, AI-powered chat, and a knowledge base.".into(),
                starting_price: 99,
                media: HeroMedia::Image {
                    src: "/agent0.png".into(),
                    alt: "AI Agents Platform".into(),
                },
                ..Default::default()
            },
            rating: RatingSummary {
                score: 4.9,
                reviews: 156,
            },
            feature_heading: "Comprehensive RAG Platform Features".into(),
            features: vec![FeatureTopic {
                icon: "🤖".into(),
                title: "AI Chat & Assistants".into(),
                bullets: vec!["Real-time streaming chat".into()],
                ..Default::default()
            }],
            feature_image: Slide::new("/agent1.png", "RAG Platform Interface"),
            slides: vec![
                Slide::new("/agent1.png", "AI Agents Dashboard"),
                Slide::new("/agent2.png", "RAG Platform Interface"),
                Slide::new("/agent3.png", "Document Management"),
            ],
            pricing: PricingSection {
                tiers: vec![
                    PricingTier {
                        name: "License Tier 1".into(),
                        price: 99,
                        capacity: 0,
                    },
                    PricingTier {
                        name: "License Tier 2".into(),
                        price: 299,
                        capacity: 200,
                    },
                    PricingTier {
                        name: "License Tier 3".into(),
                        price: 599,
                        capacity: 400,
                    },
                    PricingTier {
                        name: "License Tier 4".into(),
                        price: 999,
                        capacity: 800,
                    },
                ],
                matrix: FeatureMatrix {
                    rows: vec![
                        FeatureRow::scaled(
                            "AI chat conversations per month",
                            [(0, "1,000"), (200, "Unlimited")],
                        ),
                        FeatureRow::unlocked("Custom AI assistants", 200),
                    ],
                },
                purchase_url: "http://agent.adople.in/".into(),
                tier_note: "Lifetime access".into(),
                fine_print: "Deal terms & conditions. Lifetime access.".into(),
            },
            company: CompanyFacts {
                founded: "March 1, 2024".into(),
                location: "San Francisco, United States".into(),
                team_size: "25–50".into(),
                funding: "Series B".into(),
                website: "https://ai-agents.ai/".into(),
            },
            story: Story {
                heading: "Revolutionizing knowledge management with AI".into(),
                body: "AI Agents was built to solve information overload.".into(),
            },
            testimonials: vec![Testimonial {
                title: "AI Agents transformed our knowledge management".into(),
                quote: "The central hub for all our knowledge.".into(),
                author: "Sarah Johnson".into(),
                date: "Mar 15, 2025".into(),
            }],
            story_cards: vec![StoryCard {
                title: "How to Build an Enterprise Knowledge Base".into(),
                date: "Mar 20, 2025".into(),
            }],
            faqs: vec![FaqEntry {
                question: "How do I get started with AI Agents?".into(),
                answer: "Sign up for free and upload your documents.".into(),
            }],
            cta: CallToAction {
                heading: "Transform your knowledge management today".into(),
                tagline: "Powered by advanced RAG technology.".into(),
                label: "Get AI Agents now".into(),
                url: "http://agent.adople.in/".into(),
            },
        }
    }

    #[test]
    fn renders_product_page_shell() {
        let html = render_product_page(&sample_spec(), &ScriptAssets::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("AI Agents - RAG Platform"));
        assert!(html.contains("ADOPLE AI SELECT"));
        assert!(html.contains("theme-dark"));
    }

    #[test]
    fn renders_four_tier_columns() {
        let html = render_product_page(&sample_spec(), &ScriptAssets::default());

        for tier in 1..=4 {
            assert!(html.contains(&format!("License Tier {tier}")));
        }
        assert_eq!(html.matches("Buy now").count(), 4);
        assert!(html.contains("$999"));
    }

    #[test]
    fn renders_one_dot_per_slide() {
        let html = render_product_page(&sample_spec(), &ScriptAssets::default());

        // data-goto appears only on the dot buttons, one per slide
        assert_eq!(html.matches("data-goto").count(), 3);
        assert_eq!(html.matches("\"carousel-slide").count(), 3);
        // First slide starts active
        assert_eq!(html.matches("\"carousel-slide active\"").count(), 1);
    }

    #[test]
    fn matrix_cells_follow_tier_capacity() {
        let html = render_product_page(&sample_spec(), &ScriptAssets::default());

        assert!(html.contains("1,000"));
        assert!(html.contains("Unlimited"));
        // Tier 1 misses "Custom AI assistants", tiers 2-4 include it
        assert_eq!(html.matches("\"value-cross\"").count(), 1);
        assert_eq!(html.matches("\"value-check\"").count(), 3);
    }

    #[test]
    fn empty_slides_render_no_carousel() {
        let mut spec = sample_spec();
        spec.slides.clear();
        let html = render_product_page(&spec, &ScriptAssets::default());

        // The wiring script stays, the carousel markup goes
        assert!(!html.contains("data-carousel="));
        assert!(!html.contains("data-goto"));
    }

    #[test]
    fn bootstrap_script_owns_theme_key() {
        let html = render_product_page(&sample_spec(), &ScriptAssets::default());

        assert!(html.contains("localStorage.getItem(THEME_KEY)"));
        assert!(html.contains("const THEME_KEY = 'theme'"));
        // Invalid values resolve to dark
        assert!(html.contains("stored === 'light' || stored === 'dark' ? stored : 'dark'"));
        // No module loader without assets
        assert!(!html.contains("type=\"module\""));
    }

    #[test]
    fn wasm_assets_add_module_loader() {
        let assets = ScriptAssets {
            wasm_glue_path: "/assets/page_wasm.js".into(),
            wasm_module_path: "/assets/page_wasm_bg.wasm".into(),
        };
        let html = render_product_page(&sample_spec(), &assets);

        assert!(html.contains("/assets/page_wasm.js"));
        assert!(html.contains("window.__pageWasm = pageWasm"));
    }

    #[test]
    fn renders_deals_listing() {
        let products = vec![
            Product {
                slug: "ai-agents".into(),
                name: "AI Agents".into(),
                kind: "RAG Platform".into(),
                price: 99,
                compare_at: Some(999),
                rating: 4.9,
                reviews: 156,
                badge: Some("ADOPLE AI SELECT".into()),
                ..Default::default()
            },
            Product {
                slug: "email-verifier".into(),
                name: "Email Verifier".into(),
                kind: "Email Validation".into(),
                price: 29,
                rating: 4.8,
                reviews: 89,
                ..Default::default()
            },
        ];
        let html = render_deals_page(&products, &ScriptAssets::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Adople Marketplace"));
        assert!(html.contains("/products/ai-agents/"));
        assert!(html.contains("/products/email-verifier/"));
        assert!(html.contains("$29"));
        assert!(html.contains("$999"));
    }
}
