//! Leptos UI components for rendering the storefront pages.
//!
//! This module contains modular components for building the static HTML
//! pages. Each component is a Leptos `#[component]` function that can be
//! composed to create custom layouts.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (per product)
//! ├── SiteHeader (nav + theme toggle)
//! ├── HeroSection
//! ├── TrustBar
//! ├── FeatureAccordion
//! ├── ImageCarousel
//! ├── PricingComparison
//! ├── StoryBlock
//! ├── Testimonials
//! ├── StoryCards
//! ├── FaqSection
//! ├── BottomCta
//! └── SiteFooter
//!
//! DealsDocument (listing)
//! └── DealCard (per catalog entry)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_product_page`] and
//! [`crate::render_deals_page`], but can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use page_leptos::components::{ImageCarousel, PricingComparison};
//!
//! view! {
//!     <ImageCarousel slides=my_slides />
//!     <PricingComparison pricing=my_pricing />
//! }
//! ```

mod carousel;
mod cta;
mod deals;
mod document;
mod faq;
mod features;
mod footer;
mod header;
mod hero;
mod icons;
mod pricing;
mod stories;
mod story;
mod testimonials;

pub use carousel::ImageCarousel;
pub use cta::BottomCta;
pub use deals::{DealCard, DealsDocument};
pub use document::PageDocument;
pub(crate) use document::AppScripts;
pub use faq::FaqSection;
pub use features::FeatureAccordion;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::{HeroSection, TrustBar};
pub use icons::*;
pub use pricing::PricingComparison;
pub use stories::StoryCards;
pub use story::StoryBlock;
pub use testimonials::Testimonials;
