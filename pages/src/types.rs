//! Data types for storefront page content.
//!
//! These types define the data model a page is rendered from. They're
//! designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Default-able** - Create partial specs with `..Default::default()`
//!
//! The two pieces of behavior the storefront actually computes live here,
//! on the data types themselves: [`FeatureMatrix::resolve`] (which pricing
//! tier gets which feature value) and [`Carousel`] (cyclic slide
//! navigation). Everything else is declarative content.
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{FeatureMatrix, FeatureRow, PricingTier};
//!
//! let matrix = FeatureMatrix {
//!     rows: vec![
//!         FeatureRow::unlocked("Priority support", 400),
//!         FeatureRow::scaled("API access & rate limits", [(0, "100/min"), (200, "1000/min")]),
//!     ],
//! };
//!
//! let tier = PricingTier {
//!     name: "License Tier 3".into(),
//!     price: 599,
//!     capacity: 400,
//! };
//! assert!(matrix.resolve("Priority support", &tier).is_included());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tier label as it would be carried into a cart line item.
///
/// Checkout itself is out of scope for this site; the alias is the only
/// cart surface the pages keep.
pub type TierName = String;

// ============================================================================
// Catalog records
// ============================================================================

/// Licensing model offered for a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    /// Pay once, keep forever.
    #[default]
    Lifetime,
    /// Recurring billing.
    Subscription,
    /// Single non-recurring purchase.
    #[serde(rename = "One-time")]
    OneTime,
}

impl Plan {
    /// Short label shown on product cards.
    pub fn label(self) -> &'static str {
        match self {
            Plan::Lifetime => "Lifetime",
            Plan::Subscription => "Subscription",
            Plan::OneTime => "One-time",
        }
    }
}

/// Merchandising status flag for a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Recently listed.
    New,
    /// Selling fast.
    Hot,
    /// Deal about to close.
    Ending,
}

/// Price bucket used by the listing page filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    /// Below $50.
    #[serde(rename = "under-50")]
    Under50,
    /// $50 to $100.
    #[serde(rename = "50-100")]
    From50To100,
    /// Above $100.
    #[serde(rename = "100-plus")]
    Over100,
}

/// Gradient accent used by a product's hero and card art.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent {
    /// Gradient start color (CSS color value).
    pub from: String,
    /// Gradient end color (CSS color value).
    pub to: String,
}

impl Accent {
    /// Inline CSS background for this accent.
    pub fn gradient(&self) -> String {
        format!("background: linear-gradient(90deg, {}, {});", self.from, self.to)
    }
}

/// One product descriptor in the static catalog.
///
/// Defined at build time, never mutated at runtime. The listing page renders
/// cards from these records; the detail pages are rendered from a
/// [`PageSpec`] built per product.
///
/// # Example
///
/// ```rust
/// use page_leptos::types::{Plan, Product};
///
/// let product = Product {
///     slug: "email-verifier".into(),
///     name: "Email Verifier".into(),
///     kind: "Email Validation".into(),
///     price: 29,
///     compare_at: Some(599),
///     plan: Plan::Lifetime,
///     ..Default::default()
/// };
/// assert_eq!(product.slug, "email-verifier");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Product {
    /// Unique key; doubles as the detail-page path segment.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Product type line ("RAG Platform", "Email Validation", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Top-level category.
    pub category: String,
    /// Short description for cards.
    pub short: String,
    /// Current price in whole dollars.
    pub price: u32,
    /// Struck-through comparison price, when shown.
    #[serde(rename = "compareAt")]
    pub compare_at: Option<u32>,
    /// Average review score out of 5.
    pub rating: f32,
    /// Review count backing the score.
    pub reviews: u32,
    /// Select-program badge copy, when the product carries one.
    pub badge: Option<String>,
    /// Primary image path (resolution delegated to the hosting layer).
    pub image: String,
    /// Hero/card gradient accent.
    pub accent: Option<Accent>,
    /// Integration names listed on the card.
    #[serde(default)]
    pub integrations: Vec<String>,
    /// Licensing model.
    #[serde(default)]
    pub plan: Plan,
    /// Merchandising flag.
    pub status: Option<Status>,
    /// Listing price bucket.
    #[serde(rename = "priceRange")]
    pub price_range: Option<PriceRange>,
}

// ============================================================================
// Pricing tiers and the feature matrix
// ============================================================================

/// A named pricing level in the comparison table.
///
/// `capacity` is a numeric proxy used purely to branch which features are
/// marked available; it is not displayed anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Tier label ("License Tier 1", ...).
    pub name: TierName,
    /// Price in whole dollars.
    pub price: u32,
    /// Capacity proxy gating feature availability. The shipped catalog uses
    /// the ladder {0, 200, 400, 800}.
    pub capacity: u32,
}

/// Displayed value of one feature cell in the comparison table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// Fixed text such as "Unlimited" or "1000/min".
    Label(String),
    /// Rendered as a checkmark.
    Included,
    /// Rendered as a cross.
    Excluded,
}

impl FeatureValue {
    /// True for the checkmark value.
    pub fn is_included(&self) -> bool {
        matches!(self, FeatureValue::Included)
    }
}

/// One step of a capacity-scaled feature label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityStep {
    /// Minimum capacity at which this label applies.
    pub min_capacity: u32,
    /// Label shown for tiers at or above the threshold.
    pub label: String,
}

/// How one feature row resolves against a tier's capacity.
///
/// Thresholds are inequalities against the capacity proxy, so availability
/// is monotone by construction: a tier with more capacity never loses a
/// feature a smaller tier has.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureRule {
    /// Checkmark for tiers with `capacity >= min_capacity`, cross below.
    /// `min_capacity: 0` marks a feature every tier includes.
    Unlocked {
        /// Capacity threshold.
        min_capacity: u32,
    },
    /// Text label that steps up with capacity. Steps are ascending and the
    /// first step sits at capacity 0, so the rule is total over all tiers.
    Scaled {
        /// Ascending label steps.
        steps: Vec<CapacityStep>,
    },
}

impl FeatureRule {
    /// Resolve this rule for a tier capacity.
    pub fn value_for(&self, capacity: u32) -> FeatureValue {
        match self {
            FeatureRule::Unlocked { min_capacity } => {
                if capacity >= *min_capacity {
                    FeatureValue::Included
                } else {
                    FeatureValue::Excluded
                }
            }
            FeatureRule::Scaled { steps } => steps
                .iter()
                .filter(|step| capacity >= step.min_capacity)
                .next_back()
                .map(|step| FeatureValue::Label(step.label.clone()))
                // A well-formed rule has a base step at 0; an empty or
                // baseless rule degrades to a cross instead of panicking.
                .unwrap_or(FeatureValue::Excluded),
        }
    }
}

/// One row of the comparison table: feature name plus its rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Exact feature name as displayed (and matched) in the table.
    pub feature: String,
    /// Resolution rule for the row.
    pub rule: FeatureRule,
}

impl FeatureRow {
    /// Row that unlocks at the given capacity.
    pub fn unlocked(feature: impl Into<String>, min_capacity: u32) -> Self {
        FeatureRow {
            feature: feature.into(),
            rule: FeatureRule::Unlocked { min_capacity },
        }
    }

    /// Row whose label scales with capacity.
    pub fn scaled<L>(feature: impl Into<String>, steps: impl IntoIterator<Item = (u32, L)>) -> Self
    where
        L: Into<String>,
    {
        FeatureRow {
            feature: feature.into(),
            rule: FeatureRule::Scaled {
                steps: steps
                    .into_iter()
                    .map(|(min_capacity, label)| CapacityStep {
                        min_capacity,
                        label: label.into(),
                    })
                    .collect(),
            },
        }
    }
}

/// The per-product pricing-feature table.
///
/// Holds every pricing-tier business rule for one product page. Resolution
/// is total and deterministic: same `(feature, tier)` input, same output,
/// and unrecognized feature names default to [`FeatureValue::Included`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    /// Table rows, in display order.
    pub rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    /// Resolve a feature name against a tier.
    pub fn resolve(&self, feature: &str, tier: &PricingTier) -> FeatureValue {
        self.rows
            .iter()
            .find(|row| row.feature == feature)
            .map(|row| row.rule.value_for(tier.capacity))
            .unwrap_or(FeatureValue::Included)
    }
}

// ============================================================================
// Carousel
// ============================================================================

/// One carousel slide (image path plus alt text).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image path.
    pub src: String,
    /// Alt text.
    pub alt: String,
}

impl Slide {
    /// Convenience constructor.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Slide {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Cyclic index state over a fixed, non-empty slide list.
///
/// Construction from an empty list is refused, which keeps every navigation
/// operation total: `next`/`previous` wrap modulo the slide count and
/// `go_to` rejects out-of-range targets as a no-op.
///
/// # Example
///
/// ```rust
/// use page_leptos::types::{Carousel, Slide};
///
/// let mut carousel = Carousel::new(vec![
///     Slide::new("/agent1.png", "Dashboard"),
///     Slide::new("/agent2.png", "Chat"),
/// ])
/// .expect("non-empty slides");
///
/// carousel.next();
/// assert_eq!(carousel.index(), 1);
/// carousel.next();
/// assert_eq!(carousel.index(), 0); // wrapped
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    /// Build a carousel positioned on the first slide.
    ///
    /// Returns `None` for an empty slide list.
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            None
        } else {
            Some(Carousel { slides, index: 0 })
        }
    }

    /// Number of slides. Always at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Current slide index, always in `0..len`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The slide at the current index.
    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    /// All slides, in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Advance to the next slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        self.index = Self::wrap_forward(self.index, self.slides.len()).unwrap_or(self.index);
    }

    /// Step to the previous slide, wrapping to the last before the first.
    pub fn previous(&mut self) {
        self.index = Self::wrap_back(self.index, self.slides.len()).unwrap_or(self.index);
    }

    /// Jump directly to a slide.
    ///
    /// Out-of-range targets leave the index untouched and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// `(index + 1) mod len`, or `None` when `len == 0`.
    ///
    /// Shared with the browser-side module so DOM wiring and native state
    /// use the same arithmetic.
    pub fn wrap_forward(index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some((index % len + 1) % len)
        }
    }

    /// `(index - 1 + len) mod len`, or `None` when `len == 0`.
    pub fn wrap_back(index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some((index % len + len - 1) % len)
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Page color scheme, persisted under a single localStorage key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default scheme.
    #[default]
    Dark,
    /// Opt-in light scheme.
    Light,
}

/// Error for strings that are neither `"dark"` nor `"light"`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized theme {0:?}, expected \"dark\" or \"light\"")]
pub struct ThemeParseError(pub String);

impl Theme {
    /// localStorage key the pages read and the header toggle writes.
    pub const STORAGE_KEY: &'static str = "theme";

    /// Resolve a persisted value the way the page bootstrap does: absent or
    /// invalid values fall back to the default (dark).
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// CSS class applied to the document root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    /// Canonical persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Page content sections
// ============================================================================

/// Star-rating summary shown in the trust bar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Average score out of 5.
    pub score: f32,
    /// Number of reviews.
    pub reviews: u32,
}

/// Media panel on the right side of the hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroMedia {
    /// Product screenshot.
    Image {
        /// Image path.
        src: String,
        /// Alt text.
        alt: String,
    },
    /// "Coming Soon" placeholder where a demo video will land.
    ComingSoon {
        /// Line under the placeholder heading.
        note: String,
    },
}

impl Default for HeroMedia {
    fn default() -> Self {
        HeroMedia::Image {
            src: String::new(),
            alt: String::new(),
        }
    }
}

/// Hero section copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Badge pill above the title ("ADOPLE AI SELECT").
    pub badge: String,
    /// Headline.
    pub title: String,
    /// Supporting paragraph.
    pub tagline: String,
    /// Gradient behind the hero.
    pub accent: Accent,
    /// "Starting at $N" pill target price.
    pub starting_price: u32,
    /// Right-hand media panel.
    pub media: HeroMedia,
}

/// One expandable topic in the feature accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTopic {
    /// Emoji or short glyph prefix.
    pub icon: String,
    /// Topic title.
    pub title: String,
    /// Prose summary, when the topic has no bullet list.
    pub summary: Option<String>,
    /// Bullet points, when the topic has them.
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Company fact card next to the story block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFacts {
    /// Founding date line.
    pub founded: String,
    /// Headquarters line.
    pub location: String,
    /// Team size range.
    pub team_size: String,
    /// Funding stage.
    pub funding: String,
    /// Company website URL.
    pub website: String,
}

/// Story article next to the fact card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Article heading.
    pub heading: String,
    /// Article body paragraph.
    pub body: String,
}

/// One customer testimonial card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Card headline.
    pub title: String,
    /// Pull quote under the headline.
    pub quote: String,
    /// Reviewer name.
    pub author: String,
    /// Display date.
    pub date: String,
}

/// One "Stories you'll love" card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCard {
    /// Card title.
    pub title: String,
    /// Display date.
    pub date: String,
}

/// One FAQ entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question shown in the summary row.
    pub question: String,
    /// Expanded answer.
    pub answer: String,
}

/// Pricing comparison section content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSection {
    /// The four tiers, capacities ascending.
    pub tiers: Vec<PricingTier>,
    /// Feature table resolved per tier.
    pub matrix: FeatureMatrix,
    /// External purchase endpoint for the "Buy now" links.
    pub purchase_url: String,
    /// Note under each tier price ("Lifetime access").
    pub tier_note: String,
    /// Fine print under the table.
    pub fine_print: String,
}

/// Bottom call-to-action banner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Banner heading.
    pub heading: String,
    /// Line under the heading.
    pub tagline: String,
    /// Button label.
    pub label: String,
    /// External purchase endpoint.
    pub url: String,
}

/// Everything one product page is rendered from.
///
/// This is the configuration object of the generic page renderer: one
/// layout, N products, no duplicated page components. Built per product in
/// the `storefront` crate and handed to
/// [`render_product_page`](crate::render_product_page).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageSpec {
    /// Product slug; also the output path segment.
    pub slug: String,
    /// Document title.
    pub title: String,
    /// Hero banner content.
    pub hero: Hero,
    /// Trust-bar rating summary.
    pub rating: RatingSummary,
    /// Heading over the feature accordion.
    pub feature_heading: String,
    /// Accordion topics; the first renders expanded.
    pub features: Vec<FeatureTopic>,
    /// Image panel beside the accordion.
    pub feature_image: Slide,
    /// Carousel slides. Must be non-empty; `storefront check` enforces it
    /// and [`Carousel::new`] refuses the empty case at runtime.
    pub slides: Vec<Slide>,
    /// Pricing comparison content.
    pub pricing: PricingSection,
    /// Company fact card.
    pub company: CompanyFacts,
    /// Story article.
    pub story: Story,
    /// Testimonial cards.
    pub testimonials: Vec<Testimonial>,
    /// "Stories you'll love" cards.
    pub story_cards: Vec<StoryCard>,
    /// FAQ entries.
    pub faqs: Vec<FaqEntry>,
    /// Bottom banner.
    pub cta: CallToAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("/shot{i}.png"), format!("Shot {i}")))
            .collect()
    }

    fn tier(capacity: u32) -> PricingTier {
        PricingTier {
            name: "License Tier".into(),
            price: 99,
            capacity,
        }
    }

    #[test]
    fn carousel_refuses_empty_slides() {
        assert!(Carousel::new(Vec::new()).is_none());
        assert!(Carousel::new(slides(1)).is_some());
    }

    #[test]
    fn carousel_next_is_cyclic() {
        for n in 1..=6 {
            let mut carousel = Carousel::new(slides(n)).unwrap();
            for start in 0..n {
                assert!(carousel.go_to(start));
                for _ in 0..n {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn carousel_previous_inverts_next() {
        for n in 1..=6 {
            let mut carousel = Carousel::new(slides(n)).unwrap();
            for start in 0..n {
                assert!(carousel.go_to(start));
                carousel.next();
                carousel.previous();
                assert_eq!(carousel.index(), start, "n={n} start={start}");
                carousel.previous();
                carousel.next();
                assert_eq!(carousel.index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn carousel_previous_wraps_to_last() {
        let mut carousel = Carousel::new(slides(4)).unwrap();
        carousel.previous();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn carousel_go_to_rejects_out_of_range() {
        let mut carousel = Carousel::new(slides(3)).unwrap();
        assert!(carousel.go_to(2));
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn wrap_helpers_match_state_ops() {
        assert_eq!(Carousel::wrap_forward(0, 0), None);
        assert_eq!(Carousel::wrap_back(0, 0), None);
        for len in 1..=5usize {
            for index in 0..len {
                let mut carousel = Carousel::new(slides(len)).unwrap();
                carousel.go_to(index);
                carousel.next();
                assert_eq!(Carousel::wrap_forward(index, len), Some(carousel.index()));
                let mut carousel = Carousel::new(slides(len)).unwrap();
                carousel.go_to(index);
                carousel.previous();
                assert_eq!(Carousel::wrap_back(index, len), Some(carousel.index()));
            }
        }
    }

    #[test]
    fn unlocked_rule_is_monotone_over_capacity_ladder() {
        for min_capacity in [0u32, 200, 400, 800] {
            let rule = FeatureRule::Unlocked { min_capacity };
            for capacity in [0u32, 200, 400, 800] {
                let value = rule.value_for(capacity);
                if capacity >= min_capacity {
                    assert_eq!(value, FeatureValue::Included);
                } else {
                    assert_eq!(value, FeatureValue::Excluded);
                }
            }
        }
    }

    #[test]
    fn scaled_rule_picks_highest_reached_step() {
        let row = FeatureRow::scaled(
            "Document storage (GB)",
            [(0, "10"), (200, "100"), (400, "500"), (800, "1,000")],
        );
        let expected = [(0, "10"), (200, "100"), (400, "500"), (800, "1,000")];
        for (capacity, label) in expected {
            assert_eq!(
                row.rule.value_for(capacity),
                FeatureValue::Label(label.into())
            );
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        let matrix = FeatureMatrix {
            rows: vec![
                FeatureRow::unlocked("Custom AI assistants", 200),
                FeatureRow::scaled("Built-in connectors", [(0, "10"), (200, "40+")]),
            ],
        };
        let tier = tier(200);
        let first = matrix.resolve("Custom AI assistants", &tier);
        for _ in 0..10 {
            assert_eq!(matrix.resolve("Custom AI assistants", &tier), first);
        }
    }

    #[test]
    fn resolve_defaults_unknown_features_to_included() {
        let matrix = FeatureMatrix::default();
        assert_eq!(
            matrix.resolve("Telepathic support", &tier(0)),
            FeatureValue::Included
        );
    }

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        // Invalid persisted values are silently ignored.
        assert_eq!(Theme::from_stored(Some("blue")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    }

    #[test]
    fn theme_parse_rejects_unknown_values() {
        let err = "blue".parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeParseError("blue".into()));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    }
}
