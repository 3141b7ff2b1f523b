//! Page spec for the Email Verifier.

use page_leptos::types::{
    Accent, CallToAction, CompanyFacts, FaqEntry, FeatureMatrix, FeatureRow, FeatureTopic, Hero,
    HeroMedia, PageSpec, PricingSection, PricingTier, RatingSummary, Slide, Story, StoryCard,
    Testimonial,
};

const PURCHASE_URL: &str = "http://20.81.227.200:3003/";

const ANSWER_GETTING_STARTED: &str = "Sign up for free, upload your email list or use our \
    API, and start getting real-time verification results immediately.";
const ANSWER_METHODS: &str = "We use syntax validation, MX record lookup, SMTP verification, \
    disposable email detection, and role-based detection for 99.9% accuracy.";

const QUOTE_DELIVERABILITY: &str = "This tool has dramatically improved our email \
    deliverability rates and reduced bounce rates by 90%.";
const QUOTE_BULK: &str = "The verification accuracy is outstanding, and the bulk processing \
    feature has saved us countless hours.";

pub fn spec() -> PageSpec {
    PageSpec {
        slug: "email-verifier".into(),
        title: "Email Verifier - Adople Marketplace".into(),
        hero: Hero {
            badge: "ADOPLE AI SELECT".into(),
            title: "Email Verifier - High-Performance Validation".into(),
            tagline: "Comprehensive email verification system with 99.9% accuracy. Validate \
                      emails in real-time using multi-layer verification pipeline including \
                      SMTP, MX records, and disposable email detection."
                .into(),
            accent: Accent {
                from: "#059669".into(),
                to: "#0d9488".into(),
            },
            starting_price: 29,
            // Demo video slot not live yet
            media: HeroMedia::ComingSoon {
                note: "Video demonstration will be available soon".into(),
            },
        },
        rating: RatingSummary {
            score: 4.8,
            reviews: 89,
        },
        feature_heading: "Multi-Layer Verification Pipeline".into(),
        features: features(),
        feature_image: Slide::new("/email-img.png", "Email Verification Dashboard"),
        slides: vec![
            Slide::new("/email.png", "Email Verifier Dashboard"),
            Slide::new("/email1.png", "Validation Results"),
            Slide::new("/email2.png", "Bulk Processing"),
            Slide::new("/email3.png", "API Integration"),
            Slide::new("/email4.png", "CSV Export"),
            Slide::new("/email2.png", "Analytics Dashboard"),
        ],
        pricing: PricingSection {
            tiers: tiers(),
            matrix: matrix(),
            purchase_url: PURCHASE_URL.into(),
            tier_note: "Lifetime access".into(),
            fine_print: "Deal terms & conditions. Lifetime access. Ability to upgrade \
                         between license tiers within 60 days of purchase."
                .into(),
        },
        company: CompanyFacts {
            founded: "February 15, 2024".into(),
            location: "San Francisco, United States".into(),
            team_size: "20–40".into(),
            funding: "Series B".into(),
            website: "https://email-verifier.ai/".into(),
        },
        story: Story {
            heading: "Revolutionizing email validation with AI".into(),
            body: "Email Verifier was built to solve the critical challenge of email \
                   deliverability in the digital age. By combining advanced machine \
                   learning, real-time SMTP verification, and comprehensive validation \
                   algorithms, we've created a system that achieves 99.9% accuracy in \
                   email validation. Our multi-layer verification pipeline ensures that \
                   businesses can maintain clean email lists, improve deliverability \
                   rates, and reduce bounce rates significantly across all marketing \
                   campaigns and user registrations."
                .into(),
        },
        testimonials: testimonials(),
        story_cards: vec![
            StoryCard {
                title: "How to Optimize Email Deliverability Rates".into(),
                date: "Feb 25, 2025".into(),
            },
            StoryCard {
                title: "NEW FEATURE — Advanced SMTP Verification".into(),
                date: "Feb 22, 2025".into(),
            },
            StoryCard {
                title: "The Complete Guide to Email List Cleaning".into(),
                date: "Feb 20, 2025".into(),
            },
        ],
        faqs: faqs(),
        cta: CallToAction {
            heading: "Transform your email deliverability today".into(),
            tagline: "Powered by advanced AI, just upload and verify.".into(),
            label: "Get Email Verifier now".into(),
            url: PURCHASE_URL.into(),
        },
    }
}

fn tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "License Tier 1".into(),
            price: 29,
            capacity: 0,
        },
        PricingTier {
            name: "License Tier 2".into(),
            price: 149,
            capacity: 200,
        },
        PricingTier {
            name: "License Tier 3".into(),
            price: 299,
            capacity: 400,
        },
        PricingTier {
            name: "License Tier 4".into(),
            price: 499,
            capacity: 800,
        },
    ]
}

/// Every pricing-tier business rule for this page, in display order.
fn matrix() -> FeatureMatrix {
    FeatureMatrix {
        rows: vec![
            FeatureRow::scaled(
                "Email verifications per month",
                [(0, "10,000"), (200, "Unlimited")],
            ),
            FeatureRow::unlocked("Bulk processing (CSV upload)", 200),
            FeatureRow::scaled(
                "API access & rate limits",
                [(0, "100/min"), (200, "1000/min")],
            ),
            FeatureRow::unlocked("Real-time verification", 0),
            FeatureRow::unlocked("SMTP verification", 0),
            FeatureRow::unlocked("Disposable email detection", 0),
            FeatureRow::unlocked("Role-based detection", 0),
            FeatureRow::unlocked("CSV export results", 200),
            FeatureRow::unlocked("Advanced analytics", 400),
            FeatureRow::unlocked("Priority support", 400),
            FeatureRow::unlocked("White-label options", 800),
            FeatureRow::unlocked("Custom integrations", 800),
        ],
    }
}

fn features() -> Vec<FeatureTopic> {
    vec![
        FeatureTopic {
            icon: "🔍".into(),
            title: "Syntax Validation".into(),
            summary: Some(
                "RFC-compliant email format checking with advanced pattern recognition. \
                 Validates email structure, domain format, and special character handling."
                    .into(),
            ),
            bullets: vec![],
        },
        FeatureTopic {
            icon: "🌐".into(),
            title: "MX Record Lookup".into(),
            summary: None,
            bullets: vec![
                "DNS validation for mail server existence".into(),
                "Real-time domain verification".into(),
                "Multiple MX record checking".into(),
                "TTL optimization for performance".into(),
            ],
        },
        FeatureTopic {
            icon: "🚫".into(),
            title: "Disposable Email Detection".into(),
            summary: Some(
                "Identifies temporary and fake email services with comprehensive database \
                 of disposable email providers. Updated daily for maximum accuracy."
                    .into(),
            ),
            bullets: vec![],
        },
        FeatureTopic {
            icon: "⚡".into(),
            title: "SMTP Verification".into(),
            summary: Some(
                "Real-time mailbox existence checking with 10-40 simultaneous connections. \
                 Advanced timeout management and error handling for optimal performance."
                    .into(),
            ),
            bullets: vec![],
        },
        FeatureTopic {
            icon: "🎯".into(),
            title: "Heuristic Scoring".into(),
            summary: Some(
                "Advanced algorithm for uncertain results with 99.9% accuracy. Combines \
                 multiple verification factors for reliable email validation."
                    .into(),
            ),
            bullets: vec![],
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    [
        ("Email verification is incredibly accurate", "Sarah Johnson", "Feb 20, 2025"),
        ("Saves hours of manual email validation", "Michael Chen", "Feb 18, 2025"),
        ("Perfect for email marketing campaigns", "Emily Rodriguez", "Feb 15, 2025"),
        ("API integration is seamless", "David Thompson", "Feb 12, 2025"),
        ("Bulk processing works flawlessly", "Lisa Park", "Feb 10, 2025"),
        ("Best investment for email deliverability", "James Wilson", "Feb 8, 2025"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (title, author, date))| Testimonial {
        title: title.into(),
        quote: if idx % 2 == 1 {
            QUOTE_BULK
        } else {
            QUOTE_DELIVERABILITY
        }
        .into(),
        author: author.into(),
        date: date.into(),
    })
    .collect()
}

fn faqs() -> Vec<FaqEntry> {
    [
        "How do I get started with Email Verifier?",
        "What verification methods are used?",
        "How accurate is the email validation?",
        "Can I process bulk email lists?",
        "Do you provide API access?",
        "How secure is my email data?",
        "What file formats are supported?",
        "Can I integrate with my existing tools?",
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, question)| FaqEntry {
        question: question.into(),
        answer: if idx % 2 == 1 {
            ANSWER_METHODS
        } else {
            ANSWER_GETTING_STARTED
        }
        .into(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_leptos::types::FeatureValue;
    use pretty_assertions::assert_eq;

    fn tier_with_capacity(capacity: u32) -> PricingTier {
        tiers()
            .into_iter()
            .find(|tier| tier.capacity == capacity)
            .unwrap()
    }

    #[test]
    fn core_verification_is_included_in_every_tier() {
        let matrix = matrix();
        for capacity in [0, 200, 400, 800] {
            let tier = tier_with_capacity(capacity);
            for feature in [
                "Real-time verification",
                "SMTP verification",
                "Disposable email detection",
                "Role-based detection",
            ] {
                assert_eq!(matrix.resolve(feature, &tier), FeatureValue::Included);
            }
        }
    }

    #[test]
    fn bulk_processing_unlocks_at_200() {
        let matrix = matrix();
        assert_eq!(
            matrix.resolve("Bulk processing (CSV upload)", &tier_with_capacity(0)),
            FeatureValue::Excluded
        );
        for capacity in [200, 400, 800] {
            assert_eq!(
                matrix.resolve(
                    "Bulk processing (CSV upload)",
                    &tier_with_capacity(capacity)
                ),
                FeatureValue::Included
            );
        }
    }

    #[test]
    fn rate_limit_steps_up_once() {
        let matrix = matrix();
        assert_eq!(
            matrix.resolve("API access & rate limits", &tier_with_capacity(0)),
            FeatureValue::Label("100/min".into())
        );
        assert_eq!(
            matrix.resolve("API access & rate limits", &tier_with_capacity(800)),
            FeatureValue::Label("1000/min".into())
        );
    }

    #[test]
    fn spec_uses_the_29_dollar_ladder() {
        let spec = spec();
        let prices: Vec<_> = spec.pricing.tiers.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![29, 149, 299, 499]);
        assert!(matches!(spec.hero.media, HeroMedia::ComingSoon { .. }));
    }
}
