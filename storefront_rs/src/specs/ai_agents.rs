//! Page spec for the AI Agents RAG platform.

use page_leptos::types::{
    Accent, CallToAction, CompanyFacts, FaqEntry, FeatureMatrix, FeatureRow, FeatureTopic, Hero,
    HeroMedia, PageSpec, PricingSection, PricingTier, RatingSummary, Slide, Story, StoryCard,
    Testimonial,
};

const PURCHASE_URL: &str = "http://agent.adople.in/";

const ANSWER_GETTING_STARTED: &str = "Sign up for free, upload your documents, and start \
    building your AI-powered knowledge base immediately.";
const ANSWER_CONNECTORS: &str = "We support 40+ connectors including Notion, Slack, GitHub, \
    Google Drive, and many more for seamless integration.";

const QUOTE_HUB: &str = "AI Agents has become the central hub for all our knowledge \
    management needs.";
const QUOTE_CONNECT: &str = "The platform's ability to connect with all our existing tools \
    has revolutionized our workflow.";

pub fn spec() -> PageSpec {
    PageSpec {
        slug: "ai-agents".into(),
        title: "AI Agents - Adople Marketplace".into(),
        hero: Hero {
            badge: "ADOPLE AI SELECT".into(),
            title: "AI Agents - RAG Platform".into(),
            tagline: "Comprehensive Retrieval-Augmented Generation (RAG) platform that \
                      combines document management, AI-powered chat, and knowledge base \
                      functionality with 40+ built-in connectors for seamless integration."
                .into(),
            accent: Accent {
                from: "#9333ea".into(),
                to: "#4f46e5".into(),
            },
            starting_price: 99,
            media: HeroMedia::Image {
                src: "/agent0.png".into(),
                alt: "AI Agents Platform".into(),
            },
        },
        rating: RatingSummary {
            score: 4.9,
            reviews: 156,
        },
        feature_heading: "Comprehensive RAG Platform Features".into(),
        features: features(),
        feature_image: Slide::new("/agent1.png", "RAG Platform Interface"),
        slides: vec![
            Slide::new("/agent1.png", "AI Agents Dashboard"),
            Slide::new("/agent2.png", "RAG Platform Interface"),
            Slide::new("/agent3.png", "Document Management"),
            Slide::new("/agent4.png", "AI Chat Interface"),
            Slide::new("/agent1.png", "40+ Connectors"),
            Slide::new("/agent3.png", "Analytics Dashboard"),
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
            founded: "March 1, 2024".into(),
            location: "San Francisco, United States".into(),
            team_size: "25–50".into(),
            funding: "Series B".into(),
            website: "https://ai-agents.ai/".into(),
        },
        story: Story {
            heading: "Revolutionizing knowledge management with AI".into(),
            body: "AI Agents was built to solve the critical challenge of information \
                   overload and knowledge management in the enterprise. By combining \
                   advanced Retrieval-Augmented Generation (RAG) technology with \
                   comprehensive document management and 40+ built-in connectors, we've \
                   created a platform that transforms how organizations access, process, \
                   and utilize their knowledge. Our multi-tenant architecture and \
                   enterprise-grade security make it suitable for teams of all sizes, from \
                   startups to Fortune 500 companies."
                .into(),
        },
        testimonials: testimonials(),
        story_cards: vec![
            StoryCard {
                title: "How to Build an Enterprise Knowledge Base".into(),
                date: "Mar 20, 2025".into(),
            },
            StoryCard {
                title: "NEW FEATURE — Advanced RAG Capabilities".into(),
                date: "Mar 18, 2025".into(),
            },
            StoryCard {
                title: "The Complete Guide to AI-Powered Document Management".into(),
                date: "Mar 15, 2025".into(),
            },
        ],
        faqs: faqs(),
        cta: CallToAction {
            heading: "Transform your knowledge management today".into(),
            tagline: "Powered by advanced RAG technology, just connect and chat.".into(),
            label: "Get AI Agents now".into(),
            url: PURCHASE_URL.into(),
        },
    }
}

fn tiers() -> Vec<PricingTier> {
    vec![
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
    ]
}

/// Every pricing-tier business rule for this page, in display order.
fn matrix() -> FeatureMatrix {
    FeatureMatrix {
        rows: vec![
            FeatureRow::scaled(
                "AI chat conversations per month",
                [(0, "1,000"), (200, "Unlimited")],
            ),
            FeatureRow::scaled(
                "Document storage (GB)",
                [(0, "10"), (200, "100"), (400, "500"), (800, "1,000")],
            ),
            FeatureRow::scaled("Built-in connectors", [(0, "10"), (200, "40+")]),
            FeatureRow::unlocked("Custom AI assistants", 200),
            FeatureRow::scaled(
                "API access & rate limits",
                [(0, "100/min"), (200, "1000/min")],
            ),
            FeatureRow::unlocked("Multi-tenant support", 400),
            FeatureRow::unlocked("Advanced analytics", 400),
            FeatureRow::unlocked("Priority support", 400),
            FeatureRow::unlocked("White-label options", 800),
            FeatureRow::unlocked("Custom integrations", 800),
            FeatureRow::unlocked("Slack bot integration", 800),
            FeatureRow::unlocked("Enterprise features", 800),
        ],
    }
}

fn features() -> Vec<FeatureTopic> {
    vec![
        FeatureTopic {
            icon: "🤖".into(),
            title: "AI Chat & Assistants".into(),
            summary: None,
            bullets: vec![
                "Real-time streaming chat with AI assistants".into(),
                "Custom personas/assistants with specific behaviors".into(),
                "Multi-model support (OpenAI, Google AI, Mistral)".into(),
                "Context-aware responses with document citations".into(),
                "Persistent chat history with search".into(),
            ],
        },
        FeatureTopic {
            icon: "📚".into(),
            title: "Document Management".into(),
            summary: None,
            bullets: vec![
                "Multiple file formats (PDF, DOCX, PPTX, etc.)".into(),
                "Advanced document processing and vector indexing".into(),
                "Document sets and hierarchical organization".into(),
                "OCR support for scanned documents".into(),
                "Drag & drop file upload interface".into(),
            ],
        },
        FeatureTopic {
            icon: "🔗".into(),
            title: "40+ Built-in Connectors".into(),
            summary: Some(
                "Seamless integration with productivity tools (Notion, Confluence, Google \
                 Drive), communication platforms (Slack, Discord, Teams), project \
                 management (Jira, Asana, ClickUp), support systems (Zendesk, Freshdesk), \
                 development tools (GitHub, GitLab), and more."
                    .into(),
            ),
            bullets: vec![],
        },
        FeatureTopic {
            icon: "🔐".into(),
            title: "Enterprise Security".into(),
            summary: None,
            bullets: vec![
                "Multiple auth types (Basic, Google OAuth, Cloud)".into(),
                "Role-based access control (Admin, Curator, Limited)".into(),
                "API key management and rate limiting".into(),
                "Multi-tenant architecture".into(),
                "Secure data isolation".into(),
            ],
        },
        FeatureTopic {
            icon: "🛠️".into(),
            title: "Advanced Features".into(),
            summary: None,
            bullets: vec![
                "Custom tool integration for AI assistants".into(),
                "Advanced prompt engineering and management".into(),
                "Configurable search parameters and ranking".into(),
                "Real-time notification system".into(),
                "Usage tracking and telemetry".into(),
                "Slack bot integration".into(),
            ],
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    [
        ("AI Agents transformed our knowledge management", "Sarah Johnson", "Mar 15, 2025"),
        ("The 40+ connectors are game-changing", "Michael Chen", "Mar 12, 2025"),
        ("Perfect for enterprise document management", "Emily Rodriguez", "Mar 10, 2025"),
        ("RAG-powered responses are incredibly accurate", "David Thompson", "Mar 8, 2025"),
        ("Multi-tenant architecture works flawlessly", "Lisa Park", "Mar 5, 2025"),
        ("Best investment for AI-powered knowledge base", "James Wilson", "Mar 3, 2025"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (title, author, date))| Testimonial {
        title: title.into(),
        quote: if idx % 2 == 1 { QUOTE_CONNECT } else { QUOTE_HUB }.into(),
        author: author.into(),
        date: date.into(),
    })
    .collect()
}

fn faqs() -> Vec<FaqEntry> {
    [
        "How do I get started with AI Agents?",
        "What connectors are available?",
        "How does the RAG technology work?",
        "Can I create custom AI assistants?",
        "Do you support multi-tenant deployments?",
        "How secure is my data?",
        "What file formats are supported?",
        "Can I integrate with my existing tools?",
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, question)| FaqEntry {
        question: question.into(),
        answer: if idx % 2 == 1 {
            ANSWER_CONNECTORS
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
    fn custom_assistants_unlock_at_200() {
        let matrix = matrix();
        assert_eq!(
            matrix.resolve("Custom AI assistants", &tier_with_capacity(0)),
            FeatureValue::Excluded
        );
        assert_eq!(
            matrix.resolve("Custom AI assistants", &tier_with_capacity(200)),
            FeatureValue::Included
        );
    }

    #[test]
    fn white_label_unlocks_at_800_only() {
        let matrix = matrix();
        assert_eq!(
            matrix.resolve("White-label options", &tier_with_capacity(400)),
            FeatureValue::Excluded
        );
        assert_eq!(
            matrix.resolve("White-label options", &tier_with_capacity(800)),
            FeatureValue::Included
        );
    }

    #[test]
    fn storage_ladder_ascends_with_capacity() {
        let matrix = matrix();
        let expected = [(0, "10"), (200, "100"), (400, "500"), (800, "1,000")];
        for (capacity, label) in expected {
            assert_eq!(
                matrix.resolve("Document storage (GB)", &tier_with_capacity(capacity)),
                FeatureValue::Label(label.into()),
            );
        }
    }

    #[test]
    fn conversations_cap_applies_to_base_tier_only() {
        let matrix = matrix();
        assert_eq!(
            matrix.resolve("AI chat conversations per month", &tier_with_capacity(0)),
            FeatureValue::Label("1,000".into())
        );
        for capacity in [200, 400, 800] {
            assert_eq!(
                matrix.resolve(
                    "AI chat conversations per month",
                    &tier_with_capacity(capacity)
                ),
                FeatureValue::Label("Unlimited".into())
            );
        }
    }

    #[test]
    fn spec_carries_four_ascending_tiers() {
        let spec = spec();
        let capacities: Vec<_> = spec.pricing.tiers.iter().map(|t| t.capacity).collect();
        assert_eq!(capacities, vec![0, 200, 400, 800]);
        let prices: Vec<_> = spec.pricing.tiers.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![99, 299, 599, 999]);
    }
}
