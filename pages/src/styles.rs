//! CSS styles for the storefront pages.
//!
//! This module contains the complete CSS for rendering the deals listing
//! and product pages, including the dark/light theme variables and the
//! carousel and pricing-table styling.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use page_leptos::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```
//!
//! Dark is the default scheme; the bootstrap script swaps
//! `theme-dark`/`theme-light` on the document root, and every themed rule
//! keys off those classes.

/// Complete CSS for the storefront pages.
///
/// This CSS provides:
/// - Theme variables (dark default, light overrides)
/// - Sticky header and nav styling
/// - Hero, accordion, carousel, pricing table, testimonial and FAQ sections
/// - Product card grid for the deals listing
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #0b0e0c;
    --bg-raised: rgba(255, 255, 255, 0.05);
    --bg-sunken: rgba(0, 0, 0, 0.3);
    --bg-panel: #0f1311;
    --bg-footer: #0b0e0c;
    --text-main: #ffffff;
    --text-muted: rgba(255, 255, 255, 0.65);
    --ring: rgba(255, 255, 255, 0.1);
    --accent-buy: #facc15;
    --accent-buy-hover: #eab308;
    --accent-check: #10b981;
    --accent-star: #facc15;
    --font-sans: ui-sans-serif, system-ui, 'Segoe UI', Helvetica, Arial, sans-serif;
    --container-max: 1280px;
}

html.theme-light {
    --bg-page: #ffffff;
    --bg-raised: rgba(0, 0, 0, 0.05);
    --bg-sunken: #ffffff;
    --bg-panel: #fafafa;
    --bg-footer: #f3f4f6;
    --text-main: #0b0e0c;
    --text-muted: rgba(11, 14, 12, 0.6);
    --ring: rgba(0, 0, 0, 0.1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

a {
    color: inherit;
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}

img {
    max-width: 100%;
    display: block;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    border-bottom: 1px solid var(--ring);
    background: color-mix(in srgb, var(--bg-page) 70%, transparent);
    backdrop-filter: blur(8px);
}

.site-header-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 12px 16px;
    display: flex;
    align-items: center;
    gap: 24px;
}

.site-brand {
    font-weight: 600;
    letter-spacing: 0.05em;
}

.site-nav {
    display: flex;
    align-items: center;
    gap: 16px;
    font-size: 14px;
    color: var(--text-muted);
}

.site-nav a:hover {
    color: var(--text-main);
    text-decoration: none;
}

.site-header-actions {
    margin-left: auto;
    display: flex;
    align-items: center;
    gap: 12px;
}

.btn-browse {
    border-radius: 6px;
    padding: 8px 12px;
    font-size: 14px;
    font-weight: 500;
    background: var(--text-main);
    color: var(--bg-page);
}

.btn-browse:hover {
    text-decoration: none;
    opacity: 0.9;
}

.cart-link {
    font-size: 14px;
}

.theme-toggle {
    border: 1px solid var(--ring);
    background: transparent;
    color: var(--text-main);
    border-radius: 999px;
    padding: 6px;
    cursor: pointer;
    display: inline-flex;
    align-items: center;
}

html.theme-dark .theme-icon-dark { display: none; }
html.theme-dark .theme-icon-light { display: block; }
html.theme-light .theme-icon-light { display: none; }
html.theme-light .theme-icon-dark { display: block; }

/* Hero */
.hero {
    margin: 24px 16px 0;
    border-radius: 16px;
    padding: 40px 24px;
    color: #ffffff;
}

.hero-grid {
    max-width: var(--container-max);
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    align-items: center;
}

@media (min-width: 768px) {
    .hero-grid {
        grid-template-columns: 1fr 1fr;
    }
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 12px;
    font-weight: 500;
    background: rgba(0, 0, 0, 0.3);
    border-radius: 999px;
    padding: 4px 12px;
    margin-bottom: 16px;
}

.hero-title {
    font-size: clamp(30px, 5vw, 48px);
    font-weight: 600;
    margin: 0;
}

.hero-tagline {
    margin-top: 16px;
    font-size: 15px;
    opacity: 0.9;
    max-width: 65ch;
}

.hero-actions {
    margin-top: 24px;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 12px;
}

.pill-primary {
    border-radius: 999px;
    background: var(--accent-buy);
    color: #000000;
    font-weight: 600;
    padding: 8px 20px;
}

.pill-primary:hover {
    background: var(--accent-buy-hover);
    text-decoration: none;
}

.pill-ghost {
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.15);
    color: #ffffff;
    padding: 8px 20px;
}

.pill-ghost:hover {
    background: rgba(255, 255, 255, 0.25);
    text-decoration: none;
}

.hero-media {
    width: 100%;
    aspect-ratio: 16 / 9;
    border-radius: 12px;
    overflow: hidden;
    border: 1px solid rgba(255, 255, 255, 0.2);
}

.hero-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-coming-soon {
    width: 100%;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    background: linear-gradient(135deg, #1f2937, #111827);
    color: #ffffff;
    gap: 8px;
}

/* Section scaffolding */
.section {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 40px 16px;
}

.section-title {
    font-size: clamp(24px, 3vw, 30px);
    font-weight: 600;
    margin: 0 0 24px;
}

.trust-bar {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 14px;
    color: var(--text-muted);
    margin-bottom: 24px;
}

.stars {
    color: var(--accent-star);
    letter-spacing: 2px;
}

/* Feature accordion */
.feature-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .feature-grid {
        grid-template-columns: 1fr 1fr;
    }
}

.feature-topics {
    margin: 24px 0 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.feature-topic {
    border: 1px solid var(--ring);
    border-radius: 8px;
    padding: 16px;
}

.feature-topic summary {
    font-weight: 500;
    cursor: pointer;
}

.feature-topic p,
.feature-topic ul {
    margin: 8px 0 0;
    font-size: 14px;
    color: var(--text-muted);
}

.feature-topic ul {
    padding-left: 20px;
}

.feature-panel {
    border-radius: 12px;
    padding: 12px;
    border: 1px solid var(--ring);
    background: var(--bg-raised);
    align-self: start;
}

.feature-panel img {
    border-radius: 8px;
    width: 100%;
    height: auto;
}

/* Carousel */
.carousel {
    position: relative;
    width: 100%;
    max-width: 1200px;
    margin: 0 auto 32px;
    display: flex;
    flex-direction: column;
    align-items: center;
    background: var(--bg-raised);
    border: 1px solid var(--ring);
    border-radius: 12px;
    padding: 24px 16px;
}

.carousel-viewport {
    position: relative;
    width: 100%;
    max-width: 1100px;
    height: 500px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.carousel-slide {
    display: none;
    width: 100%;
    height: 100%;
    object-fit: contain;
    border-radius: 8px;
}

.carousel-slide.active {
    display: block;
}

.carousel-btn {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: rgba(0, 0, 0, 0.4);
    color: #ffffff;
    border: none;
    border-radius: 999px;
    padding: 8px;
    cursor: pointer;
    z-index: 10;
    display: inline-flex;
}

.carousel-btn:hover {
    background: rgba(0, 0, 0, 0.7);
}

.carousel-btn.prev { left: 8px; }
.carousel-btn.next { right: 8px; }

.carousel-dots {
    display: flex;
    gap: 8px;
    margin-top: 16px;
}

.carousel-dot {
    width: 12px;
    height: 12px;
    border-radius: 999px;
    border: none;
    background: rgba(156, 163, 175, 0.4);
    cursor: pointer;
    padding: 0;
}

.carousel-dot.active {
    background: var(--accent-buy);
}

/* Pricing table */
.pricing-table-wrap {
    border-radius: 12px;
    overflow-x: auto;
    border: 1px solid var(--ring);
}

.pricing-table {
    min-width: 800px;
    width: 100%;
    font-size: 14px;
    border-collapse: collapse;
}

.pricing-table th,
.pricing-table td {
    text-align: left;
    padding: 12px;
}

.pricing-table thead th {
    padding: 16px;
    vertical-align: top;
}

.pricing-table tbody tr.alt {
    background: var(--bg-raised);
}

.tier-name {
    font-size: 14px;
    font-weight: 400;
}

.tier-price {
    font-size: 24px;
    font-weight: 600;
}

.tier-buy {
    margin-top: 8px;
    display: inline-block;
    border-radius: 999px;
    background: var(--accent-buy);
    color: #000000;
    font-weight: 600;
    padding: 6px 16px;
    text-align: center;
}

.tier-buy:hover {
    background: var(--accent-buy-hover);
    text-decoration: none;
}

.tier-note {
    font-size: 12px;
    margin-top: 4px;
    opacity: 0.7;
}

.value-check {
    color: var(--accent-check);
    display: inline-flex;
}

.value-cross {
    color: var(--text-muted);
    display: inline-flex;
}

.fine-print {
    font-size: 12px;
    color: var(--text-muted);
    margin-top: 16px;
}

/* Story block */
.story-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .story-grid {
        grid-template-columns: 280px 1fr;
    }
}

.fact-card {
    border-radius: 12px;
    padding: 16px;
    border: 1px solid var(--ring);
    background: var(--bg-raised);
    font-size: 14px;
    display: flex;
    flex-direction: column;
    gap: 12px;
    align-self: start;
}

.fact-card a {
    text-decoration: underline;
}

.story-body {
    color: var(--text-muted);
}

/* Cards (testimonials, stories, deals) */
.card-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

@media (min-width: 640px) {
    .card-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .card-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }
}

.card {
    border-radius: 12px;
    padding: 16px;
    border: 1px solid var(--ring);
    background: var(--bg-raised);
}

.card h4 {
    margin: 8px 0 0;
    font-weight: 500;
}

.card .quote {
    margin: 8px 0 0;
    font-size: 14px;
    color: var(--text-muted);
}

.card .byline {
    margin-top: 16px;
    font-size: 12px;
    color: var(--text-muted);
}

.card-thumb {
    aspect-ratio: 16 / 9;
    border-radius: 8px;
    background: var(--bg-sunken);
    border: 1px solid var(--ring);
    margin-bottom: 12px;
}

/* FAQ */
.faq-shell {
    max-width: var(--container-max);
    margin: 0 auto;
    border-radius: 16px;
    padding: 40px 24px;
    background: var(--bg-panel);
}

.faq-search {
    display: flex;
    align-items: center;
    gap: 8px;
}

.faq-search input {
    width: 100%;
    border-radius: 999px;
    padding: 8px 16px;
    border: 1px solid var(--ring);
    background: var(--bg-sunken);
    color: var(--text-main);
    outline: none;
}

.faq-search button {
    border-radius: 999px;
    padding: 8px 16px;
    font-size: 14px;
    border: none;
    background: var(--bg-raised);
    color: var(--text-main);
    cursor: pointer;
}

.faq-tabs {
    margin-top: 24px;
    display: flex;
    align-items: center;
    gap: 12px;
    font-size: 14px;
    color: var(--text-muted);
}

.faq-tabs .active-tab {
    border: 1px solid var(--ring);
    border-radius: 6px;
    padding: 4px 12px;
    font-weight: 500;
    color: var(--text-main);
}

.faq-list {
    margin-top: 24px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.faq-list details {
    border-radius: 8px;
    padding: 16px;
    border: 1px solid var(--ring);
    background: var(--bg-sunken);
}

.faq-list summary {
    cursor: pointer;
    font-weight: 500;
}

.faq-list p {
    margin: 8px 0 0;
    font-size: 14px;
    color: var(--text-muted);
}

/* Bottom CTA */
.bottom-cta {
    margin-top: 24px;
    padding: 56px 16px;
    text-align: center;
    background: #0a0a0a;
    color: #ffffff;
}

.bottom-cta p {
    margin: 8px 0 0;
    font-size: 14px;
    opacity: 0.8;
}

.bottom-cta .pill-primary {
    display: inline-block;
    margin-top: 20px;
}

/* Footer */
.site-footer {
    padding: 48px 16px;
    border-top: 1px solid var(--ring);
    background: var(--bg-footer);
}

.footer-grid {
    max-width: var(--container-max);
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    font-size: 14px;
}

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-grid h4 {
    font-weight: 600;
    margin: 0 0 8px;
}

.footer-grid ul {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 4px;
    opacity: 0.8;
}

.footer-grid p {
    margin: 0;
    opacity: 0.7;
}

/* Deals listing */
.deals-header {
    max-width: var(--container-max);
    margin: 32px auto 0;
    padding: 0 16px;
}

.deal-card {
    display: flex;
    flex-direction: column;
    border-radius: 12px;
    border: 1px solid var(--ring);
    background: var(--bg-raised);
    overflow: hidden;
}

.deal-card:hover {
    text-decoration: none;
    border-color: var(--accent-buy);
}

.deal-art {
    height: 120px;
}

.deal-body {
    padding: 16px;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.deal-badge {
    font-size: 11px;
    font-weight: 600;
    letter-spacing: 0.05em;
    color: var(--accent-buy);
}

.deal-name {
    font-size: 18px;
    font-weight: 600;
    margin: 0;
}

.deal-kind {
    font-size: 13px;
    color: var(--text-muted);
}

.deal-short {
    font-size: 14px;
    color: var(--text-muted);
}

.deal-meta {
    display: flex;
    align-items: baseline;
    gap: 8px;
    margin-top: auto;
}

.deal-price {
    font-size: 20px;
    font-weight: 600;
}

.deal-compare {
    font-size: 14px;
    color: var(--text-muted);
    text-decoration: line-through;
}

.deal-plan {
    margin-left: auto;
    font-size: 12px;
    border: 1px solid var(--ring);
    border-radius: 999px;
    padding: 2px 10px;
}

.deal-rating {
    font-size: 13px;
    color: var(--text-muted);
}

.deal-integrations {
    display: flex;
    flex-wrap: wrap;
    gap: 6px;
    font-size: 12px;
    color: var(--text-muted);
}

.deal-integrations span {
    border: 1px solid var(--ring);
    border-radius: 999px;
    padding: 2px 8px;
}
"#;

/// Content Security Policy for the generated pages.
///
/// Inline styles and the inline bootstrap script are part of the generated
/// document, so both get 'unsafe-inline'; everything else stays same-origin
/// except the outbound purchase links, which are plain anchors.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
